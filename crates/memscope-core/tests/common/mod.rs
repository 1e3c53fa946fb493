//! Shared test doubles for the integration suite.

use std::cell::RefCell;
use std::ptr::NonNull;

use memscope_core::{AllocError, Allocator, StandardAllocator};

/// Forwards to the standard allocator while recording every release.
///
/// Lets the guard scenarios assert "released exactly once, with the final
/// pointer" against real heap memory.
pub struct TracingAllocator {
    released: RefCell<Vec<*mut u8>>,
}

impl TracingAllocator {
    pub fn new() -> TracingAllocator {
        TracingAllocator {
            released: RefCell::new(Vec::new()),
        }
    }

    pub fn released(&self) -> Vec<*mut u8> {
        self.released.borrow().clone()
    }

    pub fn release_count(&self) -> usize {
        self.released.borrow().len()
    }
}

impl Allocator for TracingAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        StandardAllocator::shared().allocate(size)
    }

    fn reallocate(&self, ptr: NonNull<u8>, new_size: usize) -> Result<NonNull<u8>, AllocError> {
        StandardAllocator::shared().reallocate(ptr, new_size)
    }

    fn zero_allocate(&self, count: usize, elem_size: usize) -> Result<NonNull<u8>, AllocError> {
        StandardAllocator::shared().zero_allocate(count, elem_size)
    }

    fn release(&self, ptr: *mut u8) {
        if !ptr.is_null() {
            self.released.borrow_mut().push(ptr);
        }
        StandardAllocator::shared().release(ptr);
    }
}
