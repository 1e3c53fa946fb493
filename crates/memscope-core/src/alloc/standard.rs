//! Standard allocator: forwards to the process heap.
//!
//! The standard variant simply delegates to the native libc allocator
//! (`malloc`, `realloc`, `calloc`, `free`) with the crate's failure-propagation
//! discipline layered on top. It owns no resources and needs no teardown, so
//! a process-wide singleton is exposed through [`StandardAllocator::shared`].

use std::ffi::c_void;
use std::ptr::NonNull;

use crate::error::AllocError;

use super::Allocator;

/// The process-heap allocator.
pub struct StandardAllocator;

static SHARED: StandardAllocator = StandardAllocator;

impl StandardAllocator {
    /// The process-wide standard allocator instance.
    ///
    /// Identity comparisons against this reference are stable for the life
    /// of the process.
    pub fn shared() -> &'static StandardAllocator {
        &SHARED
    }
}

impl Allocator for StandardAllocator {
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError> {
        // malloc(0) may legally return null; round up so success is non-null.
        let size = size.max(1);
        // SAFETY: plain heap allocation of a nonzero size.
        let ptr = unsafe { libc::malloc(size) };
        NonNull::new(ptr.cast::<u8>()).ok_or(AllocError::Exhausted { size })
    }

    fn reallocate(&self, ptr: NonNull<u8>, new_size: usize) -> Result<NonNull<u8>, AllocError> {
        // realloc(p, 0) may free and return null; keep the region releasable.
        let new_size = new_size.max(1);
        // SAFETY: `ptr` was returned by this allocator and is still live; on
        // failure realloc leaves the original region untouched.
        let next = unsafe { libc::realloc(ptr.as_ptr().cast::<c_void>(), new_size) };
        NonNull::new(next.cast::<u8>()).ok_or(AllocError::Exhausted { size: new_size })
    }

    fn zero_allocate(&self, count: usize, elem_size: usize) -> Result<NonNull<u8>, AllocError> {
        let total = count
            .checked_mul(elem_size)
            .ok_or(AllocError::SizeOverflow { count, elem_size })?;
        let (count, elem_size) = if total == 0 { (1, 1) } else { (count, elem_size) };
        // SAFETY: plain zeroed heap allocation; the product is overflow-checked.
        let ptr = unsafe { libc::calloc(count, elem_size) };
        NonNull::new(ptr.cast::<u8>()).ok_or(AllocError::Exhausted { size: total.max(1) })
    }

    fn release(&self, ptr: *mut u8) {
        if ptr.is_null() {
            return;
        }
        // SAFETY: `ptr` came from this allocator's malloc/realloc/calloc.
        unsafe { libc::free(ptr.cast::<c_void>()) };
    }
}

/// Allocates `size` bytes from the standard allocator.
pub fn std_malloc(size: usize) -> Result<NonNull<u8>, AllocError> {
    StandardAllocator::shared().allocate(size)
}

/// Resizes a standard-allocator region to `new_size` bytes.
pub fn std_realloc(ptr: NonNull<u8>, new_size: usize) -> Result<NonNull<u8>, AllocError> {
    StandardAllocator::shared().reallocate(ptr, new_size)
}

/// Allocates `count * elem_size` zeroed bytes from the standard allocator.
pub fn std_calloc(count: usize, elem_size: usize) -> Result<NonNull<u8>, AllocError> {
    StandardAllocator::shared().zero_allocate(count, elem_size)
}

/// Frees a standard-allocator pointer. Null is a no-op.
pub fn std_free(ptr: *mut u8) {
    StandardAllocator::shared().release(ptr);
}
