//! Polymorphic allocator interface.
//!
//! The [`Allocator`] trait decouples call sites from a concrete heap: test
//! doubles and alternative heaps (arenas, pools) substitute for the standard
//! allocator without touching consumers. Allocators are stateless and
//! reentrant; a concrete instance is identity-compared, never content-compared.

mod standard;

pub use standard::{StandardAllocator, std_calloc, std_free, std_malloc, std_realloc};

use std::ptr::NonNull;

use crate::error::AllocError;

/// Capability set of a heap implementation.
///
/// Every fallible operation either returns a valid, non-null resource or
/// propagates [`AllocError`]; callers never need to null-check a success
/// value. [`release`](Allocator::release) is infallible and must not run
/// user code that could itself fail.
pub trait Allocator {
    /// Allocates at least `size` bytes.
    ///
    /// A zero `size` is rounded up to one byte so that success is always a
    /// distinct, releasable, non-null pointer.
    fn allocate(&self, size: usize) -> Result<NonNull<u8>, AllocError>;

    /// Resizes a region previously obtained from this allocator.
    ///
    /// May return a different address; contents are preserved up to
    /// `min(old, new)` bytes. On failure the original pointer is untouched,
    /// still valid, and still owned by the caller.
    fn reallocate(&self, ptr: NonNull<u8>, new_size: usize) -> Result<NonNull<u8>, AllocError>;

    /// Allocates `count * elem_size` bytes, zero-initialized.
    ///
    /// The multiplication is checked; overflow reports
    /// [`AllocError::SizeOverflow`] without touching the heap.
    fn zero_allocate(&self, count: usize, elem_size: usize) -> Result<NonNull<u8>, AllocError>;

    /// Frees a pointer previously returned by this same allocator.
    ///
    /// Releasing null is a no-op. Never fails.
    fn release(&self, ptr: *mut u8);
}

/// Whether `a` and `b` are the same allocator instance.
///
/// Allocators carry no comparable state, so identity is address identity of
/// the instance behind the reference. Distinct zero-sized instances may be
/// placed at the same address and compare as one; an allocator type whose
/// instances must stay distinguishable needs at least one byte of state
/// (like [`StandardAllocator`], which is zero-sized and only ever used
/// through its shared singleton).
pub fn same_allocator(a: &dyn Allocator, b: &dyn Allocator) -> bool {
    std::ptr::addr_eq(a as *const dyn Allocator, b as *const dyn Allocator)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TaggedAllocator {
        _tag: u8,
    }

    impl Allocator for TaggedAllocator {
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
            StandardAllocator::shared().release(ptr);
        }
    }

    #[test]
    fn test_same_allocator_identity() {
        let shared = StandardAllocator::shared();
        assert!(same_allocator(shared, shared));
        assert!(same_allocator(shared, StandardAllocator::shared()));
    }

    #[test]
    fn test_distinct_instances_differ() {
        let a = TaggedAllocator { _tag: 0 };
        let b = TaggedAllocator { _tag: 1 };
        assert!(!same_allocator(&a, &b));
        assert!(!same_allocator(&a, StandardAllocator::shared()));
    }
}
