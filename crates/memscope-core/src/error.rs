//! Error taxonomy for allocation entry points.
//!
//! Allocation failure is the only error this crate originates. It is always
//! reported through `Result`, never through a null return or a status code:
//! a caller that gets `Ok` back holds a valid, non-null resource.

use thiserror::Error;

/// Failure raised by an [`Allocator`](crate::Allocator) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The backing heap could not satisfy a request for `size` bytes.
    #[error("backing heap exhausted allocating {size} bytes")]
    Exhausted {
        /// Number of bytes requested from the heap.
        size: usize,
    },
    /// `count * elem_size` overflows `usize` in a zeroed allocation.
    #[error("allocation size overflow: {count} elements of {elem_size} bytes")]
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of each element in bytes.
        elem_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display() {
        let e = AllocError::Exhausted { size: 4096 };
        assert_eq!(e.to_string(), "backing heap exhausted allocating 4096 bytes");
    }

    #[test]
    fn test_size_overflow_display() {
        let e = AllocError::SizeOverflow {
            count: usize::MAX,
            elem_size: 2,
        };
        assert!(e.to_string().starts_with("allocation size overflow"));
    }
}
