//! Raw byte-range view and its arithmetic.

use std::ptr::NonNull;

use crate::alloc::Allocator;
use crate::error::AllocError;

use super::{AsciiView, AsciizView, empty_sentinel};

/// A pointer+length view over raw bytes.
///
/// The derived `PartialEq` is structural (same pointer, same length); use
/// [`Block::equal`] for byte-content comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// First byte of the viewed range; null only for the null view.
    pub ptr: *mut u8,
    /// Number of viewed bytes.
    pub len: usize,
}

impl Block {
    /// A view over `len` bytes starting at `ptr`.
    pub fn of(ptr: *mut u8, len: usize) -> Block {
        Block { ptr, len }
    }

    /// The canonical null view.
    pub const fn null() -> Block {
        Block {
            ptr: std::ptr::null_mut(),
            len: 0,
        }
    }

    /// The canonical empty view: zero length over a non-null sentinel.
    pub fn empty() -> Block {
        Block {
            ptr: empty_sentinel(),
            len: 0,
        }
    }

    /// Reinterprets an ASCII view as raw bytes.
    pub fn from_ascii(view: AsciiView) -> Block {
        Block::of(view.ptr, view.len)
    }

    /// Reinterprets a terminated view as raw bytes.
    ///
    /// The terminator byte is part of the underlying allocation, so the
    /// block's length counts it: `len` is one greater than the view's.
    pub fn from_asciiz(view: AsciizView) -> Block {
        Block::of(view.ptr, view.len + 1)
    }

    /// Whether this is the empty view: zero length over a live pointer.
    pub fn is_empty(self) -> bool {
        self.len == 0 && !self.ptr.is_null()
    }

    /// Whether this is the null view.
    pub fn is_null(self) -> bool {
        self.len == 0 && self.ptr.is_null()
    }

    /// Byte-content equality: length first, then content.
    ///
    /// Both views must be non-null; comparing through a null pointer is a
    /// precondition violation and is only debug-checked.
    pub fn equal(self, other: Block) -> bool {
        debug_assert!(!self.ptr.is_null() && !other.ptr.is_null());
        if self.len != other.len {
            return false;
        }
        if self.len == 0 {
            return true;
        }
        // SAFETY: both views are non-null and cover `len` live bytes.
        let (a, b) = unsafe {
            (
                std::slice::from_raw_parts(self.ptr, self.len),
                std::slice::from_raw_parts(other.ptr, other.len),
            )
        };
        a == b
    }

    /// Overwrites every byte in the view's extent with zero.
    pub fn clean_memory(self) {
        if self.len == 0 {
            return;
        }
        // SAFETY: the view covers `len` writable bytes.
        unsafe { std::ptr::write_bytes(self.ptr, 0, self.len) };
    }

    /// Advances both pointer and length by `offset * dim` bytes.
    ///
    /// A view acts as a movable cursor over a fixed allocation: `dim == 1`
    /// treats `offset` as a raw byte count, while `offset == 0` or `dim == 0`
    /// return the input unchanged. The resulting pointer and length must
    /// remain within the original allocation; that is a caller precondition,
    /// not runtime-checked.
    pub fn shift(self, offset: isize, dim: usize) -> Block {
        if offset == 0 || dim == 0 {
            return self;
        }
        let delta = offset.wrapping_mul(dim as isize);
        Block::of(
            self.ptr.wrapping_offset(delta),
            self.len.wrapping_add_signed(delta),
        )
    }

    /// The remainder of `self` after the consumed prefix `prefix`.
    ///
    /// Both views must originate from the same allocation: same pointer, with
    /// `self.len >= prefix.len` (debug-checked).
    pub fn difference(self, prefix: Block) -> Block {
        debug_assert!(std::ptr::eq(self.ptr, prefix.ptr));
        debug_assert!(self.len >= prefix.len);
        Block::of(self.ptr.wrapping_add(prefix.len), self.len - prefix.len)
    }

    /// Allocates a fresh `len`-byte block.
    pub fn alloc<A: Allocator + ?Sized>(allocator: &A, len: usize) -> Result<Block, AllocError> {
        Ok(Block::of(allocator.allocate(len)?.as_ptr(), len))
    }

    /// Resizes this block to `new_len` bytes.
    ///
    /// A null block behaves like a fresh allocation. On failure the original
    /// block is untouched and still live.
    pub fn realloc<A: Allocator + ?Sized>(
        self,
        allocator: &A,
        new_len: usize,
    ) -> Result<Block, AllocError> {
        let ptr = match NonNull::new(self.ptr) {
            Some(ptr) => allocator.reallocate(ptr, new_len)?,
            None => allocator.allocate(new_len)?,
        };
        Ok(Block::of(ptr.as_ptr(), new_len))
    }

    /// Releases this block's memory back to `allocator`.
    pub fn free<A: Allocator + ?Sized>(self, allocator: &A) {
        allocator.release(self.ptr);
    }
}
