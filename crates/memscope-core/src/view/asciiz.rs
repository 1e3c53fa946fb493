//! Terminated text view.

use crate::alloc::Allocator;
use crate::error::AllocError;

use super::{AsciiView, Block, empty_sentinel};

/// A pointer+length view over text bytes with a guaranteed terminator.
///
/// Invariant: when the view is non-null, the byte at `ptr[len]` is the
/// terminator (zero). The terminator sits immediately past the counted
/// length, so the underlying allocation is always `len + 1` bytes.
///
/// Writing the terminator is an explicit operation
/// ([`AsciizView::terminate`]), not automatic: constructors either derive a
/// view over an already-terminated buffer or terminate it immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciizView {
    /// First byte of the viewed text; null only for the null view.
    pub ptr: *mut u8,
    /// Number of text bytes, excluding the terminator.
    pub len: usize,
}

impl AsciizView {
    /// A view over `len` text bytes starting at `ptr`.
    ///
    /// Precondition: `ptr[len]` is the terminator, or the caller terminates
    /// the view before relying on the invariant.
    pub fn of(ptr: *mut u8, len: usize) -> AsciizView {
        AsciizView { ptr, len }
    }

    /// The canonical null view.
    pub const fn null() -> AsciizView {
        AsciizView {
            ptr: std::ptr::null_mut(),
            len: 0,
        }
    }

    /// The canonical empty view. Terminated by construction: the sentinel
    /// byte it points at is zero.
    pub fn empty() -> AsciizView {
        AsciizView {
            ptr: empty_sentinel(),
            len: 0,
        }
    }

    /// A view over a caller-owned buffer whose final byte is the terminator.
    ///
    /// The counted length excludes that byte, so the buffer must hold at
    /// least one byte.
    pub fn from_mut_slice(bytes: &mut [u8]) -> AsciizView {
        debug_assert!(!bytes.is_empty());
        debug_assert_eq!(bytes[bytes.len() - 1], 0);
        AsciizView::of(bytes.as_mut_ptr(), bytes.len() - 1)
    }

    /// A view over a terminated block.
    ///
    /// Precondition: the block's final counted byte is the terminator, so the
    /// view's length is one less than the block's. This is asserted, not
    /// verified, beyond a debug check.
    pub fn from_block(block: Block) -> AsciizView {
        debug_assert!(block.len >= 1);
        let view = AsciizView::of(block.ptr, block.len - 1);
        debug_assert!(view.is_terminated());
        view
    }

    /// Whether this is the empty view: zero length, live pointer, terminated.
    pub fn is_empty(self) -> bool {
        self.len == 0 && !self.ptr.is_null() && self.is_terminated()
    }

    /// Whether this is the null view.
    pub fn is_null(self) -> bool {
        self.len == 0 && self.ptr.is_null()
    }

    /// Whether the byte at `ptr[len]` is the terminator.
    pub fn is_terminated(self) -> bool {
        if self.ptr.is_null() {
            return false;
        }
        // SAFETY: a non-null view covers `len + 1` live bytes.
        unsafe { *self.ptr.add(self.len) == 0 }
    }

    /// Byte-content equality over the counted text; both views must be
    /// non-null. Terminators are not compared.
    pub fn equal(self, other: AsciizView) -> bool {
        AsciiView::from_asciiz(self).equal(AsciiView::from_asciiz(other))
    }

    /// Writes the terminator byte at `ptr[len]`.
    ///
    /// The view must refer to writable memory of at least `len + 1` bytes.
    pub fn terminate(self) {
        debug_assert!(!self.ptr.is_null());
        // SAFETY: a non-null view covers `len + 1` writable bytes.
        unsafe { *self.ptr.add(self.len) = 0 };
    }

    /// Overwrites the text *and* the terminator byte with zero, preserving
    /// the terminator invariant.
    pub fn clean_memory(self) {
        debug_assert!(!self.ptr.is_null());
        // SAFETY: the view covers `len + 1` writable bytes.
        unsafe { std::ptr::write_bytes(self.ptr, 0, self.len + 1) };
    }

    /// Allocates a buffer for `len` text bytes plus the terminator, and
    /// terminates it.
    pub fn alloc<A: Allocator + ?Sized>(
        allocator: &A,
        len: usize,
    ) -> Result<AsciizView, AllocError> {
        let total = len
            .checked_add(1)
            .ok_or(AllocError::SizeOverflow { count: len, elem_size: 1 })?;
        let view = AsciizView::of(allocator.allocate(total)?.as_ptr(), len);
        view.terminate();
        Ok(view)
    }

    /// Resizes this view's buffer for `new_len` text bytes plus the
    /// terminator, and re-terminates it.
    pub fn realloc<A: Allocator + ?Sized>(
        self,
        allocator: &A,
        new_len: usize,
    ) -> Result<AsciizView, AllocError> {
        let total = new_len
            .checked_add(1)
            .ok_or(AllocError::SizeOverflow { count: new_len, elem_size: 1 })?;
        let block = Block::of(self.ptr, self.len + 1).realloc(allocator, total)?;
        let view = AsciizView::of(block.ptr, new_len);
        view.terminate();
        Ok(view)
    }

    /// Releases this view's buffer back to `allocator`.
    pub fn free<A: Allocator + ?Sized>(self, allocator: &A) {
        allocator.release(self.ptr);
    }
}
