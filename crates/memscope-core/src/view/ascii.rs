//! Non-terminated text view.

use crate::alloc::Allocator;
use crate::error::AllocError;

use super::{AsciizView, Block, empty_sentinel};

/// A pointer+length view over text bytes with no terminator guarantee.
///
/// Shares its representation with [`Block`]; the two interconvert freely.
/// The derived `PartialEq` is structural; use [`AsciiView::equal`] for
/// content comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiView {
    /// First byte of the viewed text; null only for the null view.
    pub ptr: *mut u8,
    /// Number of viewed bytes.
    pub len: usize,
}

impl AsciiView {
    /// A view over `len` text bytes starting at `ptr`.
    pub fn of(ptr: *mut u8, len: usize) -> AsciiView {
        AsciiView { ptr, len }
    }

    /// The canonical null view.
    pub const fn null() -> AsciiView {
        AsciiView {
            ptr: std::ptr::null_mut(),
            len: 0,
        }
    }

    /// The canonical empty view.
    pub fn empty() -> AsciiView {
        AsciiView {
            ptr: empty_sentinel(),
            len: 0,
        }
    }

    /// A view over a caller-owned buffer.
    pub fn from_mut_slice(bytes: &mut [u8]) -> AsciiView {
        AsciiView::of(bytes.as_mut_ptr(), bytes.len())
    }

    /// Reinterprets raw bytes as text.
    pub fn from_block(block: Block) -> AsciiView {
        AsciiView::of(block.ptr, block.len)
    }

    /// Drops the terminator guarantee of a terminated view.
    ///
    /// The terminator byte still follows the text in memory; it is simply no
    /// longer counted on.
    pub fn from_asciiz(view: AsciizView) -> AsciiView {
        AsciiView::of(view.ptr, view.len)
    }

    /// Whether this is the empty view: zero length over a live pointer.
    pub fn is_empty(self) -> bool {
        self.len == 0 && !self.ptr.is_null()
    }

    /// Whether this is the null view.
    pub fn is_null(self) -> bool {
        self.len == 0 && self.ptr.is_null()
    }

    /// Byte-content equality; both views must be non-null.
    pub fn equal(self, other: AsciiView) -> bool {
        Block::from_ascii(self).equal(Block::from_ascii(other))
    }

    /// Overwrites every byte in the view's extent with zero.
    pub fn clean_memory(self) {
        Block::from_ascii(self).clean_memory();
    }

    /// Allocates a fresh `len`-byte text buffer.
    pub fn alloc<A: Allocator + ?Sized>(
        allocator: &A,
        len: usize,
    ) -> Result<AsciiView, AllocError> {
        Ok(AsciiView::of(allocator.allocate(len)?.as_ptr(), len))
    }

    /// Resizes this view's buffer to `new_len` bytes.
    pub fn realloc<A: Allocator + ?Sized>(
        self,
        allocator: &A,
        new_len: usize,
    ) -> Result<AsciiView, AllocError> {
        let block = Block::from_ascii(self).realloc(allocator, new_len)?;
        Ok(AsciiView::from_block(block))
    }

    /// Releases this view's buffer back to `allocator`.
    pub fn free<A: Allocator + ?Sized>(self, allocator: &A) {
        allocator.release(self.ptr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_empty_are_distinct() {
        assert!(AsciiView::null().is_null());
        assert!(!AsciiView::null().is_empty());
        assert!(AsciiView::empty().is_empty());
        assert!(!AsciiView::empty().is_null());
    }

    #[test]
    fn test_equal_same_content() {
        let mut a = *b"ciao";
        let mut b = *b"ciao";
        assert!(AsciiView::from_mut_slice(&mut a).equal(AsciiView::from_mut_slice(&mut b)));
    }

    #[test]
    fn test_equal_shorter_and_different_content() {
        let mut ciao = *b"ciao";
        let mut cia = *b"cia";
        let mut hiya = *b"hiya";
        let ciao = AsciiView::from_mut_slice(&mut ciao);
        assert!(!ciao.equal(AsciiView::from_mut_slice(&mut cia)));
        assert!(!AsciiView::from_mut_slice(&mut cia).equal(ciao));
        assert!(!ciao.equal(AsciiView::from_mut_slice(&mut hiya)));
    }

    #[test]
    fn test_block_round_trip_preserves_shape() {
        let mut buf = *b"hello";
        let view = AsciiView::from_mut_slice(&mut buf);
        let round = AsciiView::from_block(Block::from_ascii(view));
        assert_eq!(round, view);
    }

    #[test]
    fn test_clean_memory() {
        let mut buf = *b"hello";
        AsciiView::from_mut_slice(&mut buf).clean_memory();
        assert_eq!(&buf, &[0u8; 5]);
    }
}
