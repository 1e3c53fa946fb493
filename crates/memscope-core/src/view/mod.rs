//! Pointer+length memory views.
//!
//! Three cheap, copyable descriptors over memory obtained from an
//! [`Allocator`](crate::Allocator): [`Block`] (raw bytes), [`AsciiView`]
//! (text bytes, no terminator) and [`AsciizView`] (text bytes with a
//! guaranteed terminator at `ptr[len]`). Views do not own the memory they
//! describe; ownership is asserted only by guard records.
//!
//! Every view distinguishes two zero-length states: the *null* view
//! (`ptr` null) and the *empty* view (`ptr` a non-null sentinel). The two
//! are deliberately distinguishable and mutually exclusive.

mod ascii;
mod asciiz;
mod block;

pub use ascii::AsciiView;
pub use asciiz::AsciizView;
pub use block::Block;

/// Backing byte for the canonical empty views.
///
/// The sentinel is a terminator byte so that an empty [`AsciizView`] is
/// terminated by construction. It must never be written through.
static EMPTY_SENTINEL: u8 = 0;

pub(crate) fn empty_sentinel() -> *mut u8 {
    std::ptr::from_ref(&EMPTY_SENTINEL).cast_mut()
}
