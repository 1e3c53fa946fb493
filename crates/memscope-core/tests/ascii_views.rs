//! Non-terminated text views: construction, comparison, allocation.

use memscope_core::{AsciiView, Block, StandardAllocator};

fn ascii(bytes: &mut [u8]) -> AsciiView {
    AsciiView::from_mut_slice(bytes)
}

#[test]
fn equality_table() {
    let mut a = *b"ciao";
    let mut b = *b"ciao";
    let mut c = *b"cia";
    let mut d = *b"miao";

    assert!(ascii(&mut a).equal(ascii(&mut b)));
    assert!(!ascii(&mut a).equal(ascii(&mut c)));
    assert!(!ascii(&mut c).equal(ascii(&mut a)));
    assert!(!ascii(&mut a).equal(ascii(&mut d)));
    assert!(!ascii(&mut d).equal(ascii(&mut a)));
}

#[test]
fn length_reduced_view_compares_unequal_without_crashing() {
    let mut buf = *b"ciao";
    let full = AsciiView::from_mut_slice(&mut buf);
    let reduced = AsciiView::of(full.ptr, full.len - 1);
    assert!(!full.equal(reduced));
    assert!(!reduced.equal(full));
}

#[test]
fn empty_views_compare_equal_by_content() {
    assert!(AsciiView::empty().equal(AsciiView::empty()));
}

#[test]
fn allocated_view_round_trip() {
    let allocator = StandardAllocator::shared();
    let view = AsciiView::alloc(allocator, 4).unwrap();
    // SAFETY: the view owns a fresh 4-byte buffer.
    unsafe { std::ptr::copy_nonoverlapping(b"ciao".as_ptr(), view.ptr, 4) };

    let mut expected = *b"ciao";
    assert!(view.equal(ascii(&mut expected)));

    let grown = view.realloc(allocator, 8).unwrap();
    assert_eq!(grown.len, 8);
    let mut prefix = *b"ciao";
    assert!(AsciiView::of(grown.ptr, 4).equal(ascii(&mut prefix)));

    grown.free(allocator);
}

#[test]
fn block_conversions_preserve_content() {
    let mut buf = *b"hello";
    let view = ascii(&mut buf);
    let block = Block::from_ascii(view);
    let round = AsciiView::from_block(block);
    assert!(view.equal(round));
}

#[test]
fn clean_memory_zeroes_only_the_extent() {
    let mut buf = *b"abcdef";
    let head = AsciiView::of(buf.as_mut_ptr(), 3);
    head.clean_memory();
    assert_eq!(&buf, b"\0\0\0def");
}
