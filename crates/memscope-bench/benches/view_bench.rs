//! View construction, comparison and arithmetic benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memscope_core::{AsciiView, Block, StandardAllocator};

fn bench_equal(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096, 65536];
    let allocator = StandardAllocator::shared();
    let mut group = c.benchmark_group("view_equal");

    for &size in sizes {
        let a = Block::alloc(allocator, size).unwrap();
        let b = Block::alloc(allocator, size).unwrap();
        a.clean_memory();
        b.clean_memory();
        group.bench_with_input(BenchmarkId::new("block", size), &size, |bench, _| {
            bench.iter(|| criterion::black_box(a.equal(b)));
        });
        a.free(allocator);
        b.free(allocator);
    }
    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let allocator = StandardAllocator::shared();
    let arena = Block::alloc(allocator, 64 * 1024).unwrap();
    arena.clean_memory();

    let mut group = c.benchmark_group("view_arithmetic");
    group.bench_function("shift_walk_64k_by_64", |b| {
        b.iter(|| {
            // Both pointer and length advance, so stop while the cursor's
            // extent still fits inside the arena.
            let mut cursor = Block::of(arena.ptr, 64);
            for _ in 0..500 {
                cursor = cursor.shift(1, 64);
            }
            criterion::black_box(cursor.ptr);
        });
    });

    group.bench_function("difference_tail", |b| {
        let prefix = Block::of(arena.ptr, 1024);
        b.iter(|| criterion::black_box(arena.difference(prefix).len));
    });

    group.bench_function("ascii_from_block", |b| {
        b.iter(|| criterion::black_box(AsciiView::from_block(arena).len));
    });
    group.finish();

    arena.free(allocator);
}

criterion_group!(benches, bench_equal, bench_cursor_walk);
criterion_main!(benches);
