//! # memscope-core
//!
//! A small memory-resource abstraction layer: a polymorphic allocator
//! interface decoupling call sites from a concrete heap, pointer+length
//! views over raw memory (with distinguishable null and empty sentinels),
//! and a scope-guarded release protocol that frees a dynamically allocated
//! resource exactly once whether the surrounding computation returns
//! normally or aborts through `?`-propagation.
//!
//! The interesting part is the guard protocol in [`guard`]: a resource is
//! bound to its declaring scope under one of two release policies —
//! unconditional-on-exit ([`CleanGuard`]) or release-only-on-error
//! ([`ErrorGuard`]) — and the guard tracks the live resource across
//! reallocations so that release always hits the current pointer.
//!
//! Raw-pointer views make parts of this crate `unsafe` internally; every
//! unsafe block states the invariant it relies on. Views are non-owning:
//! only guards (or explicit `free` calls) assert ownership.

pub mod alloc;
pub mod error;
pub mod guard;
pub mod view;

pub use alloc::{
    Allocator, StandardAllocator, same_allocator, std_calloc, std_free, std_malloc, std_realloc,
};
pub use error::AllocError;
pub use guard::{CleanGuard, ErrorGuard};
pub use view::{AsciiView, AsciizView, Block};
