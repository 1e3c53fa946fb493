//! Guarded allocation: scope-owned release of dynamically allocated memory.
//!
//! A guard record pairs an allocator with the resource it must release and
//! registers that release with the host unwinding mechanism, which in Rust
//! is `Drop` driven by `?`-propagation. Two release policies exist:
//!
//! - [`CleanGuard`] releases on every scope exit, normal or error. Use it
//!   for a temporary resource needed only within the scope.
//! - [`ErrorGuard`] releases only when the scope exits through the error
//!   path. On success the caller retires it with [`ErrorGuard::disarm`],
//!   taking ownership of the memory; typically the next level up registers
//!   its own guard. This is the construct-or-fail idiom.
//!
//! A guard's lifecycle is `Registered -> Fired`, with in-place handle
//! updates while registered: reallocating through the guard keeps it
//! pointing at the *current* live resource, never the original one.
//! Allocation failure in any constructor propagates before a guard exists,
//! so a failed allocation never leaves a registered guard behind. Release
//! fires at most once, is infallible, and never panics.
//!
//! Guards hold the resource as a [`Block`]; a raw-pointer guard is simply a
//! block guard whose length is the requested size. They are neither `Copy`
//! nor `Clone`, must not be shared across threads, and are owned by the
//! lexical scope that declares them.

use crate::alloc::Allocator;
use crate::error::AllocError;
use crate::view::{AsciizView, Block};

fn checked_total(count: usize, elem_size: usize) -> Result<usize, AllocError> {
    count
        .checked_mul(elem_size)
        .ok_or(AllocError::SizeOverflow { count, elem_size })
}

fn asciiz_total(len: usize) -> Result<usize, AllocError> {
    len.checked_add(1).ok_or(AllocError::SizeOverflow {
        count: len,
        elem_size: 1,
    })
}

/// Guard that releases its resource on every scope exit.
pub struct CleanGuard<'a> {
    allocator: &'a dyn Allocator,
    block: Block,
}

impl<'a> CleanGuard<'a> {
    /// Registers a guard over an already-allocated block.
    ///
    /// The block must have been obtained from `allocator` and must not be
    /// guarded elsewhere: the guard assumes sole ownership.
    pub fn from_block(allocator: &'a dyn Allocator, block: Block) -> CleanGuard<'a> {
        CleanGuard { allocator, block }
    }

    /// Allocates `size` bytes and registers the guard in one step.
    pub fn malloc(allocator: &'a dyn Allocator, size: usize) -> Result<CleanGuard<'a>, AllocError> {
        Ok(CleanGuard::from_block(
            allocator,
            Block::alloc(allocator, size)?,
        ))
    }

    /// Allocates `count * elem_size` zeroed bytes and registers the guard.
    pub fn calloc(
        allocator: &'a dyn Allocator,
        count: usize,
        elem_size: usize,
    ) -> Result<CleanGuard<'a>, AllocError> {
        let total = checked_total(count, elem_size)?;
        let ptr = allocator.zero_allocate(count, elem_size)?;
        Ok(CleanGuard::from_block(allocator, Block::of(ptr.as_ptr(), total)))
    }

    /// Allocates a terminated buffer for `len` text bytes and registers the
    /// guard. The guarded block counts the terminator.
    pub fn asciiz_malloc(
        allocator: &'a dyn Allocator,
        len: usize,
    ) -> Result<CleanGuard<'a>, AllocError> {
        let total = asciiz_total(len)?;
        let guard = CleanGuard::malloc(allocator, total)?;
        AsciizView::of(guard.as_ptr(), len).terminate();
        Ok(guard)
    }

    /// The guarded resource's current address.
    pub fn as_ptr(&self) -> *mut u8 {
        self.block.ptr
    }

    /// The guarded resource's current block.
    pub fn block(&self) -> Block {
        self.block
    }

    /// The guarded block viewed as terminated text.
    ///
    /// Meaningful only for guards created through
    /// [`asciiz_malloc`](CleanGuard::asciiz_malloc) or over an
    /// already-terminated block.
    pub fn as_asciiz(&self) -> AsciizView {
        AsciizView::from_block(self.block)
    }

    /// The allocator this guard releases into.
    pub fn allocator(&self) -> &'a dyn Allocator {
        self.allocator
    }

    /// Resizes the guarded resource, updating the handle in place.
    ///
    /// On failure the guard still owns the original, untouched resource.
    pub fn realloc(&mut self, new_len: usize) -> Result<Block, AllocError> {
        let next = self.block.realloc(self.allocator, new_len)?;
        self.block = next;
        Ok(next)
    }

    /// Resizes the guarded terminated buffer to hold `new_len` text bytes,
    /// re-terminating it. The handle is updated in place.
    pub fn realloc_asciiz(&mut self, new_len: usize) -> Result<AsciizView, AllocError> {
        let total = asciiz_total(new_len)?;
        self.realloc(total)?;
        let view = AsciizView::of(self.block.ptr, new_len);
        view.terminate();
        Ok(view)
    }
}

impl Drop for CleanGuard<'_> {
    fn drop(&mut self) {
        self.allocator.release(self.block.ptr);
    }
}

/// Guard that releases its resource only on error-path scope exit.
///
/// On the success path, [`disarm`](ErrorGuard::disarm) retires the guard
/// without releasing: ownership of the memory transfers to the caller.
pub struct ErrorGuard<'a> {
    allocator: &'a dyn Allocator,
    block: Block,
    armed: bool,
}

impl<'a> ErrorGuard<'a> {
    /// Registers a guard over an already-allocated block.
    ///
    /// The block must have been obtained from `allocator` and must not be
    /// guarded elsewhere: the guard assumes sole ownership until disarmed.
    pub fn from_block(allocator: &'a dyn Allocator, block: Block) -> ErrorGuard<'a> {
        ErrorGuard {
            allocator,
            block,
            armed: true,
        }
    }

    /// Allocates `size` bytes and registers the guard in one step.
    pub fn malloc(allocator: &'a dyn Allocator, size: usize) -> Result<ErrorGuard<'a>, AllocError> {
        Ok(ErrorGuard::from_block(
            allocator,
            Block::alloc(allocator, size)?,
        ))
    }

    /// Allocates `count * elem_size` zeroed bytes and registers the guard.
    pub fn calloc(
        allocator: &'a dyn Allocator,
        count: usize,
        elem_size: usize,
    ) -> Result<ErrorGuard<'a>, AllocError> {
        let total = checked_total(count, elem_size)?;
        let ptr = allocator.zero_allocate(count, elem_size)?;
        Ok(ErrorGuard::from_block(allocator, Block::of(ptr.as_ptr(), total)))
    }

    /// Allocates a terminated buffer for `len` text bytes and registers the
    /// guard. The guarded block counts the terminator.
    pub fn asciiz_malloc(
        allocator: &'a dyn Allocator,
        len: usize,
    ) -> Result<ErrorGuard<'a>, AllocError> {
        let total = asciiz_total(len)?;
        let guard = ErrorGuard::malloc(allocator, total)?;
        AsciizView::of(guard.as_ptr(), len).terminate();
        Ok(guard)
    }

    /// The guarded resource's current address.
    pub fn as_ptr(&self) -> *mut u8 {
        self.block.ptr
    }

    /// The guarded resource's current block.
    pub fn block(&self) -> Block {
        self.block
    }

    /// The guarded block viewed as terminated text.
    pub fn as_asciiz(&self) -> AsciizView {
        AsciizView::from_block(self.block)
    }

    /// The allocator this guard releases into.
    pub fn allocator(&self) -> &'a dyn Allocator {
        self.allocator
    }

    /// Resizes the guarded resource, updating the handle in place.
    ///
    /// On failure the guard still owns the original, untouched resource.
    pub fn realloc(&mut self, new_len: usize) -> Result<Block, AllocError> {
        let next = self.block.realloc(self.allocator, new_len)?;
        self.block = next;
        Ok(next)
    }

    /// Resizes the guarded terminated buffer to hold `new_len` text bytes,
    /// re-terminating it. The handle is updated in place.
    pub fn realloc_asciiz(&mut self, new_len: usize) -> Result<AsciizView, AllocError> {
        let total = asciiz_total(new_len)?;
        self.realloc(total)?;
        let view = AsciizView::of(self.block.ptr, new_len);
        view.terminate();
        Ok(view)
    }

    /// Retires the guard without releasing: the success path.
    ///
    /// Ownership of the returned block transfers to the caller, who is now
    /// responsible for releasing it (or registering a new guard for it in an
    /// enclosing scope).
    pub fn disarm(mut self) -> Block {
        self.armed = false;
        self.block
    }
}

impl Drop for ErrorGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.allocator.release(self.block.ptr);
        }
    }
}
