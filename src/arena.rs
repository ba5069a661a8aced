//! The caller-provided scratch allocator the core is written against.
//!
//! [`Arena`] owns a single [`bumpalo::Bump`]. [`Arena::scope`] hands out a
//! [`BrushScope`] borrow whose `Drop` impl resets the bump allocator,
//! bulk-freeing every allocation made during that brush's processing. This
//! is the scoped-acquisition-with-guaranteed-release pattern the pipeline
//! needs at brush boundaries, expressed as an RAII guard rather than a
//! manual mark/release pair.

use bumpalo::Bump;

pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Open a scratch scope for one brush. All bump allocations made through
    /// the returned guard are freed when it drops.
    pub fn scope(&mut self) -> BrushScope<'_> {
        BrushScope { arena: self }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BrushScope<'a> {
    arena: &'a mut Arena,
}

impl<'a> BrushScope<'a> {
    pub fn bump(&self) -> &Bump {
        &self.arena.bump
    }
}

impl<'a> Drop for BrushScope<'a> {
    fn drop(&mut self) {
        self.arena.bump.reset();
    }
}
