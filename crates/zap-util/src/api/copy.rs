/// Overwrite a value's state with another value of the same type.
///
/// Blanket-implemented for every `Clone` type via `clone_from`, which lets
/// types reuse their existing allocations. Types that must keep some of their
/// own fields (handles, ids) implement `Clone::clone_from` by hand to copy only
/// the rest.
pub trait CopyFrom {
    fn copy_from(&mut self, other: &Self);
}

impl<T: Clone> CopyFrom for T {
    #[inline]
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

/// Make a fresh value and copy `template` into it, keeping whatever `make`
/// set up that `template`'s `clone_from` leaves alone.
pub fn spawn_copy<T: CopyFrom>(make: impl FnOnce() -> T, template: &T) -> T {
    let mut value = make();
    value.copy_from(template);
    value
}
