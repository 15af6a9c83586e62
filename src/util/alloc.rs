use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type, for checking that no allocation is ever touched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ZeroSizedType;

/// An element which increments a shared counter every time one of its clones is dropped.
#[derive(Debug, Clone)]
pub(crate) struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub(crate) fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops so far and resets the counter.
    pub(crate) fn take(&self) -> usize {
        self.0.take()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
