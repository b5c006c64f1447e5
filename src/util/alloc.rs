use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Shared tally of how many [`Counted`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Creates a value that bumps this counter when dropped.
    pub fn token(&self, id: usize) -> Counted {
        Counted {
            id,
            counter: self.clone(),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Counted {
    pub id: usize,
    counter: DropCounter,
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
