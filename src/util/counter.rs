use std::cell::Cell;

/// A single-threaded event counter with checked arithmetic.
#[derive(Debug, Default)]
pub struct Counter(Cell<usize>);

impl Counter {
    pub fn increment(&self) {
        let value = self.0.get();
        self.0.set(value.checked_add(1).expect("Counter overflow"));
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_increments() {
        let counter = Counter::default();
        assert_eq!(counter.get(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
    }
}
