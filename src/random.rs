use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// A source of uniformly distributed indices.
pub trait RandomGenerator {
    /// Returns a value in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element of `items`, or `None` if it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Draws from the thread-local generator; not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// A reproducible generator: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl SeededRandomGenerator {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};

    #[test]
    fn same_seed_same_numbers() {
        let mut first = SeededRandomGenerator::new(42);
        let mut second = SeededRandomGenerator::new(42);
        let a: Vec<usize> = (0..20).map(|_| first.next_range(0, 10)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.next_range(0, 10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn values_stay_in_range() {
        let mut rg = SeededRandomGenerator::default();
        for _ in 0..1000 {
            let value = rg.next_range(3, 7);
            assert!((3..7).contains(&value));
        }
        let mut std_rg = StandardRandomGenerator;
        for _ in 0..1000 {
            assert!(std_rg.next_range(0, 2) < 2);
        }
    }

    #[test]
    fn choose_from_vec() {
        let vec = vec![432, 6542, 534, 6, 13];
        let mut rg = SeededRandomGenerator::default();
        for _ in 0..50 {
            assert!(vec.contains(rg.choose(&vec).unwrap()));
        }
        let empty: Vec<i32> = Vec::new();
        assert_eq!(rg.choose(&empty), None);
    }
}
