use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::factoradic::Instructions;

/// Seeded source of factoradic digits: the i-th value lies in `[0, i]`.
///
/// The generator is advanced exactly once per produced value, so the same
/// seed and length always replay the same sequence.
#[derive(Debug, Clone)]
pub struct IndexStream {
    rng: StdRng,
    pos: usize,
    len: usize,
}

impl IndexStream {
    pub fn new(seed: u64, len: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            pos: 0,
            len,
        }
    }

    pub fn collect_instructions(seed: u64, len: usize) -> Instructions {
        Instructions::new_unchecked(Self::new(seed, len).collect())
    }
}

impl Iterator for IndexStream {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let bound = self.pos as u64 + 1;
        let digit = (self.rng.next_u64() % bound) as usize;
        self.pos += 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexStream {}
