use std::ops::Range;

use crate::{
    error::{PermError, Result},
    factoradic::{factorial, Instructions},
};

/// Enumerates permutations of `[0, n)` in factoradic-counter order.
///
/// The counter holds the digits of the first `n - 1` positions and the live
/// permutation holds their inside-out construction. The last digit is never
/// materialized: value `n - 1` is inserted at each position in turn. When it
/// has visited every position the counter is incremented, and only the
/// exchanges belonging to the digits that changed are undone and replayed.
///
/// The k-th permutation yielded is the Myrvold-Ruskey unranking of the
/// instructions with index k.
#[derive(Debug, Clone)]
pub struct PermutationGenerator {
    counter: Vec<usize>,
    perm: Vec<usize>,
    synced: usize,
    inner: usize,
    displaced: Option<(usize, usize)>,
    remaining: Option<u128>,
    finished: bool,
}

impl PermutationGenerator {
    pub fn new(n: usize) -> Self {
        Self {
            counter: vec![0; n.saturating_sub(1)],
            perm: vec![0; n],
            synced: 0,
            inner: 0,
            displaced: None,
            remaining: factorial(n),
            finished: false,
        }
    }

    /// Yields only the permutations whose index lies in `range`.
    pub fn with_range(n: usize, range: Range<u128>) -> Result<Self> {
        let total = factorial(n).ok_or(PermError::FactorialOverflow { n })?;
        if range.start > range.end {
            return Err(PermError::IndexOutOfRange {
                index: range.start,
                n,
            });
        }
        if range.end > total {
            return Err(PermError::IndexOutOfRange {
                index: range.end,
                n,
            });
        }

        let mut gen = Self::new(n);
        gen.remaining = Some(range.end - range.start);
        if range.is_empty() || n == 0 {
            return Ok(gen);
        }

        let mut digits = Instructions::from_index(range.start, n)?.into_digits();
        gen.inner = digits.pop().unwrap_or(0);
        gen.counter = digits;
        Ok(gen)
    }

    /// Cuts `[0, n!)` into at most `parts` contiguous ranges of near-equal size.
    pub fn split(n: usize, parts: usize) -> Result<Vec<Self>> {
        let total = factorial(n).ok_or(PermError::FactorialOverflow { n })?;
        let chunk_size = total.div_ceil(parts.max(1) as u128);
        let mut gens = Vec::new();
        let mut start = 0;
        while start < total {
            let end = (start + chunk_size).min(total);
            gens.push(Self::with_range(n, start..end)?);
            start = end;
        }
        Ok(gens)
    }

    pub fn len_hint(&self) -> Option<u128> {
        if self.finished {
            Some(0)
        } else {
            self.remaining
        }
    }

    /// Runs the enumeration to its end, lending each permutation to `f`
    /// without allocating.
    pub fn visit(&mut self, mut f: impl FnMut(&[usize])) {
        while let Some(perm) = self.step() {
            f(perm);
        }
    }

    fn step(&mut self) -> Option<&[usize]> {
        if let Some((pos, value)) = self.displaced.take() {
            self.perm[pos] = value;
        }
        if self.finished || self.remaining == Some(0) {
            return None;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        let n = self.perm.len();
        if n == 0 {
            self.finished = true;
            return Some(self.perm.as_slice());
        }
        if self.inner == n {
            if !self.advance() {
                self.finished = true;
                return None;
            }
            self.inner = 0;
        }
        self.sync();

        let last = n - 1;
        let pos = self.inner;
        let value = self.perm[pos];
        self.perm[last] = value;
        self.perm[pos] = last;
        self.displaced = Some((pos, value));
        self.inner += 1;
        Some(self.perm.as_slice())
    }

    fn sync(&mut self) {
        for i in self.synced..self.counter.len() {
            let c = self.counter[i];
            self.perm[i] = self.perm[c];
            self.perm[c] = i;
        }
        self.synced = self.counter.len();
    }

    fn advance(&mut self) -> bool {
        let Some(last) = self.counter.len().checked_sub(1) else {
            return false;
        };

        let c = self.counter[last];
        self.perm[c] = self.perm[last];
        self.counter[last] += 1;

        let mut i = last;
        while i > 0 && self.counter[i] > i {
            self.counter[i] = 0;
            self.counter[i - 1] += 1;
            let prev = self.counter[i - 1] - 1;
            self.perm[prev] = self.perm[i - 1];
            i -= 1;
        }
        self.synced = i;
        self.counter[0] == 0
    }
}

impl Iterator for PermutationGenerator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().map(|perm| perm.to_vec())
    }
}
