use tracing::debug;

use crate::{
    error::{PermError, Result},
    generator::PermutationGenerator,
};

/// What a worker hands back: how many permutations it saw and the sum of
/// the value at the last position of each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationSummary {
    pub count: u128,
    pub checksum: u128,
}

impl EnumerationSummary {
    pub fn collect(gen: &mut PermutationGenerator) -> Self {
        let mut summary = Self::default();
        gen.visit(|perm| {
            summary.count += 1;
            summary.checksum += perm.last().copied().unwrap_or(0) as u128;
        });
        summary
    }

    pub fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.checksum += other.checksum;
    }
}

pub fn enumerate_sequential(n: usize) -> EnumerationSummary {
    EnumerationSummary::collect(&mut PermutationGenerator::new(n))
}

/// Enumerates all `n!` permutations on up to `num_threads` OS threads, one
/// contiguous index range each.
pub fn enumerate_parallel(n: usize, num_threads: usize) -> Result<EnumerationSummary> {
    let gens = PermutationGenerator::split(n, num_threads)?;

    let mut handlers = Vec::new();
    for (worker, mut gen) in gens.into_iter().enumerate() {
        handlers.push(std::thread::spawn(move || {
            debug!(worker, n, "enumeration worker started");
            let summary = EnumerationSummary::collect(&mut gen);
            debug!(worker, count = %summary.count, "enumeration worker finished");
            summary
        }));
    }

    let mut total = EnumerationSummary::default();
    for (worker, handler) in handlers.into_iter().enumerate() {
        let summary = handler
            .join()
            .map_err(|_| PermError::WorkerPanicked { worker })?;
        total.merge(&summary);
    }
    Ok(total)
}
