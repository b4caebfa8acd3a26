use fxhash::FxHashSet;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use crate::{
    codec::{position_pure, Codec, CodecKind, MyrvoldRuskey},
    error::{PermError, Result},
    factoradic::{factorial, validate_digits, validate_permutation, Instructions},
    generator::PermutationGenerator,
};

fn fail(msg: String) -> PermError {
    PermError::Verification(msg)
}

fn sample_permutations(n: usize, seed: u64) -> Vec<(&'static str, Vec<usize>)> {
    let sorted = (0..n).collect_vec();
    let reversed = (0..n).rev().collect_vec();
    let mut random = sorted.clone();
    random.shuffle(&mut StdRng::seed_from_u64(seed));
    vec![("sorted", sorted), ("reversed", reversed), ("random", random)]
}

/// Checks `unrank(rank(D)) == D` for each codec on sorted, reversed and
/// shuffled permutations of size `n`, and the keyed encode/decode pair.
pub fn verify_round_trips(n: usize, seed: u64, codecs: &[CodecKind]) -> Result<()> {
    for (name, perm) in sample_permutations(n, seed) {
        for codec in codecs {
            let instructions = codec.rank(&perm)?;
            validate_digits(&instructions)?;
            let restored = codec.unrank(&instructions)?;
            if restored != perm {
                return Err(fail(format!("{codec} round trip of {name} n={n}")));
            }
            debug!(%codec, name, n, "round trip ok");
        }

        let mut keyed = perm.clone();
        position_pure::encode(seed, &mut keyed);
        validate_permutation(&keyed)?;
        position_pure::decode(seed, &mut keyed);
        if keyed != perm {
            return Err(fail(format!("keyed round trip of {name} n={n}")));
        }
    }
    Ok(())
}

/// Checks that the generator yields every permutation of size `n` exactly
/// once and in unranking order.
pub fn verify_enumeration(n: usize) -> Result<()> {
    let total = factorial(n).ok_or(PermError::FactorialOverflow { n })?;
    let mut seen = FxHashSet::default();
    for (index, perm) in PermutationGenerator::new(n).enumerate() {
        let instructions = Instructions::from_index(index as u128, n)?;
        if perm != MyrvoldRuskey.unrank(&instructions)? {
            return Err(fail(format!("generator order at index {index} n={n}")));
        }
        if !seen.insert(perm) {
            return Err(fail(format!("duplicate permutation at index {index} n={n}")));
        }
    }
    if seen.len() as u128 != total {
        return Err(fail(format!("{} of {total} permutations for n={n}", seen.len())));
    }

    let expected: FxHashSet<Vec<usize>> = (0..n).permutations(n).collect();
    if seen != expected {
        return Err(fail(format!("permutation set differs for n={n}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_pass() {
        for n in [0, 1, 2, 3, 10, 1000] {
            verify_round_trips(n, 42, &CodecKind::ALL).unwrap();
        }
    }

    #[test]
    fn test_enumeration_passes() {
        for n in 0..=7 {
            verify_enumeration(n).unwrap();
        }
    }

    #[test]
    fn test_enumeration_too_large() {
        assert_eq!(
            verify_enumeration(40),
            Err(PermError::FactorialOverflow { n: 40 })
        );
    }
}
