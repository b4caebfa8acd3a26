use super::{check_lengths, fill_identity, Codec};
use crate::{
    error::Result,
    factoradic::{validate_digits, validate_permutation},
};

/// Myrvold-Ruskey style codec.
///
/// Unranking is the inside-out construction `D[i] = D[C[i]]; D[C[i]] = i`.
/// Ranking walks back from `n - 1` with a value-to-position map, so it costs
/// O(n) extra memory but recovers the digits of any permutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyrvoldRuskey;

impl Codec for MyrvoldRuskey {
    fn unrank_into(&self, instructions: &[usize], out: &mut [usize]) -> Result<()> {
        check_lengths(instructions.len(), out.len())?;
        validate_digits(instructions)?;
        if out.len() <= 1 {
            fill_identity(out);
            return Ok(());
        }

        for (i, &c) in instructions.iter().enumerate() {
            out[i] = out[c];
            out[c] = i;
        }
        Ok(())
    }

    fn rank_into(&self, perm: &[usize], out: &mut [usize]) -> Result<()> {
        check_lengths(perm.len(), out.len())?;
        validate_permutation(perm)?;
        let n = perm.len();
        if n <= 1 {
            out.fill(0);
            return Ok(());
        }

        let mut work = perm.to_vec();
        let mut positions = vec![0; n];
        for (pos, &value) in perm.iter().enumerate() {
            positions[value] = pos;
        }
        for len in (1..n).rev() {
            let c = positions[len];
            out[len] = c;
            let displaced = work[len];
            work[c] = displaced;
            positions[displaced] = c;
        }
        out[0] = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PermError, factoradic::Instructions};

    #[test]
    fn test_unrank_small() {
        assert_eq!(MyrvoldRuskey.unrank(&[0, 0, 0]).unwrap(), vec![2, 0, 1]);
        assert_eq!(MyrvoldRuskey.unrank(&[0, 1, 2]).unwrap(), vec![0, 1, 2]);
        assert_eq!(MyrvoldRuskey.unrank(&[0, 1, 0]).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_rank_small() {
        assert_eq!(MyrvoldRuskey.rank(&[2, 0, 1]).unwrap().digits(), &[0, 0, 0]);
        assert_eq!(MyrvoldRuskey.rank(&[0, 1, 2]).unwrap().digits(), &[0, 1, 2]);
    }

    #[test]
    fn test_all_instruction_arrays_of_four() {
        let mut seen = fxhash::FxHashSet::default();
        for index in 0..24 {
            let instructions = Instructions::from_index(index, 4).unwrap();
            let perm = MyrvoldRuskey.unrank(&instructions).unwrap();
            assert_eq!(MyrvoldRuskey.rank(&perm).unwrap(), instructions);
            assert!(seen.insert(perm));
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_rank_large() {
        let n = 1_000_000;
        let perm: Vec<usize> = (0..n).rev().collect();
        let instructions = MyrvoldRuskey.rank(&perm).unwrap();
        assert_eq!(MyrvoldRuskey.unrank(&instructions).unwrap(), perm);
    }

    #[test]
    fn test_rank_rejects_out_of_range_value() {
        assert_eq!(
            MyrvoldRuskey.rank(&[0, 5]),
            Err(PermError::NotAPermutation { index: 1, value: 5 })
        );
    }
}
