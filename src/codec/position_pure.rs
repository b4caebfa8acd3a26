//! Position Pure: permutations built by forward exchanges `D[i] <-> D[C[i]]`.
//!
//! The keyed pair [`encode`] / [`decode`] drives the exchanges straight from
//! an [`IndexStream`]. Encoding needs no memory beyond the data itself.
//! Decoding must replay the exchanges backwards, so the whole instruction
//! array is regenerated first and held for the duration of the call.

use super::{check_lengths, fill_identity, Codec};
use crate::{
    error::Result,
    factoradic::{validate_digits, validate_permutation, Instructions},
    stream::IndexStream,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionPure;

fn swap_forward<T>(digits: &[usize], data: &mut [T]) {
    for (i, &a) in digits.iter().enumerate() {
        data.swap(i, a);
    }
}

fn swap_backward<T>(digits: &[usize], data: &mut [T]) {
    for (i, &a) in digits.iter().enumerate().rev() {
        data.swap(i, a);
    }
}

/// Shuffles `data` in place with the exchange sequence drawn from `seed`.
pub fn encode<T>(seed: u64, data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    for (i, a) in IndexStream::new(seed, data.len()).enumerate() {
        data.swap(i, a);
    }
}

/// Exact inverse of [`encode`] for the same seed.
pub fn decode<T>(seed: u64, data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let instructions = IndexStream::collect_instructions(seed, data.len());
    swap_backward(&instructions, data);
}

pub fn apply_instructions<T>(instructions: &Instructions, data: &mut [T]) -> Result<()> {
    check_lengths(instructions.len(), data.len())?;
    swap_forward(instructions, data);
    Ok(())
}

pub fn revert_instructions<T>(instructions: &Instructions, data: &mut [T]) -> Result<()> {
    check_lengths(instructions.len(), data.len())?;
    swap_backward(instructions, data);
    Ok(())
}

impl Codec for PositionPure {
    fn unrank_into(&self, instructions: &[usize], out: &mut [usize]) -> Result<()> {
        check_lengths(instructions.len(), out.len())?;
        validate_digits(instructions)?;
        fill_identity(out);
        if out.len() > 1 {
            swap_forward(instructions, out);
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

        // Before step i of the forward scan position i still held value i, so
        // the step's digit is wherever value i sits once later steps are undone.
        let mut work = perm.to_vec();
        let mut where_is = vec![0; n];
        for (pos, &value) in work.iter().enumerate() {
            where_is[value] = pos;
        }
        for i in (0..n).rev() {
            let a = where_is[i];
            out[i] = a;
            work.swap(i, a);
            where_is[work[a]] = a;
            where_is[i] = i;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PermError;

    #[test]
    fn test_keyed_round_trip() {
        let message = b"Official implementation of the Position Pure linear-time algorithm.";
        let mut data = message.to_vec();
        encode(20260204, &mut data);
        assert_ne!(&data[..], &message[..]);
        let mut sorted = data.clone();
        sorted.sort();
        let mut expected = message.to_vec();
        expected.sort();
        assert_eq!(sorted, expected);

        decode(20260204, &mut data);
        assert_eq!(&data[..], &message[..]);
    }

    #[test]
    fn test_keyed_encode_matches_unrank_of_stream() {
        let n = 64;
        let mut data: Vec<usize> = (0..n).collect();
        encode(5, &mut data);
        let instructions = IndexStream::collect_instructions(5, n);
        assert_eq!(data, PositionPure.unrank(&instructions).unwrap());
    }

    #[test]
    fn test_wrong_seed_does_not_restore() {
        let original: Vec<u32> = (0..200).collect();
        let mut data = original.clone();
        encode(1, &mut data);
        decode(2, &mut data);
        assert_ne!(data, original);
    }

    #[test]
    fn test_unrank_small() {
        assert_eq!(PositionPure.unrank(&[0, 1, 0]).unwrap(), vec![2, 1, 0]);
        assert_eq!(PositionPure.unrank(&[0, 0, 0]).unwrap(), vec![2, 0, 1]);
        assert_eq!(PositionPure.unrank(&[0, 1, 2]).unwrap(), vec![0, 1, 2]);
        assert_eq!(PositionPure.rank(&[2, 1, 0]).unwrap().digits(), &[0, 1, 0]);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(PositionPure.unrank(&[]).unwrap(), Vec::<usize>::new());
        assert_eq!(PositionPure.unrank(&[0]).unwrap(), vec![0]);
        assert_eq!(PositionPure.rank(&[0]).unwrap().digits(), &[0]);

        let mut one = [b'x'];
        encode(9, &mut one);
        assert_eq!(one, [b'x']);
        let mut empty: [u8; 0] = [];
        decode(9, &mut empty);
    }

    #[test]
    fn test_apply_and_revert() {
        let instructions = Instructions::new(vec![0, 0, 2, 1]).unwrap();
        let mut data = ['a', 'b', 'c', 'd'];
        apply_instructions(&instructions, &mut data).unwrap();
        assert_eq!(data, ['b', 'd', 'c', 'a']);
        revert_instructions(&instructions, &mut data).unwrap();
        assert_eq!(data, ['a', 'b', 'c', 'd']);

        let mut short = ['a', 'b'];
        assert_eq!(
            apply_instructions(&instructions, &mut short),
            Err(PermError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rank_rejects_duplicates() {
        assert_eq!(
            PositionPure.rank(&[1, 1, 0]),
            Err(PermError::NotAPermutation { index: 1, value: 1 })
        );
    }
}
