use std::ops::Deref;

use crate::error::{PermError, Result};

/// Largest `n` whose factorial still fits in a `u128`.
pub const MAX_INDEXABLE_LEN: usize = 34;

pub fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

pub fn validate_digits(digits: &[usize]) -> Result<()> {
    match digits.iter().enumerate().find(|&(i, &d)| d > i) {
        Some((index, &digit)) => Err(PermError::MalformedInstruction { index, digit }),
        None => Ok(()),
    }
}

pub fn validate_permutation(perm: &[usize]) -> Result<()> {
    let mut seen = vec![false; perm.len()];
    for (index, &value) in perm.iter().enumerate() {
        match seen.get_mut(value) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(PermError::NotAPermutation { index, value }),
        }
    }
    Ok(())
}

/// A factoradic digit sequence: `C[i]` lies in `[0, i]`.
///
/// Digit 0 is the most significant one (radix 1) and digit `n - 1` the least
/// significant (radix `n`), which makes the integer index grow in the same
/// order the generator yields permutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Instructions {
    digits: Vec<usize>,
}

impl Instructions {
    pub fn new(digits: Vec<usize>) -> Result<Self> {
        validate_digits(&digits)?;
        Ok(Self { digits })
    }

    pub(crate) fn new_unchecked(digits: Vec<usize>) -> Self {
        debug_assert!(validate_digits(&digits).is_ok());
        Self { digits }
    }

    /// Digits `C[i] = i`, the instructions of the identity permutation
    /// (index `n! - 1`).
    pub fn identity(n: usize) -> Self {
        Self {
            digits: (0..n).collect(),
        }
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<usize> {
        self.digits
    }

    pub fn to_index(&self) -> Result<u128> {
        let n = self.digits.len();
        factorial(n).ok_or(PermError::FactorialOverflow { n })?;
        let index = self
            .digits
            .iter()
            .enumerate()
            .fold(0u128, |acc, (i, &d)| acc * (i as u128 + 1) + d as u128);
        Ok(index)
    }

    pub fn from_index(mut index: u128, n: usize) -> Result<Self> {
        let total = factorial(n).ok_or(PermError::FactorialOverflow { n })?;
        if index >= total {
            return Err(PermError::IndexOutOfRange { index, n });
        }
        let mut digits = vec![0; n];
        for (i, digit) in digits.iter_mut().enumerate().rev() {
            let radix = i as u128 + 1;
            *digit = (index % radix) as usize;
            index /= radix;
        }
        Ok(Self { digits })
    }
}

impl Deref for Instructions {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}

impl AsRef<[usize]> for Instructions {
    fn as_ref(&self) -> &[usize] {
        &self.digits
    }
}

impl TryFrom<Vec<usize>> for Instructions {
    type Error = PermError;

    fn try_from(digits: Vec<usize>) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<Instructions> for Vec<usize> {
    fn from(instructions: Instructions) -> Self {
        instructions.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert!(factorial(MAX_INDEXABLE_LEN).is_some());
        assert!(factorial(MAX_INDEXABLE_LEN + 1).is_none());
    }

    #[test]
    fn test_rejects_malformed_digit() {
        let err = Instructions::new(vec![0, 1, 3, 0]).unwrap_err();
        assert_eq!(err, PermError::MalformedInstruction { index: 2, digit: 3 });
        assert!(Instructions::new(vec![1]).is_err());
    }

    #[test]
    fn test_validate_permutation() {
        assert!(validate_permutation(&[2, 0, 1]).is_ok());
        assert!(validate_permutation(&[]).is_ok());
        assert_eq!(
            validate_permutation(&[0, 0, 1]),
            Err(PermError::NotAPermutation { index: 1, value: 0 })
        );
        assert_eq!(
            validate_permutation(&[0, 3, 1]),
            Err(PermError::NotAPermutation { index: 1, value: 3 })
        );
    }

    #[test]
    fn test_index_round_trip_covers_range() {
        for n in 0..=6 {
            let total = factorial(n).unwrap();
            for index in 0..total {
                let instructions = Instructions::from_index(index, n).unwrap();
                assert!(validate_digits(&instructions).is_ok());
                assert_eq!(instructions.to_index().unwrap(), index);
            }
        }
    }

    #[test]
    fn test_last_digit_is_least_significant() {
        let next = Instructions::from_index(1, 4).unwrap();
        assert_eq!(next.digits(), &[0, 0, 0, 1]);
        let carried = Instructions::from_index(4, 4).unwrap();
        assert_eq!(carried.digits(), &[0, 0, 1, 0]);
    }

    #[test]
    fn test_index_errors() {
        assert_eq!(
            Instructions::from_index(24, 4),
            Err(PermError::IndexOutOfRange { index: 24, n: 4 })
        );
        assert_eq!(
            Instructions::identity(35).to_index(),
            Err(PermError::FactorialOverflow { n: 35 })
        );
        let max = Instructions::from_index(factorial(34).unwrap() - 1, 34).unwrap();
        assert_eq!(max, Instructions::identity(34));
    }
}
