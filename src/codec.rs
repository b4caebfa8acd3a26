mod myrvold_ruskey;
pub mod position_pure;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PermError, Result},
    factoradic::Instructions,
};

pub use myrvold_ruskey::MyrvoldRuskey;
pub use position_pure::PositionPure;

/// Conversion between permutations of `[0, n)` and factoradic instruction
/// arrays.
///
/// Both directions validate their whole input before writing to `out`, so a
/// rejected call leaves the output buffer untouched.
pub trait Codec {
    fn unrank_into(&self, instructions: &[usize], out: &mut [usize]) -> Result<()>;

    fn rank_into(&self, perm: &[usize], out: &mut [usize]) -> Result<()>;

    fn unrank(&self, instructions: &[usize]) -> Result<Vec<usize>> {
        let mut out = vec![0; instructions.len()];
        self.unrank_into(instructions, &mut out)?;
        Ok(out)
    }

    fn rank(&self, perm: &[usize]) -> Result<Instructions> {
        let mut out = vec![0; perm.len()];
        self.rank_into(perm, &mut out)?;
        Ok(Instructions::new_unchecked(out))
    }
}

fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PermError::LengthMismatch { expected, actual })
    }
}

fn fill_identity(out: &mut [usize]) {
    for (i, elem) in out.iter_mut().enumerate() {
        *elem = i;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    PositionPure,
    MyrvoldRuskey,
}

impl CodecKind {
    pub const ALL: [CodecKind; 2] = [CodecKind::PositionPure, CodecKind::MyrvoldRuskey];
}

impl Codec for CodecKind {
    fn unrank_into(&self, instructions: &[usize], out: &mut [usize]) -> Result<()> {
        match self {
            CodecKind::PositionPure => PositionPure.unrank_into(instructions, out),
            CodecKind::MyrvoldRuskey => MyrvoldRuskey.unrank_into(instructions, out),
        }
    }

    fn rank_into(&self, perm: &[usize], out: &mut [usize]) -> Result<()> {
        match self {
            CodecKind::PositionPure => PositionPure.rank_into(perm, out),
            CodecKind::MyrvoldRuskey => MyrvoldRuskey.rank_into(perm, out),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecKind::PositionPure => write!(f, "PP"),
            CodecKind::MyrvoldRuskey => write!(f, "MR"),
        }
    }
}
