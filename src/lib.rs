//! Permutation ranking through factoradic instruction arrays.
//!
//! An instruction array `C` of length `n` has `C[i]` in `[0, i]`, so there are
//! exactly `n!` of them and each one names a single permutation. Two codecs
//! turn instructions into permutations and back ([`PositionPure`] and
//! [`MyrvoldRuskey`]), [`PermutationGenerator`] walks all of them in index
//! order, and [`ShuffleCipher`] applies a seeded exchange sequence to bytes.
//!
//! ```
//! use permcodec::{Codec, MyrvoldRuskey, ShuffleCipher};
//!
//! let instructions = MyrvoldRuskey.rank(&[2, 0, 3, 1]).unwrap();
//! assert_eq!(MyrvoldRuskey.unrank(&instructions).unwrap(), vec![2, 0, 3, 1]);
//!
//! let cipher = ShuffleCipher::new(42);
//! let hidden = cipher.encrypt(b"permutation");
//! assert_eq!(cipher.decrypt(&hidden), b"permutation");
//! ```

pub mod cipher;
pub mod codec;
pub mod config;
pub mod error;
pub mod factoradic;
pub mod generator;
pub mod parallel;
pub mod stream;
pub mod validate;

pub use cipher::ShuffleCipher;
pub use codec::{Codec, CodecKind, MyrvoldRuskey, PositionPure};
pub use error::{PermError, Result};
pub use factoradic::Instructions;
pub use generator::PermutationGenerator;
pub use parallel::EnumerationSummary;
pub use stream::IndexStream;
