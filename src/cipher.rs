//! Keyed shuffle over byte buffers.
//!
//! This only moves bytes around: byte frequencies survive, there is no
//! integrity check, and a single known plaintext reveals the permutation for
//! that length. It is a demonstration of the Position Pure exchange
//! sequence, not a cipher to protect anything with.

use crate::codec::position_pure;

pub fn encode(seed: u64, buffer: &mut [u8]) {
    position_pure::encode(seed, buffer);
}

pub fn decode(seed: u64, buffer: &mut [u8]) {
    position_pure::decode(seed, buffer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleCipher {
    seed: u64,
}

impl ShuffleCipher {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn encrypt_in_place(&self, buffer: &mut [u8]) {
        encode(self.seed, buffer);
    }

    pub fn decrypt_in_place(&self, buffer: &mut [u8]) {
        decode(self.seed, buffer);
    }

    pub fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        let mut buffer = plain.to_vec();
        self.encrypt_in_place(&mut buffer);
        buffer
    }

    pub fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        let mut buffer = cipher.to_vec();
        self.decrypt_in_place(&mut buffer);
        buffer
    }
}
