//! Rotation (Caesar) cipher and brute-force shift search

use tracing::debug;

use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::cipher::TextCipher;
use crate::error::Result;
use crate::utils;

use super::substitution::english_score;

/// Smallest shift accepted from user input
pub const MIN_SHIFT: i64 = 1;
/// Largest shift accepted from user input
pub const MAX_SHIFT: i64 = 25;

/// One brute-force decryption attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDecryption {
    pub shift: u8,
    pub text: String,
}

/// Rotation cipher with a fixed shift
#[derive(Debug, Clone, Copy)]
pub struct RotationCipher {
    shift: i64,
}

impl RotationCipher {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    /// Build the cipher from user input, rejecting shifts outside 1..=25
    pub fn from_input(input: &str) -> Result<Self> {
        parse_shift(input).map(Self::new)
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }
}

impl TextCipher for RotationCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(encode(plaintext, self.shift))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(decode(ciphertext, self.shift))
    }

    fn name(&self) -> &'static str {
        "rotation"
    }
}

/// Parse a shift entered by a user, accepting only integers in 1..=25
pub fn parse_shift(input: &str) -> Result<i64> {
    utils::parse_int_in_range(input, Some(MIN_SHIFT..=MAX_SHIFT))
}

/// Reduce any integer shift into 0..26
fn normalize(shift: i64) -> usize {
    shift.rem_euclid(ALPHABET_LEN as i64) as usize
}

fn rotate(text: &str, offset: usize) -> String {
    text.chars()
        .map(|c| match index_of(c) {
            Some(i) => letter_at(i + offset),
            None => c,
        })
        .collect()
}

/// Encrypt text by rotating each letter forward by `shift` positions.
///
/// Letters come out lowercase; every other character passes through.
pub fn encode(plaintext: &str, shift: i64) -> String {
    rotate(plaintext, normalize(shift))
}

/// Decrypt text by rotating each letter back by `shift` positions.
pub fn decode(ciphertext: &str, shift: i64) -> String {
    rotate(ciphertext, ALPHABET_LEN - normalize(shift))
}

/// Lazy sequence of decryptions under every shift from 1 to 25.
///
/// The iterator is cheap to clone, so a caller can walk it more than once.
#[derive(Debug, Clone)]
pub struct BruteForce<'a> {
    ciphertext: &'a str,
    next_shift: u8,
}

impl Iterator for BruteForce<'_> {
    type Item = CandidateDecryption;

    fn next(&mut self) -> Option<Self::Item> {
        if i64::from(self.next_shift) > MAX_SHIFT {
            return None;
        }
        let shift = self.next_shift;
        self.next_shift += 1;

        let mut text = decode(self.ciphertext, i64::from(shift));
        text.retain(|c| c != '\n');
        Some(CandidateDecryption { shift, text })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_SHIFT + 1 - i64::from(self.next_shift)).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BruteForce<'_> {}

/// Enumerate all non-identity shifts of a ciphertext in ascending order
pub fn brute_force(ciphertext: &str) -> BruteForce<'_> {
    BruteForce {
        ciphertext,
        next_shift: MIN_SHIFT as u8,
    }
}

/// Brute-force candidates ordered by English match score, best first.
///
/// Candidates with equal scores stay in ascending shift order.
pub fn ranked_candidates(ciphertext: &str) -> Vec<(CandidateDecryption, u8)> {
    let mut scored: Vec<(CandidateDecryption, u8)> = brute_force(ciphertext)
        .map(|candidate| {
            let score = english_score(&candidate.text);
            (candidate, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    if let Some((best, score)) = scored.first() {
        debug!(shift = best.shift, score, "best rotation candidate");
    }
    scored
}
