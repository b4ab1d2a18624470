//! Permutation (columnar block transposition) cipher

use tracing::debug;

use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};

use super::blocks::{decode_blocks, encode_blocks, join_blocks, split_blocks};

/// Column order for one block, as 1-based source positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationKey(Vec<usize>);

impl PermutationKey {
    /// Derive a key from a keyword.
    ///
    /// Letters are sorted alphabetically; repeated letters keep their order
    /// of appearance. Non-letters are ignored and do not count towards the
    /// block size.
    ///
    /// ```rust
    /// use classic_ciphers::PermutationKey;
    ///
    /// let key = PermutationKey::build("zebra")?;
    /// assert_eq!(key.positions(), &[5, 3, 2, 4, 1]);
    /// # Ok::<(), classic_ciphers::CipherError>(())
    /// ```
    pub fn build(keyword: &str) -> Result<Self> {
        let mut letters: Vec<(char, usize)> = keyword
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .enumerate()
            .map(|(position, c)| (c, position))
            .collect();

        if letters.is_empty() {
            return Err(CipherError::InvalidKey(format!(
                "keyword {keyword:?} contains no letters"
            )));
        }

        letters.sort_by_key(|&(c, _)| c);
        let key = Self(letters.into_iter().map(|(_, position)| position + 1).collect());

        debug!(keyword, key = ?key.0, "built permutation key");
        Ok(key)
    }

    /// Use explicit 1-based positions, which must be a permutation of 1..=k
    pub fn from_positions(positions: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; positions.len()];

        for &p in &positions {
            match p.checked_sub(1).and_then(|i| seen.get_mut(i)) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(CipherError::InvalidKey(format!(
                        "{positions:?} is not a permutation of 1..={}",
                        positions.len()
                    )))
                }
            }
        }

        if positions.is_empty() {
            return Err(CipherError::InvalidKey("empty permutation".to_string()));
        }
        Ok(Self(positions))
    }

    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Block size implied by the key
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Block transposition cipher keyed by a keyword
#[derive(Debug, Clone)]
pub struct PermutationCipher {
    key: PermutationKey,
}

impl PermutationCipher {
    pub fn new(key: PermutationKey) -> Self {
        Self { key }
    }

    pub fn from_keyword(keyword: &str) -> Result<Self> {
        PermutationKey::build(keyword).map(Self::new)
    }

    pub fn key(&self) -> &PermutationKey {
        &self.key
    }
}

impl TextCipher for PermutationCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let blocks = split_blocks(plaintext, self.key.len())?;
        encode_blocks(&blocks, &self.key)
    }

    /// Decrypted text keeps the filler characters of the last block
    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let blocks = split_blocks(ciphertext, self.key.len())?;
        Ok(join_blocks(&decode_blocks(&blocks, &self.key)?))
    }

    fn name(&self) -> &'static str {
        "permutation"
    }
}
