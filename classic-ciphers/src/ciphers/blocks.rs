//! Block splitting and per-block column permutation

use std::fmt;

use crate::error::{CipherError, Result};
use crate::utils;

use super::permutation::PermutationKey;

/// Default width of wrapped block output
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// A run of exactly `block_size` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block(Vec<char>);

impl Block {
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

fn check_block(block: &Block, key: &PermutationKey) -> Result<()> {
    if block.len() != key.len() {
        return Err(CipherError::InvalidBlockSize {
            expected: key.len(),
            actual: block.len(),
        });
    }
    Ok(())
}

/// Split text into blocks of `block_size` characters.
///
/// Whitespace is removed first. A short final block is filled with
/// alternating `o` and `x` characters.
pub fn split_blocks(text: &str, block_size: usize) -> Result<Vec<Block>> {
    if block_size == 0 {
        return Err(CipherError::InvalidBlockSize {
            expected: 1,
            actual: 0,
        });
    }

    let stripped: Vec<char> = utils::strip_whitespace(text).chars().collect();
    let blocks = stripped
        .chunks(block_size)
        .map(|chunk| {
            let mut block: String = chunk.iter().collect();
            utils::add_padding(&mut block, block_size);
            Block(block.chars().collect())
        })
        .collect();

    Ok(blocks)
}

/// Encrypt blocks: output position `i` takes the character at `key[i] - 1`
pub fn encode_blocks(blocks: &[Block], key: &PermutationKey) -> Result<String> {
    let mut ciphertext = String::with_capacity(blocks.len() * key.len());

    for block in blocks {
        check_block(block, key)?;
        ciphertext.extend(key.positions().iter().map(|&p| block.0[p - 1]));
    }

    Ok(ciphertext)
}

/// Decrypt blocks: input character `i` goes back to position `key[i] - 1`
pub fn decode_blocks(blocks: &[Block], key: &PermutationKey) -> Result<Vec<Block>> {
    blocks
        .iter()
        .map(|block| {
            check_block(block, key)?;
            let mut decoded = vec!['\0'; key.len()];
            for (&c, &p) in block.0.iter().zip(key.positions()) {
                decoded[p - 1] = c;
            }
            Ok(Block(decoded))
        })
        .collect()
}

/// Concatenate blocks back into one string
pub fn join_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(ToString::to_string).collect()
}

/// Lay a ciphertext out as space separated blocks, `line_width / block_size`
/// blocks per line (at least one)
pub fn wrap_blocks(text: &str, block_size: usize, line_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let per_line = (line_width / block_size.max(1)).max(1);

    chars
        .chunks(block_size.max(1))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .chunks(per_line)
        .map(|line| line.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
