//! Utility functions shared by the ciphers

use std::ops::RangeInclusive;

use crate::error::{CipherError, Result};

/// Filler characters appended to a short final block, alternating by position
pub const PAD_CHARS: [char; 2] = ['o', 'x'];

/// Pad a block with alternating filler characters up to `block_size` characters
pub fn add_padding(block: &mut String, block_size: usize) {
    let missing = block_size.saturating_sub(block.chars().count());

    for i in 0..missing {
        block.push(PAD_CHARS[i % PAD_CHARS.len()]);
    }
}

/// Remove every whitespace character from the text
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a decimal integer, optionally checking it against an inclusive range
pub fn parse_int_in_range(input: &str, range: Option<RangeInclusive<i64>>) -> Result<i64> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| CipherError::InvalidShift(input.to_string()))?;

    match range {
        Some(range) if !range.contains(&value) => Err(CipherError::InvalidShift(input.to_string())),
        _ => Ok(value),
    }
}
