//! The working alphabet and the English reference letter frequencies.

/// Number of letters in the working alphabet
pub const ALPHABET_LEN: usize = 26;

/// The 26 lowercase Latin letters, index = position
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// English letter frequencies in percent, in definition order
pub const ENGLISH_FREQUENCIES: [(char, f64); ALPHABET_LEN] = [
    ('E', 12.70), ('T', 9.06), ('A', 8.17), ('O', 7.51), ('I', 6.97), ('N', 6.75),
    ('S', 6.33), ('H', 6.09), ('R', 5.99), ('D', 4.25), ('L', 4.03), ('C', 2.78),
    ('U', 2.76), ('M', 2.41), ('W', 2.36), ('F', 2.23), ('G', 2.02), ('Y', 1.97),
    ('P', 1.93), ('B', 1.29), ('V', 0.98), ('K', 0.77), ('J', 0.15), ('X', 0.15),
    ('Q', 0.10), ('Z', 0.07),
];

/// Position (0-25) of an ASCII letter in the alphabet, case-insensitive
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase letter at the given position, wrapping around the alphabet
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Reference frequency of a letter in English text, in percent
pub fn english_frequency(c: char) -> Option<f64> {
    let upper = c.to_ascii_uppercase();
    ENGLISH_FREQUENCIES
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map(|(_, freq)| *freq)
}
