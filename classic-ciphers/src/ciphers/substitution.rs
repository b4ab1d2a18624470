//! Substitution cipher and frequency-correlation suggester
//!
//! A ciphertext is attacked by ranking its letters by frequency and pairing
//! that ranking, position for position, with the ranking of English letters.
//! The result is only a first guess: short texts rarely follow the English
//! distribution, so the mapping usually needs a few manual swaps afterwards.

use std::sync::OnceLock;

use tracing::debug;

use crate::alphabet::{index_of, letter_at, ALPHABET_LEN, ENGLISH_FREQUENCIES};
use crate::analysis::{count, rank_descending, Ranking};
use crate::cipher::TextCipher;
use crate::error::{CipherError, Result};

/// How many letters at each end of a ranking [`match_score`] compares
pub const SCORE_WINDOW: usize = 6;
/// Highest possible value of [`match_score`]
pub const MAX_SCORE: u8 = (2 * SCORE_WINDOW) as u8;

/// English letters ordered by descending reference frequency.
///
/// Letters with equal frequency keep their table order, so J ranks above X.
pub fn reference_ranking() -> &'static Ranking {
    static REFERENCE: OnceLock<Ranking> = OnceLock::new();
    REFERENCE.get_or_init(|| {
        let mut table = ENGLISH_FREQUENCIES.to_vec();
        table.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ranking::from_letters(table.into_iter().map(|(letter, _)| letter))
    })
}

/// One-to-one mapping between ciphertext letters and plaintext letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMapping {
    to_plain: [char; ALPHABET_LEN],
    to_cipher: [char; ALPHABET_LEN],
}

impl SubstitutionMapping {
    /// Build a mapping from a 26 letter key, where the i-th key letter
    /// encrypts the i-th letter of the alphabet
    pub fn from_key(key: &str) -> Result<Self> {
        let letters: Vec<usize> = key.chars().filter_map(index_of).collect();
        let mut to_plain = ['\0'; ALPHABET_LEN];
        let mut to_cipher = ['\0'; ALPHABET_LEN];

        if letters.len() != ALPHABET_LEN || key.chars().count() != ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "substitution key must hold 26 letters, got {key:?}"
            )));
        }

        for (plain, &cipher) in letters.iter().enumerate() {
            if to_plain[cipher] != '\0' {
                return Err(CipherError::InvalidKey(format!(
                    "letter '{}' appears twice in substitution key",
                    letter_at(cipher)
                )));
            }
            to_plain[cipher] = letter_at(plain);
            to_cipher[plain] = letter_at(cipher);
        }

        Ok(Self { to_plain, to_cipher })
    }

    /// The key form of the mapping: cipher letters for plaintext a..z
    pub fn to_key(&self) -> String {
        self.to_cipher.iter().collect()
    }

    /// Plaintext letter assigned to a ciphertext letter
    pub fn plain_for(&self, cipher: char) -> Option<char> {
        index_of(cipher).map(|i| self.to_plain[i])
    }

    /// Ciphertext letter assigned to a plaintext letter
    pub fn cipher_for(&self, plain: char) -> Option<char> {
        index_of(plain).map(|i| self.to_cipher[i])
    }

    /// `(cipher, plain)` pairs in alphabetical order of the cipher letter
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.to_plain
            .iter()
            .enumerate()
            .map(|(i, &plain)| (letter_at(i), plain))
    }

    /// Exchange the plaintext letters assigned to two ciphertext letters
    pub fn swap(&mut self, a: char, b: char) -> Result<()> {
        let (Some(a), Some(b)) = (index_of(a), index_of(b)) else {
            return Err(CipherError::InvalidKey(format!(
                "cannot swap '{a}' and '{b}': both must be letters"
            )));
        };

        self.to_plain.swap(a, b);
        for (cipher, plain) in [(a, self.to_plain[a]), (b, self.to_plain[b])] {
            if let Some(p) = index_of(plain) {
                self.to_cipher[p] = letter_at(cipher);
            }
        }
        Ok(())
    }

    /// Encrypt a plaintext with the mapping
    pub fn encrypt_text(&self, plaintext: &str) -> String {
        substitute(plaintext, &self.to_cipher)
    }

    /// Decrypt a ciphertext with the mapping
    pub fn decrypt_text(&self, ciphertext: &str) -> String {
        substitute(ciphertext, &self.to_plain)
    }
}

fn substitute(text: &str, table: &[char; ALPHABET_LEN]) -> String {
    text.chars()
        .map(|c| match index_of(c) {
            Some(i) => table[i],
            None => c,
        })
        .collect()
}

/// Pair two rankings by position: the n-th most frequent ciphertext letter
/// decrypts to the n-th most frequent reference letter.
pub fn build_mapping(cipher_ranking: &Ranking, reference: &Ranking) -> Result<SubstitutionMapping> {
    for ranking in [cipher_ranking, reference] {
        if !ranking.is_complete() {
            return Err(CipherError::IncompleteMapping {
                found: ranking.distinct_letters(),
            });
        }
    }

    let mut to_plain = ['\0'; ALPHABET_LEN];
    let mut to_cipher = ['\0'; ALPHABET_LEN];
    for (&plain, &cipher) in reference.letters().iter().zip(cipher_ranking.letters()) {
        // both rankings are complete, so every letter has an index
        if let (Some(p), Some(c)) = (index_of(plain), index_of(cipher)) {
            to_plain[c] = letter_at(p);
            to_cipher[p] = letter_at(c);
        }
    }

    debug!(
        cipher = %cipher_ranking,
        reference = %reference,
        "built substitution mapping"
    );
    Ok(SubstitutionMapping { to_plain, to_cipher })
}

/// Decrypt a ciphertext by looking up each letter in the mapping.
///
/// Characters without an entry pass through; letters come out lowercase.
pub fn apply(ciphertext: &str, mapping: &SubstitutionMapping) -> String {
    mapping.decrypt_text(ciphertext)
}

/// Count how many of the reference's six most and six least frequent letters
/// sit at the same end of the candidate ranking. Ranges over `0..=12`.
pub fn match_score(candidate: &Ranking, reference: &Ranking) -> u8 {
    let common = reference
        .top(SCORE_WINDOW)
        .iter()
        .filter(|c| candidate.top(SCORE_WINDOW).contains(c))
        .count();
    let uncommon = reference
        .bottom(SCORE_WINDOW)
        .iter()
        .filter(|c| candidate.bottom(SCORE_WINDOW).contains(c))
        .count();

    (common + uncommon).min(MAX_SCORE as usize) as u8
}

/// How closely the letter distribution of a text resembles English
pub fn english_score(text: &str) -> u8 {
    match_score(&rank_descending(&count(text)), reference_ranking())
}

/// Result of a frequency-correlation attack on a ciphertext
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub cipher_ranking: Ranking,
    pub mapping: SubstitutionMapping,
    pub candidate: String,
    pub score: u8,
}

/// Propose a substitution mapping for a ciphertext and decrypt with it
pub fn suggest(ciphertext: &str) -> Result<Suggestion> {
    let cipher_ranking = rank_descending(&count(ciphertext));
    let mapping = build_mapping(&cipher_ranking, reference_ranking())?;
    let candidate = apply(ciphertext, &mapping);
    let score = english_score(&candidate);

    debug!(score, "substitution suggestion");
    Ok(Suggestion {
        cipher_ranking,
        mapping,
        candidate,
        score,
    })
}

/// Substitution cipher with a fixed mapping
#[derive(Debug, Clone)]
pub struct SubstitutionCipher {
    mapping: SubstitutionMapping,
}

impl SubstitutionCipher {
    pub fn new(mapping: SubstitutionMapping) -> Self {
        Self { mapping }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        SubstitutionMapping::from_key(key).map(Self::new)
    }

    pub fn mapping(&self) -> &SubstitutionMapping {
        &self.mapping
    }
}

impl TextCipher for SubstitutionCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(self.mapping.encrypt_text(plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(self.mapping.decrypt_text(ciphertext))
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnm";

    #[test]
    fn test_reference_ranking_order() {
        assert_eq!(
            reference_ranking().to_string(),
            "ETAOINSHRDLCUMWFGYPBVKJXQZ"
        );
        assert!(std::ptr::eq(reference_ranking(), reference_ranking()));
    }

    #[test]
    fn test_match_score_identical_rankings() {
        let reference = reference_ranking();
        assert_eq!(match_score(reference, reference), MAX_SCORE);
    }

    #[test]
    fn test_match_score_reversed_ranking() {
        let reference = reference_ranking();
        let reversed = Ranking::from_letters(reference.letters().iter().rev().copied());
        assert_eq!(match_score(&reversed, reference), 0);
    }

    #[test]
    fn test_match_score_short_candidate_stays_in_bounds() {
        let short = Ranking::from_letters("et".chars());
        let score = match_score(&short, reference_ranking());
        assert!(score <= MAX_SCORE);
    }

    #[test]
    fn test_build_mapping_pairs_by_rank() {
        let cipher = Ranking::from_letters("XYZABCDEFGHIJKLMNOPQRSTUVW".chars());
        let mapping = build_mapping(&cipher, reference_ranking()).unwrap();
        assert_eq!(mapping.plain_for('x'), Some('e'));
        assert_eq!(mapping.plain_for('Y'), Some('t'));
        assert_eq!(mapping.cipher_for('e'), Some('x'));
        assert_eq!(mapping.plain_for('w'), Some('z'));
    }

    #[test]
    fn test_build_mapping_rejects_incomplete_ranking() {
        let short = Ranking::from_letters("ABC".chars());
        assert_eq!(
            build_mapping(&short, reference_ranking()),
            Err(CipherError::IncompleteMapping { found: 3 })
        );

        let repeated = Ranking::from_letters("AACDEFGHIJKLMNOPQRSTUVWXYZ".chars());
        assert_eq!(
            build_mapping(reference_ranking(), &repeated),
            Err(CipherError::IncompleteMapping { found: 25 })
        );
    }

    #[test]
    fn test_apply_looks_up_letters() {
        let cipher = Ranking::from_letters("XYZABCDEFGHIJKLMNOPQRSTUVW".chars());
        let mapping = build_mapping(&cipher, reference_ranking()).unwrap();
        assert_eq!(apply("XY x-y!", &mapping), "et e-t!");
    }

    #[test]
    fn test_suggest_recovers_frequency_matched_text() {
        // ciphertext whose letter ranking already matches English exactly
        let reference = reference_ranking().to_string().to_lowercase();
        let mut ciphertext = String::new();
        for (rank, letter) in reference.chars().enumerate() {
            for _ in 0..(ALPHABET_LEN - rank) {
                ciphertext.push(letter);
            }
        }
        let mapping = SubstitutionMapping::from_key(QWERTY).unwrap();
        let encrypted = mapping.encrypt_text(&ciphertext);

        let suggestion = suggest(&encrypted).unwrap();
        assert_eq!(suggestion.candidate, ciphertext);
        assert_eq!(suggestion.mapping, mapping);
        assert_eq!(suggestion.score, MAX_SCORE);
    }

    #[test]
    fn test_key_round_trip() {
        let mapping = SubstitutionMapping::from_key(QWERTY).unwrap();
        assert_eq!(mapping.to_key(), QWERTY);
        assert_eq!(mapping.cipher_for('a'), Some('q'));
        assert_eq!(mapping.plain_for('q'), Some('a'));
    }

    #[test]
    fn test_from_key_rejects_bad_keys() {
        assert!(matches!(
            SubstitutionMapping::from_key("abc"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            SubstitutionMapping::from_key("aacdefghijklmnopqrstuvwxyz"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            SubstitutionMapping::from_key("abcdefghijklmnopqrstuvwxy1"),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_swap_keeps_mapping_consistent() {
        let mut mapping = SubstitutionMapping::from_key(QWERTY).unwrap();
        // q -> a and w -> b before the swap
        mapping.swap('q', 'w').unwrap();
        assert_eq!(mapping.plain_for('q'), Some('b'));
        assert_eq!(mapping.plain_for('w'), Some('a'));
        assert_eq!(mapping.cipher_for('a'), Some('w'));
        assert_eq!(mapping.cipher_for('b'), Some('q'));
        assert!(mapping.swap('q', '1').is_err());
    }

    #[test]
    fn test_cipher_is_symmetric() {
        let cipher = SubstitutionCipher::from_key(QWERTY).unwrap();
        let encrypted = cipher.encrypt("Hello, World").unwrap();
        assert_eq!(encrypted, "itssg, vgksr");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "hello, world");
    }
}
