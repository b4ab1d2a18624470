//! Letter frequency analysis
//!
//! Counts are returned as owned values from every call to [`count`], so two
//! analyses never share state.

use std::fmt;

use crate::alphabet::{index_of, ALPHABET_LEN};

/// Occurrence counts of the letters A-Z in one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCount {
    counts: [u32; ALPHABET_LEN],
}

impl LetterCount {
    /// Number of occurrences of a letter (case-insensitive, 0 for non-letters)
    pub fn get(&self, letter: char) -> u32 {
        index_of(letter).map_or(0, |i| self.counts[i])
    }

    /// Total number of letters counted
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Share of a letter among all counted letters, in percent
    pub fn percentage(&self, letter: char) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.get(letter)) * 100.0 / f64::from(total)
    }

    /// Iterate `(uppercase letter, count)` pairs in A-Z order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| ((b'A' + i as u8) as char, n))
    }
}

/// Letters ordered from most to least frequent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking(Vec<char>);

impl Ranking {
    /// Build a ranking from letters already in rank order (normalized to uppercase)
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        Self(letters.into_iter().map(|c| c.to_ascii_uppercase()).collect())
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of different letters A-Z in the ranking
    pub fn distinct_letters(&self) -> usize {
        let mut seen = [false; ALPHABET_LEN];
        for i in self.0.iter().filter_map(|&c| index_of(c)) {
            seen[i] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// True when every letter A-Z appears exactly once
    pub fn is_complete(&self) -> bool {
        self.0.len() == ALPHABET_LEN && self.distinct_letters() == ALPHABET_LEN
    }

    /// The `n` most frequent letters
    pub fn top(&self, n: usize) -> &[char] {
        &self.0[..n.min(self.0.len())]
    }

    /// The `n` least frequent letters
    pub fn bottom(&self, n: usize) -> &[char] {
        &self.0[self.0.len().saturating_sub(n)..]
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Count the ASCII letters of a text, ignoring case and everything else
pub fn count(text: &str) -> LetterCount {
    let mut counts = [0u32; ALPHABET_LEN];

    for c in text.chars() {
        if let Some(index) = index_of(c) {
            counts[index] += 1;
        }
    }

    LetterCount { counts }
}

/// Order letters by descending count, ties broken alphabetically
pub fn rank_descending(counts: &LetterCount) -> Ranking {
    let mut pairs: Vec<(char, u32)> = counts.iter().collect();
    // stable: equal counts keep their A-Z order
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    Ranking(pairs.into_iter().map(|(c, _)| c).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ignores_case_and_symbols() {
        let counts = count("Hello, World! 123");
        assert_eq!(counts.get('l'), 3);
        assert_eq!(counts.get('O'), 2);
        assert_eq!(counts.get('h'), 1);
        assert_eq!(counts.get('!'), 0);
        assert_eq!(counts.total(), 10);
    }

    #[test]
    fn test_count_does_not_accumulate() {
        let text = "wkh fdw vdw rq wkh pdw";
        let first = count(text);
        let _other = count("zzzzzzzz");
        let second = count(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentage() {
        let counts = count("aab");
        assert!((counts.percentage('a') - 66.666).abs() < 0.01);
        assert_eq!(count("").percentage('a'), 0.0);
    }

    #[test]
    fn test_rank_descending_ties_alphabetical() {
        let ranking = rank_descending(&count("bbbccaad"));
        assert_eq!(&ranking.letters()[..4], &['B', 'A', 'C', 'D']);
        assert_eq!(ranking.len(), 26);
        // untouched letters follow in A-Z order
        assert_eq!(&ranking.letters()[4..7], &['E', 'F', 'G']);
        assert!(ranking.is_complete());
    }

    #[test]
    fn test_rank_empty_text_is_alphabetical() {
        let ranking = rank_descending(&count(""));
        assert_eq!(ranking.to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_ranking_top_bottom() {
        let ranking = Ranking::from_letters("etaoinshrdlcumwfgypbvkjxqz".chars());
        assert_eq!(ranking.top(3), &['E', 'T', 'A']);
        assert_eq!(ranking.bottom(2), &['Q', 'Z']);
        assert!(ranking.is_complete());
        assert!(!Ranking::from_letters("abc".chars()).is_complete());
        assert!(!Ranking::from_letters("aacdefghijklmnopqrstuvwxyz".chars()).is_complete());
    }
}
