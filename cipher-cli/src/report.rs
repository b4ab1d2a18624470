//! Text tables printed by the command line and the shell

use std::fmt::Write;

use classic_ciphers::alphabet::english_frequency;
use classic_ciphers::analysis::{rank_descending, LetterCount};
use classic_ciphers::rotation::ranked_candidates;
use classic_ciphers::substitution::MAX_SCORE;
use classic_ciphers::Suggestion;

/// List every brute-force decryption, marking the one that looks most like English.
///
/// With `ranked` the list is ordered by score instead of by shift.
pub fn brute_force_table(ciphertext: &str, ranked: bool) -> String {
    let mut candidates = ranked_candidates(ciphertext);
    let best = candidates.first().map(|(candidate, _)| candidate.shift);
    if !ranked {
        candidates.sort_by_key(|(candidate, _)| candidate.shift);
    }

    let mut table = String::from("SHIFT  SCORE  POSSIBLE DECRYPTION\n");
    for (candidate, score) in candidates {
        let marker = if Some(candidate.shift) == best { '*' } else { ' ' };
        let _ = writeln!(
            table,
            "{marker}{:>4}  {score:>2}/{MAX_SCORE}  {}",
            candidate.shift, candidate.text
        );
    }
    table
}

/// Letter counts of a text next to the English reference, most frequent first
pub fn frequency_table(counts: &LetterCount) -> String {
    let mut table = String::from("LETTER  COUNT  PERCENT  ENGLISH\n");
    for letter in rank_descending(counts).letters() {
        let _ = writeln!(
            table,
            "{letter:>6}  {:>5}  {:>6.2}%  {:>6.2}%",
            counts.get(*letter),
            counts.percentage(*letter),
            english_frequency(*letter).unwrap_or_default()
        );
    }
    table
}

/// Ciphertext letters in rank order with the plaintext letters they were paired with
pub fn correlation_table(suggestion: &Suggestion) -> String {
    let mut table = String::from("CIPHER  PLAIN\n");
    for letter in suggestion.cipher_ranking.letters() {
        let plain = suggestion.mapping.plain_for(*letter).unwrap_or('?');
        let _ = writeln!(table, "{letter:>6}  {plain:>5}");
    }
    let _ = writeln!(table, "score {}/{MAX_SCORE}", suggestion.score);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_ciphers::{analysis, substitution};

    #[test]
    fn test_brute_force_table_lists_every_shift() {
        let table = brute_force_table("wkh fdw vdw rq wkh pdw", false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 26);
        assert!(lines[1].trim_start().starts_with('1') || lines[1].starts_with('*'));
        assert!(lines[3].contains("the cat sat on the mat"));
    }

    #[test]
    fn test_ranked_table_starts_with_best() {
        let ciphertext = classic_ciphers::rotation::encode(
            "it was the best of times it was the worst of times it was the age of wisdom",
            11,
        );
        let table = brute_force_table(&ciphertext, true);
        let first = table.lines().nth(1).unwrap();
        assert!(first.starts_with('*'));
        assert!(first.contains("it was the best of times"));
    }

    #[test]
    fn test_frequency_table() {
        let table = frequency_table(&analysis::count("eeet"));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 27);
        assert!(lines[1].contains("E      3   75.00%   12.70%"));
    }

    #[test]
    fn test_correlation_table() {
        let suggestion = substitution::suggest("xxxy").unwrap();
        let table = correlation_table(&suggestion);
        assert!(table.contains("     X      e"));
        assert!(table.contains("     Y      t"));
    }
}
