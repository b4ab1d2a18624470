use classic_ciphers::{analysis, blocks, rotation, substitution, PermutationKey, Ranking};
use proptest::prelude::*;

/// Lowercase keywords of one to twelve letters
fn keyword() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

proptest! {
    #[test]
    fn rotation_round_trip(plaintext in "[a-z]{0,64}", shift in 1i64..=25) {
        let ciphertext = rotation::encode(&plaintext, shift);
        prop_assert_eq!(rotation::decode(&ciphertext, shift), plaintext);
    }

    #[test]
    fn brute_force_contains_plaintext(plaintext in "[a-z ]{1,40}", shift in 1i64..=25) {
        let ciphertext = rotation::encode(&plaintext, shift);
        let found = rotation::brute_force(&ciphertext)
            .any(|candidate| i64::from(candidate.shift) == shift && candidate.text == plaintext);
        prop_assert!(found);
    }

    #[test]
    fn counting_is_repeatable(text in ".{0,80}") {
        prop_assert_eq!(analysis::count(&text), analysis::count(&text));
    }

    #[test]
    fn key_is_a_permutation(word in keyword()) {
        let key = PermutationKey::build(&word).unwrap();
        let mut positions = key.positions().to_vec();
        positions.sort_unstable();
        prop_assert_eq!(positions, (1..=word.len()).collect::<Vec<_>>());
    }

    #[test]
    fn block_round_trip(word in keyword(), text in "[a-z]{0,60}") {
        let key = PermutationKey::build(&word).unwrap();
        let k = key.len();
        // trim to a multiple of the block size so no padding is needed
        let text = &text[..text.len() - text.len() % k];

        let encrypted = blocks::encode_blocks(&blocks::split_blocks(text, k).unwrap(), &key).unwrap();
        let decoded = blocks::decode_blocks(&blocks::split_blocks(&encrypted, k).unwrap(), &key).unwrap();
        prop_assert_eq!(blocks::join_blocks(&decoded), text);
    }

    #[test]
    fn padded_blocks_have_full_length(text in "[a-z]{1,60}", k in 1usize..10) {
        let split = blocks::split_blocks(&text, k).unwrap();
        prop_assert_eq!(split.len(), text.len().div_ceil(k));
        prop_assert!(split.iter().all(|block| block.len() == k));
    }

    #[test]
    fn match_score_is_bounded(letters in Just(('a'..='z').collect::<Vec<char>>()).prop_shuffle()) {
        let candidate = Ranking::from_letters(letters);
        let score = substitution::match_score(&candidate, substitution::reference_ranking());
        prop_assert!(score <= substitution::MAX_SCORE);
    }

    #[test]
    fn mapping_round_trip(letters in Just(('a'..='z').collect::<Vec<char>>()).prop_shuffle(), text in "[a-z ,.]{0,60}") {
        let key: String = letters.into_iter().collect();
        let mapping = substitution::SubstitutionMapping::from_key(&key).unwrap();
        prop_assert_eq!(mapping.decrypt_text(&mapping.encrypt_text(&text)), text);
    }
}
