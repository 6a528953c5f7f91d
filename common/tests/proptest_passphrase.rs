use proptest::prelude::*;

use wordpass_common::{
    generate_passphrase, generate_passphrase_with, PassphraseError, SecureRandom,
    REFERENCE_WORDS, WORD_COUNT,
};

struct Stub([u32; WORD_COUNT]);

impl SecureRandom for Stub {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<(), PassphraseError> {
        dest.copy_from_slice(&self.0);
        Ok(())
    }
}

/// Splits `phrase` into list words, trying every prefix. Returns every
/// possible segmentation into exactly `WORD_COUNT` words.
fn segmentations(phrase: &str, remaining: usize) -> Vec<Vec<&'static str>> {
    if remaining == 0 {
        return if phrase.is_empty() { vec![vec![]] } else { vec![] };
    }
    let mut found = Vec::new();
    for word in REFERENCE_WORDS.iter() {
        if let Some(rest) = phrase.strip_prefix(word) {
            for mut tail in segmentations(rest, remaining - 1) {
                tail.insert(0, word);
                found.push(tail);
            }
        }
    }
    found
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn stubbed_sample_selects_modulo_length(
        a in any::<u32>(),
        b in any::<u32>(),
        c in any::<u32>(),
        d in any::<u32>(),
    ) {
        let words = REFERENCE_WORDS.words();
        let n = words.len();
        let expected = format!(
            "{}{}{}{}",
            words[a as usize % n],
            words[b as usize % n],
            words[c as usize % n],
            words[d as usize % n],
        );
        let phrase = generate_passphrase_with(&mut Stub([a, b, c, d]), &REFERENCE_WORDS).unwrap();
        prop_assert_eq!(phrase, expected);
    }

    #[test]
    fn stubbed_sample_segments_into_four_words(sample in prop::array::uniform4(any::<u32>())) {
        let phrase = generate_passphrase_with(&mut Stub(sample), &REFERENCE_WORDS).unwrap();
        let expected: Vec<&str> = sample
            .iter()
            .map(|&v| REFERENCE_WORDS.words()[REFERENCE_WORDS.index_for(v)])
            .collect();
        let found = segmentations(&phrase, WORD_COUNT);
        prop_assert!(found.contains(&expected));
    }
}

#[test]
fn test_generated_passphrases_are_four_list_words() {
    for _ in 0..1_000 {
        let phrase = generate_passphrase().unwrap();
        assert!(
            !segmentations(&phrase, WORD_COUNT).is_empty(),
            "{phrase} is not four list words"
        );
        assert!(!phrase.contains(char::is_whitespace));
    }
}

#[test]
fn test_word_list_is_unchanged_by_generation() {
    let before: Vec<&str> = REFERENCE_WORDS.iter().collect();
    let fingerprint = REFERENCE_WORDS.fingerprint();
    for _ in 0..10_000 {
        generate_passphrase().unwrap();
    }
    let after: Vec<&str> = REFERENCE_WORDS.iter().collect();
    assert_eq!(before, after);
    assert_eq!(fingerprint, REFERENCE_WORDS.fingerprint());
}
