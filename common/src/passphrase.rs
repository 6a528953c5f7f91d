use crate::error::PassphraseError;
use crate::random::{OsRandom, SecureRandom};
use crate::words::{WordList, REFERENCE_WORDS};

/// Number of words in every passphrase.
pub const WORD_COUNT: usize = 4;

/// Draws one fresh random sample and maps it onto positions in `words`.
pub fn draw_indices<R: SecureRandom + ?Sized>(
    rng: &mut R,
    words: &WordList,
) -> Result<[usize; WORD_COUNT], PassphraseError> {
    let mut sample = [0u32; WORD_COUNT];
    rng.fill_u32(&mut sample)?;
    Ok(sample.map(|value| words.index_for(value)))
}

/// Concatenates the words at `indices`, in order, with no separator.
///
/// Panics if an index is out of range; indices from [`draw_indices`] on the
/// same list never are.
pub fn passphrase_from_indices(words: &WordList, indices: &[usize; WORD_COUNT]) -> String {
    let list = words.words();
    indices.iter().map(|&index| list[index]).collect()
}

/// Concatenates `WORD_COUNT` words chosen by `rng`, in draw order, with no
/// separator.
pub fn generate_passphrase_with<R: SecureRandom + ?Sized>(
    rng: &mut R,
    words: &WordList,
) -> Result<String, PassphraseError> {
    let indices = draw_indices(rng, words)?;
    Ok(passphrase_from_indices(words, &indices))
}

/// Generates a passphrase from the reference word list using the OS CSPRNG.
pub fn generate_passphrase() -> Result<String, PassphraseError> {
    generate_passphrase_with(&mut OsRandom, &REFERENCE_WORDS)
}
