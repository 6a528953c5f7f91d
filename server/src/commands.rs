use anyhow::Result;
use std::io::Write;
use tracing::debug;
use wordpass_common::{draw_indices, passphrase_from_indices, SecureRandom, WordList};

/// Writes `count` passphrases, one per line. With `verbose`, each line also
/// carries the list positions that were drawn.
pub fn generate<R: SecureRandom, W: Write>(
    rng: &mut R,
    words: &WordList,
    count: usize,
    verbose: bool,
    out: &mut W,
) -> Result<()> {
    for _ in 0..count {
        let indices = draw_indices(rng, words)?;
        let passphrase = passphrase_from_indices(words, &indices);
        if verbose {
            writeln!(out, "{passphrase}\t{indices:?}")?;
        } else {
            writeln!(out, "{passphrase}")?;
        }
    }
    debug!("Generated {} passphrase(s)", count);
    Ok(())
}

/// Writes the word list, one word per line, after a fingerprint header.
pub fn list_words<W: Write>(words: &WordList, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "# {} words, fingerprint {}",
        words.len(),
        words.fingerprint()
    )?;
    for word in words.iter() {
        writeln!(out, "{word}")?;
    }
    Ok(())
}
