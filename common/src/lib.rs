//! Four-word passphrases drawn from a fixed word list with a secure random source.

pub mod error;
pub mod passphrase;
pub mod random;
pub mod words;

pub use error::PassphraseError;
pub use passphrase::{
    draw_indices, generate_passphrase, generate_passphrase_with, passphrase_from_indices,
    WORD_COUNT,
};
pub use random::{OsRandom, SecureRandom};
pub use words::{WordList, REFERENCE_WORDS};
