// https://docs.rs/thiserror/latest/thiserror/
#[derive(thiserror::Error, Debug)]
pub enum PassphraseError {
    /// The secure random source refused to produce values.
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(#[source] rand::Error),
    /// A word list was built from an empty slice.
    #[error("Word list is empty")]
    EmptyWordList,
}
