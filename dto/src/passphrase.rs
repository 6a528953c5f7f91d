use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;
use utoipa::ToSchema;
use wordpass_common::WordList;

#[derive(Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PassphraseResponse {
    /// Four concatenated words
    #[schema(example = "DogRedBigKiss")]
    pub passphrase: String,
}

impl fmt::Debug for PassphraseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassphraseResponse")
            .field("passphrase", &"REDACTED")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WordListInfo {
    /// Number of candidate words
    pub length: usize,
    /// Deterministic id of the list contents and order
    #[schema(value_type = String)]
    pub fingerprint: Ulid,
    /// Candidate words, in selection order
    pub words: Vec<String>,
}

impl From<&WordList> for WordListInfo {
    fn from(list: &WordList) -> Self {
        WordListInfo {
            length: list.len(),
            fingerprint: list.fingerprint(),
            words: list.iter().map(str::to_string).collect(),
        }
    }
}
