use std::sync::Arc;
use tracing::info;
use wordpass_common::WordList;

////////////////////////////////////////////////////////////////////////////////
// Global app state
////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug)]
pub struct AppState {
    pub words: WordList,
}

/// Read-only after startup, so no lock.
pub type SharedState = Arc<AppState>;

pub fn create_shared_state(words: WordList) -> SharedState {
    info!(
        "Word list: {} words, fingerprint {}",
        words.len(),
        words.fingerprint()
    );
    Arc::new(AppState { words })
}
