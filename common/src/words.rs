use crate::error::PassphraseError;
use sha2::{Digest, Sha256};
use ulid::Ulid;

/// The built-in word list. Order matters: a random value `v` selects
/// `REFERENCE_WORDS[v % 64]`.
pub const REFERENCE_WORDS: WordList = WordList::from_static(&[
    "Dog", "Cat", "Worm", "Duck", "Horse", "Mule", "Donkey", "Giraffe", "Colt", "Mare", "Puppy",
    "Pup", "Kitty", "Kitten", "Sheep", "Lamb", "Goat", "Elephant", "Rhino", "Lion", "Cub", "Wolf",
    "Fox", "Bird", "Crow", "Raven", "Robin",
    "Song", "Piece",
    "Red", "Orange", "Pink", "Yellow", "Green", "Cyan", "Blue", "Magenta", "Purple", "White",
    "Black",
    "Little", "Small", "Big", "Tiny", "Huge", "Furry",
    "Eat", "Tap", "Kiss", "Push", "Poop", "Pee", "Hug", "Throw", "Toss", "Write", "Read",
    "Compute", "Fart", "Screw", "Drink", "Feed", "Play", "Sing",
]);

/// An ordered, non-empty, read-only list of candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList {
    words: &'static [&'static str],
}

impl WordList {
    /// Builds a list in a const context. An empty slice fails to compile
    /// when used to initialize a `const`.
    pub const fn from_static(words: &'static [&'static str]) -> Self {
        assert!(!words.is_empty(), "word list must not be empty");
        WordList { words }
    }

    pub fn new(words: &'static [&'static str]) -> Result<Self, PassphraseError> {
        if words.is_empty() {
            return Err(PassphraseError::EmptyWordList);
        }
        Ok(WordList { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| *w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.words.iter().copied()
    }

    /// Maps a raw random value onto a list position: `value % len`.
    pub fn index_for(&self, value: u32) -> usize {
        value as usize % self.words.len()
    }

    /// Deterministic identifier of the list contents and order.
    pub fn fingerprint(&self) -> Ulid {
        let mut hasher = Sha256::new();
        for word in self.words {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        let result = hasher.finalize();
        // Use the first 16 bytes of the hash to create a ULID
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&result[..16]);
        Ulid::from_bytes(bytes)
    }
}
