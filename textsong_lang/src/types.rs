// Core token types shared by the melody pipeline.
//
// The tagger deliberately collapses the full part-of-speech zoo into three
// classes. The melody mapper only distinguishes content-word emphasis
// (nouns and verbs get pitch offsets), so adjectives, adverbs, pronouns,
// determiners and everything else land in `Other`. A word the tagger cannot
// place is also `Other` — the permissive default, never an error.

use serde::{Deserialize, Serialize};

/// Coarse grammatical class of a token. Closed three-way set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    /// Noun-like content word.
    Noun,
    /// Verb-like content word.
    Verb,
    /// Everything else, including words the tagger does not recognize.
    Other,
}

/// One word of input text with its assigned class.
///
/// `text` is the word as written (original case, surrounding punctuation
/// stripped). Classification is case-insensitive, but the original spelling
/// is kept because downstream rhythm assignment uses the word's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub class: WordClass,
}

impl Token {
    pub fn new(text: impl Into<String>, class: WordClass) -> Self {
        Token {
            text: text.into(),
            class,
        }
    }
}
