// Tokenizer and coarse word-class tagger for textsong.
//
// Turns raw input text into an ordered sequence of classified tokens for
// the melody pipeline. The class set is deliberately tiny (noun / verb /
// other) — see types.rs for why.
//
// Architecture:
// - `types.rs`: `Token` and the three-way `WordClass`
// - `tagger.rs`: classification (word lists + suffix fallback)
// - `tokenize.rs`: whitespace splitting and punctuation stripping
// - `lib.rs` (this file): `TagLexicon` — loads and holds the JSON word lists
//
// The word lists are loaded from `data/tag_lexicon.json`, following the same
// pattern as the sentiment crate's valence lexicon (JSON string in, typed
// struct out). `default_tag_lexicon()` embeds the default lists at compile
// time via `include_str!`.
//
// Determinism constraint: classification of a fixed word against a fixed
// lexicon never varies between runs (BTreeSet storage, no hashing, no RNG).

pub mod tagger;
pub mod tokenize;
pub mod types;

pub use tokenize::tokenize;
pub use types::{Token, WordClass};

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Word lists used by the tagger. Loaded from JSON.
///
/// Words are stored lowercase; lookups lowercase the query. The lists may
/// overlap — plenty of English words are both noun and verb ("smile") — and
/// the classifier's check order (function words, then verbs, then nouns)
/// resolves the tie.
#[derive(Debug, Clone, Deserialize)]
pub struct TagLexicon {
    /// Determiners, prepositions, pronouns, conjunctions, auxiliaries.
    pub function_words: BTreeSet<String>,
    /// Common nouns.
    pub nouns: BTreeSet<String>,
    /// Common verbs, including irregular past forms.
    pub verbs: BTreeSet<String>,
}

impl TagLexicon {
    /// Parse a tag lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&data)?)
    }
}

/// Load the default tag lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/tag_lexicon.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_tag_lexicon() -> TagLexicon {
    let json = include_str!("../../data/tag_lexicon.json");
    TagLexicon::from_json(json).expect("embedded tag_lexicon.json is malformed")
}
