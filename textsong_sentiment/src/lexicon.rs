// Valence lexicon: the shared word-level sentiment model.
//
// All three scoring backends read from the same lexicon; they differ only
// in how they combine the per-word valences. The lexicon is loaded from
// JSON once (in main) and passed by reference into the pipeline — there is
// no ambient global model state.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Word-level sentiment data loaded from `data/valence_lexicon.json`.
///
/// Valences are signed strengths in [-1, 1]. Negators flip the sign of the
/// valence word that follows them; intensifiers scale it by a factor
/// (factors above 1 amplify, below 1 dampen).
#[derive(Debug, Clone, Deserialize)]
pub struct ValenceLexicon {
    /// word -> signed valence in [-1, 1]
    pub words: BTreeMap<String, f64>,
    /// Words that flip the sign of the following valence word.
    pub negators: Vec<String>,
    /// word -> scaling factor applied to the following valence word.
    pub intensifiers: BTreeMap<String, f64>,
}

impl ValenceLexicon {
    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&data)?)
    }

    /// Signed valence of a (normalized) word, if the lexicon knows it.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.iter().any(|n| n == word)
    }

    /// Scaling factor if the word is an intensifier.
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }
}

/// Load the default valence lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/valence_lexicon.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_valence_lexicon() -> ValenceLexicon {
    let json = include_str!("../../data/valence_lexicon.json");
    ValenceLexicon::from_json(json).expect("embedded valence_lexicon.json is malformed")
}
