// Backend selection: a closed set of scorer variants chosen by name.
//
// The scorers are interchangeable from the pipeline's point of view — same
// input contract (any text), same output contract (polarity in [-1, 1]).
// Selection happens once, from the CLI string, before any other work; an
// unrecognized name is fatal.

use thiserror::Error;

/// The available sentiment scoring backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Plain mean of matched word valences.
    Lexicon,
    /// Valence mean with negation and intensifier handling.
    Rules,
    /// Sign-count ratio of positive vs. negative matches.
    Ratio,
}

/// Requested backend name is not one of the supported identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sentiment backend '{0}' (supported: lexicon, rules, ratio)")]
pub struct UnknownBackend(pub String);

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Lexicon, Backend::Rules, Backend::Ratio];

    /// The identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Lexicon => "lexicon",
            Backend::Rules => "rules",
            Backend::Ratio => "ratio",
        }
    }

    /// Resolve a backend identifier. Case-sensitive, lowercase names only.
    pub fn from_name(name: &str) -> Result<Self, UnknownBackend> {
        match name {
            "lexicon" => Ok(Backend::Lexicon),
            "rules" => Ok(Backend::Rules),
            "ratio" => Ok(Backend::Ratio),
            _ => Err(UnknownBackend(name.to_string())),
        }
    }
}
