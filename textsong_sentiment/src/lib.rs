// Pluggable lexical sentiment scorers for textsong.
//
// Maps text to a single polarity score in [-1, 1] — the value that drives
// scale selection (sign) and note velocity (magnitude) in the melody crate.
// Three backends share one valence lexicon and differ only in how they
// combine per-word valences; see score.rs for the contract and the known
// cross-backend disagreements.
//
// Architecture:
// - `lexicon.rs`: `ValenceLexicon` — JSON word valences, negators, intensifiers
// - `backend.rs`: `Backend` — closed variant set, selected by CLI name
// - `score.rs`: the three scoring strategies
//
// The lexicon follows the same load pattern as the tag lexicon in
// `textsong_lang`: embedded default via `include_str!`, optional disk load.
// Loading happens once in main; the loaded model is injected into the
// pipeline by reference, never reached through a global.

pub mod backend;
pub mod lexicon;
pub mod score;

pub use backend::{Backend, UnknownBackend};
pub use lexicon::{ValenceLexicon, default_valence_lexicon};
pub use score::score;
