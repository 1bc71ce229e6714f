// Word classification: lexicon lookup with suffix fallback.
//
// Classification order, first match wins:
// 1. Function-word list (determiners, prepositions, pronouns, auxiliaries)
//    — these are `Other` even when they end in a content-word suffix.
// 2. Verb list (common verbs including irregular past forms like "sat").
// 3. Noun list.
// 4. Verb suffix table (-ing, -ed, -ize, ...).
// 5. Noun suffix table (-tion, -ness, -ment, ...).
// 6. `Other` — the permissive default for anything unrecognized.
//
// The suffix tables are compile-time constants; the word lists live in the
// JSON lexicon so they can be extended without a rebuild.

use crate::TagLexicon;
use crate::types::WordClass;

/// Suffixes that usually mark a verb form. Checked before noun suffixes so
/// that "-ed"/"-ing" derivations of nouns ("gardening") still read as verbs,
/// which matches how the melody mapper wants to emphasize action words.
pub const VERB_SUFFIXES: &[&str] = &[
    "izing", "ising", "ized", "ised", "ifying", "ified", "ing", "ed", "ize", "ise", "ify", "ate",
];

/// Suffixes that usually mark a noun.
pub const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ism", "ship", "ence", "ance", "hood", "dom", "er",
    "or",
];

/// Minimum stem length left over after removing a suffix. Prevents short
/// words like "red" or "ring" from matching "-ed"/"-ing".
const MIN_STEM: usize = 3;

/// Classify a single word (case-insensitive) into the three-way class set.
pub fn classify(lexicon: &TagLexicon, word: &str) -> WordClass {
    let lower = word.to_lowercase();

    if lexicon.function_words.contains(lower.as_str()) {
        return WordClass::Other;
    }
    if lexicon.verbs.contains(lower.as_str()) {
        return WordClass::Verb;
    }
    if lexicon.nouns.contains(lower.as_str()) {
        return WordClass::Noun;
    }
    if has_suffix(&lower, VERB_SUFFIXES) {
        return WordClass::Verb;
    }
    if has_suffix(&lower, NOUN_SUFFIXES) {
        return WordClass::Noun;
    }
    WordClass::Other
}

fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|s| word.len() >= s.len() + MIN_STEM && word.ends_with(s))
}
