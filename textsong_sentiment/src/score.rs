// The three scoring backends.
//
// Each backend maps text to a polarity in [-1, 1] using the shared valence
// lexicon. 0 means neutral (including "no valence words matched"), positive
// means favorable, negative unfavorable. The backends are NOT required to
// agree numerically — "not good" scores positive under `Lexicon` (which
// ignores negation) and negative under `Rules`. The pipeline only depends
// on sign and magnitude, so backend choice can change which scale and
// velocity a given text gets.

use crate::backend::Backend;
use crate::lexicon::ValenceLexicon;

/// Score `text` with the chosen backend. Always returns a value in [-1, 1].
pub fn score(lexicon: &ValenceLexicon, text: &str, backend: Backend) -> f64 {
    let words = normalize_words(text);
    let raw = match backend {
        Backend::Lexicon => score_lexicon(lexicon, &words),
        Backend::Rules => score_rules(lexicon, &words),
        Backend::Ratio => score_ratio(lexicon, &words),
    };
    raw.clamp(-1.0, 1.0)
}

/// Lowercase and strip every non-alphanumeric character, so "Don't!" and
/// "dont" normalize to the same key. Words that vanish entirely are dropped.
fn normalize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let word: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() { None } else { Some(word) }
        })
        .collect()
}

/// Plain mean of the matched word valences. Ignores context entirely.
fn score_lexicon(lexicon: &ValenceLexicon, words: &[String]) -> f64 {
    let matched: Vec<f64> = words.iter().filter_map(|w| lexicon.valence(w)).collect();
    mean(&matched)
}

/// Mean of matched valences with a one-word modifier window: a negator
/// directly before a valence word flips its sign, an intensifier scales it.
fn score_rules(lexicon: &ValenceLexicon, words: &[String]) -> f64 {
    let mut matched = Vec::new();
    for (i, word) in words.iter().enumerate() {
        let Some(valence) = lexicon.valence(word) else {
            continue;
        };
        let adjusted = match i.checked_sub(1).map(|j| words[j].as_str()) {
            Some(prev) if lexicon.is_negator(prev) => -valence,
            Some(prev) => match lexicon.intensifier(prev) {
                Some(factor) => (valence * factor).clamp(-1.0, 1.0),
                None => valence,
            },
            None => valence,
        };
        matched.push(adjusted);
    }
    mean(&matched)
}

/// Sign-count ratio: (positive - negative) / matched. Cares only about how
/// one-sided the vocabulary is, not how strong each word is.
fn score_ratio(lexicon: &ValenceLexicon, words: &[String]) -> f64 {
    let mut positive = 0i32;
    let mut negative = 0i32;
    for word in words {
        match lexicon.valence(word) {
            Some(v) if v > 0.0 => positive += 1,
            Some(v) if v < 0.0 => negative += 1,
            _ => {}
        }
    }
    let matched = positive + negative;
    if matched == 0 {
        0.0
    } else {
        f64::from(positive - negative) / f64::from(matched)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_valence_lexicon;

    #[test]
    fn test_score_always_in_range() {
        let lexicon = default_valence_lexicon();
        let texts = [
            "",
            "the cat sat",
            "absolutely wonderful amazing perfect bliss",
            "utterly terrible horrible awful despair",
            "not very good but not extremely bad either",
            "Don't! Stop!! ... 1234",
        ];
        for backend in Backend::ALL {
            for text in texts {
                let p = score(&lexicon, text, backend);
                assert!(
                    (-1.0..=1.0).contains(&p),
                    "{:?} scored {} for {:?}",
                    backend,
                    p,
                    text
                );
            }
        }
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        let lexicon = default_valence_lexicon();
        for backend in Backend::ALL {
            assert_eq!(score(&lexicon, "the cat sat on the mat", backend), 0.0);
            assert_eq!(score(&lexicon, "", backend), 0.0);
        }
    }

    #[test]
    fn test_positive_and_negative_signs() {
        let lexicon = default_valence_lexicon();
        for backend in Backend::ALL {
            assert!(
                score(&lexicon, "what a wonderful happy day", backend) > 0.0,
                "{:?} should score positive",
                backend
            );
            assert!(
                score(&lexicon, "a terrible miserable disaster", backend) < 0.0,
                "{:?} should score negative",
                backend
            );
        }
    }

    #[test]
    fn test_rules_backend_handles_negation() {
        let lexicon = default_valence_lexicon();
        assert!(score(&lexicon, "not good", Backend::Rules) < 0.0);
        assert!(score(&lexicon, "not bad", Backend::Rules) > 0.0);
        // The plain lexicon backend ignores the negator — backends may
        // legitimately disagree on the same text.
        assert!(score(&lexicon, "not good", Backend::Lexicon) > 0.0);
    }

    #[test]
    fn test_rules_backend_intensifier_amplifies() {
        let lexicon = default_valence_lexicon();
        let plain = score(&lexicon, "good", Backend::Rules);
        let intense = score(&lexicon, "very good", Backend::Rules);
        assert!(
            intense > plain,
            "intensified ({}) should exceed plain ({})",
            intense,
            plain
        );
    }

    #[test]
    fn test_ratio_backend_counts_signs() {
        let lexicon = default_valence_lexicon();
        // two positive, one negative -> (2 - 1) / 3
        let p = score(&lexicon, "good happy bad", Backend::Ratio);
        assert!((p - 1.0 / 3.0).abs() < 1e-9, "got {}", p);
        // Ratio saturates at 1.0 for uniformly positive text
        assert_eq!(score(&lexicon, "good great happy", Backend::Ratio), 1.0);
    }
}
