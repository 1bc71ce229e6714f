// Whitespace tokenizer with punctuation stripping.
//
// Splits on Unicode whitespace, trims punctuation from both ends of each
// word, drops anything left empty (a lone "—" or "..."), and classifies
// what remains. Inner punctuation is kept ("don't" stays one token), so
// word length — which drives note duration downstream — reflects the word
// as written.

use crate::TagLexicon;
use crate::tagger::classify;
use crate::types::Token;

/// Split `text` into classified tokens, in input order.
///
/// Empty or all-punctuation input yields an empty vector; that is a valid
/// result, not an error.
pub fn tokenize(text: &str, lexicon: &TagLexicon) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                return None;
            }
            Some(Token::new(word, classify(lexicon, word)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_tag_lexicon;
    use crate::types::WordClass;

    #[test]
    fn test_tokenize_simple_sentence() {
        let lexicon = default_tag_lexicon();
        let tokens = tokenize("The cat sat", &lexicon);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "The");
        assert_eq!(tokens[0].class, WordClass::Other);
        assert_eq!(tokens[1].text, "cat");
        assert_eq!(tokens[1].class, WordClass::Noun);
        assert_eq!(tokens[2].text, "sat");
        assert_eq!(tokens[2].class, WordClass::Verb);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let lexicon = default_tag_lexicon();
        let tokens = tokenize("Stop! The cat, (again).", &lexicon);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Stop", "The", "cat", "again"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_apostrophe() {
        let lexicon = default_tag_lexicon();
        let tokens = tokenize("don't stop", &lexicon);
        assert_eq!(tokens[0].text, "don't");
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        let lexicon = default_tag_lexicon();
        assert!(tokenize("", &lexicon).is_empty());
        assert!(tokenize("   ", &lexicon).is_empty());
        assert!(tokenize("... — !!", &lexicon).is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let lexicon = default_tag_lexicon();
        let tokens = tokenize("bird saw fish", &lexicon);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["bird", "saw", "fish"]);
    }
}
