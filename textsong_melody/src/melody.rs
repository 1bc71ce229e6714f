// Per-token musical feature assignment.
//
// Each token becomes exactly one note. The rules are deliberately simple
// and fully deterministic:
// - Pitch walks cyclically through the 8-entry scale by token index, then
//   content words get an emphasis offset: nouns jump an octave (+12),
//   verbs a perfect fifth (+7). This is word-emphasis, not voice leading.
// - Duration grows with word length (one beat per three characters),
//   clamped to 1..=4 beats so long words don't stall the melody.
// - Velocity encodes sentiment *intensity*: |polarity| scales loudness
//   from 80 to 100, independent of the major/minor mood already chosen.

use crate::error::PipelineError;
use crate::scale::{SCALE_LEN, Scale};
use serde::Serialize;
use textsong_lang::{Token, WordClass};

/// Octave offset for noun-like tokens.
const NOUN_OFFSET: i16 = 12;
/// Perfect-fifth offset for verb-like tokens.
const VERB_OFFSET: i16 = 7;

/// Duration bounds in beats.
const MIN_BEATS: usize = 1;
const MAX_BEATS: usize = 4;
/// Characters of word length per beat of duration.
const CHARS_PER_BEAT: usize = 3;

/// The musical features of one token, before timeline placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteFeature {
    /// MIDI pitch, 0-127.
    pub pitch: u8,
    /// Duration in beats, 1-4.
    pub beats: u32,
    /// MIDI velocity, 80-100.
    pub velocity: u8,
}

/// Map tokens to note features. Output length always equals input length;
/// empty input yields empty output.
pub fn map_melody(
    tokens: &[Token],
    scale: &Scale,
    polarity: f64,
) -> Result<Vec<NoteFeature>, PipelineError> {
    let velocity = velocity_for(polarity);
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let base = i16::from(scale.pitches[i % SCALE_LEN]);
            let pitch = base + class_offset(token.class);
            if !(0..=127).contains(&pitch) {
                return Err(PipelineError::PitchOutOfRange { index: i, pitch });
            }
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pitch = pitch as u8;
            Ok(NoteFeature {
                pitch,
                beats: beats_for(&token.text),
                velocity,
            })
        })
        .collect()
}

fn class_offset(class: WordClass) -> i16 {
    match class {
        WordClass::Noun => NOUN_OFFSET,
        WordClass::Verb => VERB_OFFSET,
        WordClass::Other => 0,
    }
}

/// clamp(floor(chars / 3), 1, 4) beats.
fn beats_for(text: &str) -> u32 {
    let beats = (text.chars().count() / CHARS_PER_BEAT).clamp(MIN_BEATS, MAX_BEATS);
    beats as u32
}

/// round(80 + 20 * |polarity|), always in 80..=100 for polarity in [-1, 1].
fn velocity_for(polarity: f64) -> u8 {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let velocity = (80.0 + 20.0 * polarity.abs()).round() as u8;
    velocity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{MAJOR, MINOR};

    fn tokens(words: &[(&str, WordClass)]) -> Vec<Token> {
        words.iter().map(|(w, c)| Token::new(*w, *c)).collect()
    }

    #[test]
    fn test_the_cat_sat_on_the_major_scale() {
        // "The" (other) -> 60; "cat" (noun) -> 62 + 12; "sat" (verb) -> 64 + 7.
        // All three words are 3 chars -> 1 beat; polarity 0.5 -> velocity 90.
        let tokens = tokens(&[
            ("The", WordClass::Other),
            ("cat", WordClass::Noun),
            ("sat", WordClass::Verb),
        ]);
        let features = map_melody(&tokens, &MAJOR, 0.5).unwrap();
        assert_eq!(
            features,
            vec![
                NoteFeature { pitch: 60, beats: 1, velocity: 90 },
                NoteFeature { pitch: 74, beats: 1, velocity: 90 },
                NoteFeature { pitch: 71, beats: 1, velocity: 90 },
            ]
        );
    }

    #[test]
    fn test_length_preserved_and_empty_input() {
        let many = tokens(&[("a", WordClass::Other); 20]);
        let features = map_melody(&many, &MINOR, 0.0).unwrap();
        assert_eq!(features.len(), 20);
        assert!(map_melody(&[], &MAJOR, 0.0).unwrap().is_empty());
    }

    #[test]
    fn test_scale_index_wraps_past_eight_tokens() {
        let many = tokens(&[("xx", WordClass::Other); 10]);
        let features = map_melody(&many, &MAJOR, 0.0).unwrap();
        // Token 8 wraps back to scale[0], token 9 to scale[1]
        assert_eq!(features[8].pitch, MAJOR.pitches[0]);
        assert_eq!(features[9].pitch, MAJOR.pitches[1]);
    }

    #[test]
    fn test_duration_clamped_to_one_through_four() {
        let words = tokens(&[
            ("a", WordClass::Other),                      // 1 char -> 1 beat (min)
            ("word", WordClass::Other),                   // 4 chars -> 1 beat
            ("winters", WordClass::Other),                // 7 chars -> 2 beats
            ("melancholy", WordClass::Other),             // 10 chars -> 3 beats
            ("incomprehensibilities", WordClass::Other),  // 21 chars -> 4 beats (max)
        ]);
        let beats: Vec<u32> = map_melody(&words, &MAJOR, 0.0)
            .unwrap()
            .iter()
            .map(|f| f.beats)
            .collect();
        assert_eq!(beats, vec![1, 1, 2, 3, 4]);
        for b in beats {
            assert!((1..=4).contains(&b));
        }
    }

    #[test]
    fn test_velocity_tracks_polarity_magnitude_not_sign() {
        let t = tokens(&[("cat", WordClass::Noun)]);
        assert_eq!(map_melody(&t, &MAJOR, 0.0).unwrap()[0].velocity, 80);
        assert_eq!(map_melody(&t, &MAJOR, 0.5).unwrap()[0].velocity, 90);
        assert_eq!(map_melody(&t, &MAJOR, -0.5).unwrap()[0].velocity, 90);
        assert_eq!(map_melody(&t, &MAJOR, 1.0).unwrap()[0].velocity, 100);
        assert_eq!(map_melody(&t, &MAJOR, -1.0).unwrap()[0].velocity, 100);
    }

    #[test]
    fn test_fixed_scales_never_leave_midi_range() {
        // Invariant check: highest table pitch (72) plus the octave offset
        // stays well under 127, for every class and every scale position.
        for scale in [&MAJOR, &MINOR] {
            for class in [WordClass::Noun, WordClass::Verb, WordClass::Other] {
                let t = tokens(&[("word", class); 16]);
                let features = map_melody(&t, scale, 1.0).unwrap();
                for f in features {
                    assert!(f.pitch <= 127);
                }
            }
        }
    }

    #[test]
    fn test_pitch_out_of_range_is_reported() {
        // A deliberately broken scale table triggers the invariant error.
        let broken = Scale {
            name: "broken",
            pitches: [120; SCALE_LEN],
        };
        let t = tokens(&[("cat", WordClass::Noun)]);
        let err = map_melody(&t, &broken, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::PitchOutOfRange { index: 0, pitch: 132 }
        ));
    }
}
