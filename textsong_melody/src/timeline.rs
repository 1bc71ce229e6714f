// Timeline building: per-token features to absolute start times.
//
// The melody is strictly monophonic: each note starts exactly where the
// previous one ended. Expressed as a scan over the feature sequence so the
// running time accumulator never leaks to callers.

use crate::melody::NoteFeature;
use serde::Serialize;

/// One placed note: a feature plus its absolute start beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteEvent {
    /// MIDI pitch, 0-127.
    pub pitch: u8,
    /// Absolute start time in beats from the beginning of the piece.
    pub start_beat: u32,
    /// Duration in beats, 1-4.
    pub beats: u32,
    /// MIDI velocity, 80-100.
    pub velocity: u8,
}

/// Place features on a contiguous timeline starting at beat 0.
///
/// Guarantees: `start_beat[0] == 0` and
/// `start_beat[i + 1] == start_beat[i] + beats[i]` — contiguous,
/// non-overlapping, in input order.
pub fn build_timeline(features: &[NoteFeature]) -> Vec<NoteEvent> {
    features
        .iter()
        .scan(0u32, |clock, feature| {
            let start_beat = *clock;
            *clock += feature.beats;
            Some(NoteEvent {
                pitch: feature.pitch,
                start_beat,
                beats: feature.beats,
                velocity: feature.velocity,
            })
        })
        .collect()
}
