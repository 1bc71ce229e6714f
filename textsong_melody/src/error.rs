// Pipeline error taxonomy.
//
// Every failure surfaces to the CLI layer; nothing is swallowed or retried.
// Empty input is deliberately NOT an error — zero tokens produce a valid
// zero-note file (see pipeline.rs).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Requested sentiment backend not recognized. Raised before any
    /// tokenization happens.
    #[error(transparent)]
    UnknownBackend(#[from] textsong_sentiment::UnknownBackend),

    /// A mapped pitch left the MIDI 0-127 range. The fixed scale tables
    /// top out at 72 and the largest offset is +12, so this indicates a
    /// logic defect, not bad input.
    #[error("note {index} maps to pitch {pitch}, outside the MIDI range 0-127")]
    PitchOutOfRange { index: usize, pitch: i16 },

    /// The requested tempo does not fit the 24-bit tempo meta-event.
    /// Microseconds per beat is 60_000_000 / bpm, so anything below 4 BPM
    /// (including 0) is unrepresentable.
    #[error("tempo {bpm} BPM cannot be encoded (minimum 4 BPM)")]
    TempoOutOfRange { bpm: u16 },

    /// Serializing the MIDI data itself failed. Unreachable for an
    /// in-memory buffer in practice, but propagated rather than unwrapped.
    #[error("failed to encode MIDI data: {0}")]
    MidiEncode(#[source] io::Error),

    /// The destination file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
