// textsong: sentiment-driven text-to-melody MIDI generator.
//
// Turns a line of text into a short monophonic melody. The overall
// sentiment of the text picks the scale (major for favorable, minor for
// unfavorable) and drives loudness; each word becomes one note whose pitch
// follows the scale with content-word emphasis and whose duration follows
// word length.
//
// Architecture:
// - scale.rs: the two fixed 8-pitch scale tables + polarity-based selection
// - melody.rs: per-token pitch/duration/velocity assignment
// - timeline.rs: absolute-time placement (contiguous monophonic timeline)
// - midi.rs: SMF serialization via midly
// - pipeline.rs: end-to-end glue, pure and byte-deterministic
// - error.rs: the failure taxonomy surfaced to the CLI
//
// Tokenization lives in `textsong_lang`, sentiment scoring in
// `textsong_sentiment`; both models are loaded once in main and injected.

pub mod error;
pub mod melody;
pub mod midi;
pub mod pipeline;
pub mod scale;
pub mod timeline;

pub use error::PipelineError;
pub use pipeline::{PipelineConfig, PipelineOutput, render_text};
