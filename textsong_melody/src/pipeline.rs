// The full text-to-MIDI pipeline, glued end to end.
//
// Data flows strictly left to right:
//   text -> polarity -> scale -> tokens -> note features -> timed notes -> bytes
//
// Everything here is pure given its inputs: the same text, backend, scale
// override, tempo and track name always produce byte-identical output.
// Zero tokens (empty or all-punctuation text) is a defined case, not an
// error — the result is a valid MIDI file with the requested tempo and no
// notes.

use crate::error::PipelineError;
use crate::melody::map_melody;
use crate::midi::render_smf;
use crate::scale::{Scale, ScaleKind, select_scale};
use crate::timeline::{NoteEvent, build_timeline};
use textsong_lang::TagLexicon;
use textsong_sentiment::{Backend, ValenceLexicon};

/// Everything the pipeline needs besides the text itself.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Sentiment backend identifier (resolved before tokenization).
    pub backend_name: String,
    /// Forced scale, or None to defer to the polarity sign.
    pub scale_override: Option<ScaleKind>,
    /// Beats per minute for the MIDI tempo meta-event. Must be at least
    /// `midi::MIN_TEMPO_BPM`; slower tempos cannot be encoded.
    pub tempo_bpm: u16,
    /// Track name embedded in the output file.
    pub track_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            backend_name: "lexicon".to_string(),
            scale_override: None,
            tempo_bpm: 120,
            track_name: "TextToMusic".to_string(),
        }
    }
}

/// Intermediate results worth reporting to the user, alongside the bytes.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub polarity: f64,
    pub scale: &'static Scale,
    pub events: Vec<NoteEvent>,
    pub smf_bytes: Vec<u8>,
}

/// Run the pipeline on `text`, producing SMF bytes plus the intermediate
/// results. Lexicons are loaded once by the caller and injected here.
pub fn render_text(
    text: &str,
    tag_lexicon: &TagLexicon,
    valence_lexicon: &ValenceLexicon,
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    // Backend resolution comes first: an unknown backend fails before any
    // tokenization or scoring work happens.
    let backend = Backend::from_name(&config.backend_name)?;

    let polarity = textsong_sentiment::score(valence_lexicon, text, backend);
    let scale = select_scale(polarity, config.scale_override);
    let tokens = textsong_lang::tokenize(text, tag_lexicon);
    let features = map_melody(&tokens, scale, polarity)?;
    let events = build_timeline(&features);
    let smf_bytes = render_smf(&events, config.tempo_bpm, &config.track_name)?;

    Ok(PipelineOutput {
        polarity,
        scale,
        events,
        smf_bytes,
    })
}
