// MIDI output: note events to a Standard MIDI File.
//
// Serializes the timed note sequence as SMF format 0: a single track
// carrying the track name, the tempo meta-event at tick 0, and one
// NoteOn/NoteOff pair per event on channel 0. Beats map to MIDI ticks at
// 480 ticks per quarter note. Zero events still produce a structurally
// valid file (name + tempo + end-of-track).
//
// Uses the `midly` crate for MIDI writing.

use crate::error::PipelineError;
use crate::timeline::NoteEvent;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note in MIDI output. One beat = one quarter note.
pub const TICKS_PER_BEAT: u32 = 480;

/// Lowest encodable tempo. The tempo meta-event stores microseconds per
/// beat in 24 bits (max 16_777_215): 60_000_000 / 4 fits, 60_000_000 / 3
/// does not, and midly's `u24::new` would silently mask the overflow.
pub const MIN_TEMPO_BPM: u16 = 4;

/// All notes go on one channel — the melody is monophonic.
const CHANNEL: u8 = 0;

/// Render events to SMF bytes. Pure: identical input yields identical bytes.
/// Tempos below [`MIN_TEMPO_BPM`] are rejected up front rather than written
/// truncated.
pub fn render_smf(
    events: &[NoteEvent],
    tempo_bpm: u16,
    track_name: &str,
) -> Result<Vec<u8>, PipelineError> {
    if tempo_bpm < MIN_TEMPO_BPM {
        return Err(PipelineError::TempoOutOfRange { bpm: tempo_bpm });
    }
    let smf = events_to_smf(events, tempo_bpm, track_name);
    let mut buf = Vec::new();
    smf.write_std(&mut buf).map_err(PipelineError::MidiEncode)?;
    Ok(buf)
}

/// Write rendered SMF bytes to a file. The write is not retried; a failure
/// surfaces with the destination path and the underlying I/O cause. The file
/// handle is scoped inside `fs::write`, so it closes on every exit path.
pub fn write_smf(bytes: &[u8], path: &Path) -> Result<(), PipelineError> {
    std::fs::write(path, bytes).map_err(|source| PipelineError::SinkWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the in-memory SMF: one track, fixed channel, delta times derived
/// from the contiguous beat timeline.
fn events_to_smf<'a>(events: &[NoteEvent], tempo_bpm: u16, track_name: &'a str) -> Smf<'a> {
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_BEAT as u16)),
    ));

    let mut track: Track<'a> = Vec::new();
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(track_name.as_bytes())),
    });
    let tempo_microseconds = 60_000_000 / u32::from(tempo_bpm);
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds))),
    });

    // Timelines from build_timeline are contiguous, so each NoteOn lands
    // exactly where the previous NoteOff ended (delta 0) and each NoteOff
    // follows its NoteOn by the note's duration. A gap is a valid positive
    // delta; an overlapping input clamps the NoteOn to the previous note's
    // end instead of underflowing.
    let mut last_event_tick: u32 = 0;
    for event in events {
        let on_tick = event.start_beat * TICKS_PER_BEAT;
        let off_tick = on_tick + event.beats * TICKS_PER_BEAT;
        track.push(TrackEvent {
            delta: u28::new(on_tick.saturating_sub(last_event_tick)),
            kind: TrackEventKind::Midi {
                channel: u4::new(CHANNEL),
                message: MidiMessage::NoteOn {
                    key: u7::new(event.pitch),
                    vel: u7::new(event.velocity),
                },
            },
        });
        track.push(TrackEvent {
            delta: u28::new(off_tick - on_tick),
            kind: TrackEventKind::Midi {
                channel: u4::new(CHANNEL),
                message: MidiMessage::NoteOff {
                    key: u7::new(event.pitch),
                    vel: u7::new(0),
                },
            },
        });
        last_event_tick = off_tick;
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);
    smf
}
