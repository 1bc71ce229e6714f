// Scale tables and polarity-based selection.
//
// Two fixed 8-pitch scales, both rooted at middle C (MIDI 60) and spanning
// one octave to C5 (72). Favorable text gets the major scale, unfavorable
// the natural minor. These are the only scales the generator knows — mood
// is encoded entirely by this binary choice plus velocity.

use serde::Serialize;

/// Number of pitches in a scale table. Token index wraps through this.
pub const SCALE_LEN: usize = 8;

/// A fixed 8-pitch scale (MIDI note numbers, ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub name: &'static str,
    pub pitches: [u8; SCALE_LEN],
}

/// C major: C D E F G A B C.
pub const MAJOR: Scale = Scale {
    name: "major",
    pitches: [60, 62, 64, 65, 67, 69, 71, 72],
};

/// C natural minor: C D Eb F G Ab Bb C.
pub const MINOR: Scale = Scale {
    name: "minor",
    pitches: [60, 62, 63, 65, 67, 68, 70, 72],
};

/// An explicit scale override from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Major,
    Minor,
}

impl ScaleKind {
    pub fn scale(self) -> &'static Scale {
        match self {
            ScaleKind::Major => &MAJOR,
            ScaleKind::Minor => &MINOR,
        }
    }
}

/// Pick the scale for a polarity score, unless an override forces one.
///
/// Exactly 0 counts as major — the test is non-negative, not strictly
/// positive, so neutral text sounds major.
pub fn select_scale(polarity: f64, forced: Option<ScaleKind>) -> &'static Scale {
    match forced {
        Some(kind) => kind.scale(),
        None if polarity >= 0.0 => &MAJOR,
        None => &MINOR,
    }
}
