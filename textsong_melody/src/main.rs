// textsong CLI entry point.
//
// Converts a line of text into a playable MIDI melody.
// The pipeline: sentiment scoring → scale selection → tokenization →
// melody mapping → timeline → MIDI output.
//
// Usage:
//   textsong --text "The cat sat" [--output output.mid]
//     [--sentiment-model lexicon|rules|ratio] [--scale major|minor|auto]
//     [--tempo BPM]

use std::path::Path;
use std::process::ExitCode;

use textsong_lang::{TagLexicon, default_tag_lexicon};
use textsong_melody::midi::{MIN_TEMPO_BPM, write_smf};
use textsong_melody::pipeline::{PipelineConfig, render_text};
use textsong_melody::scale::ScaleKind;
use textsong_sentiment::{ValenceLexicon, default_valence_lexicon};

const DEFAULT_OUTPUT: &str = "output.mid";
const DEFAULT_BACKEND: &str = "lexicon";
const DEFAULT_TEMPO: u16 = 120;
const TRACK_NAME: &str = "TextToMusic";

#[derive(Debug)]
struct CliArgs {
    text: String,
    output_path: String,
    backend_name: String,
    scale_override: Option<ScaleKind>,
    tempo_bpm: u16,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            usage();
            return ExitCode::FAILURE;
        }
    };

    // Load models once, up front; the pipeline takes them by reference.
    // A data/ directory on disk overrides the embedded defaults.
    println!("[1/3] Loading lexicons...");
    let tag_lexicon = load_tag_lexicon();
    let valence_lexicon = load_valence_lexicon();

    println!("[2/3] Rendering melody...");
    let config = PipelineConfig {
        backend_name: cli.backend_name,
        scale_override: cli.scale_override,
        tempo_bpm: cli.tempo_bpm,
        track_name: TRACK_NAME.to_string(),
    };
    let output = match render_text(&cli.text, &tag_lexicon, &valence_lexicon, &config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("  Sentiment: {:+.2} ({})", output.polarity, config.backend_name);
    println!("  Scale: {}", output.scale.name);
    println!("  Notes: {}", output.events.len());
    if output.events.is_empty() {
        println!("  (no words found — writing an empty melody)");
    }

    println!("[3/3] Writing MIDI to {}...", cli.output_path);
    if let Err(e) = write_smf(&output.smf_bytes, Path::new(&cli.output_path)) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    println!("MIDI file saved as {}", cli.output_path);
    ExitCode::SUCCESS
}

/// Resolve and validate all flags. Any problem — missing `--text`, a flag
/// with no value, an unknown scale, an unencodable tempo — is a usage error.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let text =
        parse_flag(args, "--text")?.ok_or_else(|| "--text is required".to_string())?;
    let output_path =
        parse_flag(args, "--output")?.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let backend_name =
        parse_flag(args, "--sentiment-model")?.unwrap_or_else(|| DEFAULT_BACKEND.to_string());
    let scale_override = match parse_flag(args, "--scale")?.as_deref() {
        None | Some("auto") => None,
        Some("major") => Some(ScaleKind::Major),
        Some("minor") => Some(ScaleKind::Minor),
        Some(other) => {
            return Err(format!("unknown scale '{other}' (expected major, minor, or auto)"));
        }
    };
    let tempo_bpm = match parse_flag(args, "--tempo")? {
        None => DEFAULT_TEMPO,
        Some(raw) => match raw.parse::<u16>() {
            Ok(bpm) if bpm >= MIN_TEMPO_BPM => bpm,
            _ => {
                return Err(format!(
                    "--tempo must be an integer of at least {MIN_TEMPO_BPM} \
                     (beats per minute), got '{raw}'"
                ));
            }
        },
    };
    Ok(CliArgs {
        text,
        output_path,
        backend_name,
        scale_override,
        tempo_bpm,
    })
}

/// Look up the value following `flag`. Distinguishes a flag that was not
/// given (`Ok(None)`) from one given without a value (`Err`), so a trailing
/// `--scale` is reported instead of silently falling back to the default.
fn parse_flag(args: &[String], flag: &str) -> Result<Option<String>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.clone())),
            None => Err(format!("{flag} requires a value")),
        },
    }
}

/// Use `data/tag_lexicon.json` from disk when present, else the embedded copy.
fn load_tag_lexicon() -> TagLexicon {
    let path = Path::new("data/tag_lexicon.json");
    if path.exists() {
        match TagLexicon::load(path) {
            Ok(lexicon) => {
                println!("  Loaded tag lexicon from {}.", path.display());
                return lexicon;
            }
            Err(e) => println!("  Failed to load {}: {}. Using defaults.", path.display(), e),
        }
    }
    default_tag_lexicon()
}

/// Use `data/valence_lexicon.json` from disk when present, else the embedded copy.
fn load_valence_lexicon() -> ValenceLexicon {
    let path = Path::new("data/valence_lexicon.json");
    if path.exists() {
        match ValenceLexicon::load(path) {
            Ok(lexicon) => {
                println!("  Loaded valence lexicon from {}.", path.display());
                return lexicon;
            }
            Err(e) => println!("  Failed to load {}: {}. Using defaults.", path.display(), e),
        }
    }
    default_valence_lexicon()
}

fn usage() {
    eprintln!("Usage: textsong --text <string> [OPTIONS]");
    eprintln!("  --text <string>            Text to convert to music (required)");
    eprintln!("  --output <path>            Output MIDI filename (default: {DEFAULT_OUTPUT})");
    eprintln!("  --sentiment-model <name>   lexicon | rules | ratio (default: {DEFAULT_BACKEND})");
    eprintln!("  --scale <name>             major | minor | auto (default: auto)");
    eprintln!(
        "  --tempo <bpm>              Beats per minute, {MIN_TEMPO_BPM}-65535 \
         (default: {DEFAULT_TEMPO})"
    );
}
