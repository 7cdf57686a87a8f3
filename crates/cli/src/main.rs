//! CLI for generating Business Model Canvases from project descriptions
//! and exporting them as PowerPoint decks.

use anyhow::{Context, Result};
use bmc_core::BusinessModelCanvas;
use bmc_pptx::DeckWriter;
use bmc_synth::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use bmc_synth::{synthesize, validate_upload, OpenAiClient};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default filename for exported decks.
const DEFAULT_DECK_FILENAME: &str = "business_model_canvas.pptx";

/// Generate a Business Model Canvas from a project description and
/// export it as a PowerPoint deck.
#[derive(Parser, Debug)]
#[command(name = "bmc-canvas")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a canvas from a plain-text project description
    Generate {
        /// Input description file (must be .txt)
        input: PathBuf,

        /// Output JSON file (default: <input stem>.bmc.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the canvas JSON to stdout instead of writing a file
        #[arg(short, long)]
        print: bool,
    },
    /// Render a canvas JSON file into a PPTX deck
    Export {
        /// Canvas JSON file: {"bmc": {...}} or the generate envelope
        input: PathBuf,

        /// Output .pptx file (default: business_model_canvas.pptx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Response envelope written by `generate`.
#[derive(Debug, Serialize, Deserialize)]
struct CanvasEnvelope {
    business_model_canvas: BusinessModelCanvas,
}

/// Request body accepted by `export`.
#[derive(Debug, Deserialize)]
struct ExportRequest {
    bmc: BusinessModelCanvas,
}

/// Either accepted shape of the `export` input file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportInput {
    Request(ExportRequest),
    Envelope(CanvasEnvelope),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Command::Generate {
            input,
            output,
            print,
        } => generate(&input, output.as_deref(), print, args.verbose),
        Command::Export { input, output } => export(&input, output.as_deref(), args.verbose),
    }
}

/// Ingress A: .txt description in, canvas JSON envelope out.
fn generate(input: &Path, output: Option<&Path>, print: bool, verbose: bool) -> Result<()> {
    let filename = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    validate_upload(filename)?;

    let description = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let client = client_from_env()?;
    if verbose {
        eprintln!("Generating canvas with model {}", client.model());
    }

    let canvas = synthesize(&client, &description)?;
    let envelope = CanvasEnvelope {
        business_model_canvas: canvas,
    };
    let json = serde_json::to_string_pretty(&envelope)?;

    if print {
        println!("{json}");
    } else {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_json_path(input));
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        if verbose {
            eprintln!("Written to: {}", path.display());
        }
    }

    Ok(())
}

/// Ingress B: canvas JSON in, PPTX deck out.
fn export(input: &Path, output: Option<&Path>, verbose: bool) -> Result<()> {
    let body = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let canvas = parse_export_input(&body)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    log::debug!("exporting canvas with {} keys", canvas.len());
    let deck = DeckWriter::new().render(&canvas)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_FILENAME));
    fs::write(&path, &deck).with_context(|| format!("Failed to write {}", path.display()))?;
    if verbose {
        eprintln!("Written to: {} ({} bytes)", path.display(), deck.len());
    }

    Ok(())
}

/// Parse the export input, accepting either request shape.
fn parse_export_input(body: &str) -> Result<BusinessModelCanvas> {
    let parsed: ExportInput = serde_json::from_str(body)?;
    Ok(match parsed {
        ExportInput::Request(request) => request.bmc,
        ExportInput::Envelope(envelope) => envelope.business_model_canvas,
    })
}

/// Default output path for `generate`: next to the input file.
fn default_json_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("canvas");
    let filename = format!("{stem}.bmc.json");

    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(filename),
        _ => PathBuf::from(filename),
    }
}

/// Build the generation client from the environment.
fn client_from_env() -> Result<OpenAiClient> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY not set (export it or put it in a .env file)")?;
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let base_url = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    Ok(OpenAiClient::new(api_key, model, base_url)?)
}
