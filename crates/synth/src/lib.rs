//! Canvas synthesis: turns a free-text project description into a
//! structured nine-section Business Model Canvas via a generative model.
//!
//! One blocking generation call per request, no retries. A response that
//! is not valid JSON is not an error: it degrades to a canvas carrying
//! the raw text (see [`parse`]).

pub mod client;
pub mod parse;
pub mod prompt;

use bmc_core::{BusinessModelCanvas, Error, Result};

pub use client::OpenAiClient;
pub use parse::{parse_response, SynthesisOutcome};

/// Sampling temperature for canvas generation. Low, to keep the model's
/// output close to the strict JSON shape the prompt demands.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// External text-generation collaborator.
pub trait TextGenerator {
    /// Generate a completion for `prompt` at the given sampling temperature.
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}

/// Reject uploads that are not plain-text `.txt` files.
///
/// Runs before any external call is made.
pub fn validate_upload(filename: &str) -> Result<()> {
    if filename.ends_with(".txt") {
        Ok(())
    } else {
        Err(Error::InvalidInput("Please upload a .txt file".to_string()))
    }
}

/// Synthesize a Business Model Canvas from a project description.
///
/// Makes exactly one generation call. Whatever the parse outcome, the
/// returned canvas always carries all nine canonical sections, with the
/// placeholder filled in for any the model did not produce.
pub fn synthesize<G: TextGenerator>(
    generator: &G,
    description: &str,
) -> Result<BusinessModelCanvas> {
    if description.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Project description is empty".to_string(),
        ));
    }

    let prompt = prompt::build_prompt(description);
    log::debug!("sending {} byte prompt to generator", prompt.len());

    let raw = generator.generate(&prompt, DEFAULT_TEMPERATURE)?;
    log::debug!("received {} byte completion", raw.len());

    let outcome = parse::parse_response(&raw);
    if let SynthesisOutcome::RawFallback(_) = &outcome {
        log::warn!("generation output was not valid JSON; degrading to raw_output");
    }

    Ok(outcome.into_canvas())
}
