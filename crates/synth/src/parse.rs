//! Defensive parsing of generation output.
//!
//! Models asked for "JSON only" still wrap the object in prose or code
//! fences often enough that parse failure must not fail the request: the
//! raw text is preserved instead, and the caller still gets a canvas.

use bmc_core::{BlockContent, BusinessModelCanvas};
use std::collections::BTreeMap;

/// Key under which unparseable generation output is preserved.
pub const RAW_OUTPUT_KEY: &str = "raw_output";

/// Outcome of parsing a generation response.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisOutcome {
    /// The response parsed as a canvas mapping.
    Structured(BusinessModelCanvas),
    /// The response was not valid JSON; the trimmed raw text is kept.
    RawFallback(String),
}

impl SynthesisOutcome {
    /// Convert the outcome into a canvas with all nine sections present.
    ///
    /// `RawFallback` becomes a canvas whose only authored key is
    /// [`RAW_OUTPUT_KEY`]; both variants are then backfilled with the
    /// placeholder for every missing canonical section.
    pub fn into_canvas(self) -> BusinessModelCanvas {
        let mut canvas = match self {
            SynthesisOutcome::Structured(canvas) => canvas,
            SynthesisOutcome::RawFallback(raw) => {
                let mut canvas = BusinessModelCanvas::new();
                canvas.insert(RAW_OUTPUT_KEY, raw);
                canvas
            }
        };
        canvas.backfill_sections();
        canvas
    }
}

/// Parse raw generation output into a structured canvas if possible.
pub fn parse_response(raw: &str) -> SynthesisOutcome {
    let trimmed = raw.trim();

    if let Some(canvas) = try_parse_object(trimmed) {
        return SynthesisOutcome::Structured(canvas);
    }

    // Rescue a JSON object embedded in surrounding prose or code fences.
    if let Some(inner) = extract_json_object(trimmed) {
        if let Some(canvas) = try_parse_object(inner) {
            return SynthesisOutcome::Structured(canvas);
        }
    }

    SynthesisOutcome::RawFallback(trimmed.to_string())
}

fn try_parse_object(text: &str) -> Option<BusinessModelCanvas> {
    serde_json::from_str::<BTreeMap<String, BlockContent>>(text)
        .ok()
        .map(BusinessModelCanvas::from)
}

/// Extract the outermost `{...}` substring from raw output.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}
