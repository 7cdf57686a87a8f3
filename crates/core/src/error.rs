//! Error types for canvas synthesis and deck rendering.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synthesizing a canvas or rendering a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read from or write to a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request was rejected before any work was done.
    #[error("{0}")]
    InvalidInput(String),

    /// The external text-generation service failed or was unreachable.
    #[error("Text generation failed: {0}")]
    Upstream(String),

    /// ZIP container error while assembling the deck.
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation error while assembling the deck.
    #[error("XML error: {0}")]
    Xml(String),

    /// Any other failure while constructing the deck document.
    #[error("Render error: {0}")]
    Render(String),
}
