//! PPTX (Office Open XML) deck writer for the Business Model Canvas.
//!
//! Produces .pptx files, which are ZIP archives containing XML documents.
//! One render call builds one single-slide deck: a title box plus nine
//! colored, labeled blocks in a fixed grid.

pub mod layout;
pub mod parts;
pub mod writer;

pub use writer::DeckWriter;
