//! Core domain types for the Business Model Canvas: the nine canonical
//! sections, the string-or-list block content union, and the shared
//! error type.

pub mod canvas;
pub mod error;

pub use canvas::{BlockContent, BusinessModelCanvas, Section, PLACEHOLDER};
pub use error::{Error, Result};
