//! Cross-cutting error types for Mural.
//!
//! Transport errors live in `mural-client` and configuration errors in
//! `mural-config`. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Mural crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A facet value typed by the user matched no known token.
    #[error("unknown {facet} '{value}' (expected one of: {expected})")]
    UnknownFacetValue {
        facet: &'static str,
        value: String,
        expected: &'static str,
    },
}
