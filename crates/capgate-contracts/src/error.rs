//! Error and warning types for capgate.
//!
//! `CapgateError` covers the few operations that can fail outright: loading
//! configuration, parsing credential or entity documents, and building
//! schema values through checked constructors.
//!
//! `ResolutionWarning` covers problems found while resolving capabilities.
//! Those never abort resolution: the affected decision fails closed and the
//! warning is handed back to the caller alongside the result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unified error type for capgate.
#[derive(Debug, Error)]
pub enum CapgateError {
    /// A schema document is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A checked constructor rejected a schema value.
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// The credential source could not supply a credential set.
    #[error("credential source error: {reason}")]
    CredentialSource { reason: String },

    /// An entity snapshot could not be parsed.
    #[error("entity parse error: {reason}")]
    EntityParse { reason: String },
}

/// Convenience alias used throughout the capgate crates.
pub type CapgateResult<T> = Result<T, CapgateError>;

/// A non-fatal finding raised while resolving capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionWarning {
    /// The schema breaks one of its own invariants (empty credential group,
    /// unrecognized gate, duplicate declaration). The decision was denied.
    #[error("schema integrity warning on '{element}': {reason}")]
    SchemaIntegrity { element: String, reason: String },

    /// A toggle references an entity field the snapshot does not carry.
    /// The field was read as falsy.
    #[error("toggle '{toggle}' references missing entity field '{field}'")]
    MissingEntityField { toggle: String, field: String },
}

/// Warnings collected during one resolution call, in the order raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    warnings: Vec<ResolutionWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one warning.
    pub fn push(&mut self, warning: ResolutionWarning) {
        self.warnings.push(warning);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolutionWarning> {
        self.warnings.iter()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Move every warning from `other` into `self`.
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }
}
