//! TOML-declared capability schemas.
//!
//! `TomlSchema` parses one surface's declarations from a TOML document and
//! runs the integrity lint over them. Lint findings are logged, not
//! returned as errors; the resolver denies whatever they affect.
//!
//! Document layout:
//!
//! ```toml
//! schema_id = "contract-edit-dialog"
//! version = 3
//! surface = "edit_dialog"
//!
//! [[elements]]
//! id = "reference"
//! kind = "visible"
//! rule = { gate = "hide", token = "contract_new_reference_remove" }
//!
//! [[toggles]]
//! id = "confirmation"
//! off_action = "confirm"
//! on_action = "unconfirm"
//! off_label = "actionConfirm"
//! on_label = "actionUnconfirm"
//! state_field = "is_confirmed"
//! gate = ["contract_list_confirmed"]
//! leave_gate = ["contract_list_unconfirmed"]
//! dim_when = "is_hold"
//! ```

use std::path::Path;

use tracing::{debug, warn};

use capgate_contracts::{
    error::{CapgateError, CapgateResult, ResolutionWarning},
    schema::CapabilitySchema,
};

use crate::lint::integrity_warnings;

/// A capability schema loaded from TOML, with its lint findings.
#[derive(Debug, Clone)]
pub struct TomlSchema {
    schema: CapabilitySchema,
    warnings: Vec<ResolutionWarning>,
}

impl TomlSchema {
    /// Parse `s` as TOML and build a `TomlSchema`.
    ///
    /// Returns `CapgateError::ConfigError` if the TOML is malformed or does
    /// not match the `CapabilitySchema` layout.
    pub fn from_toml_str(s: &str) -> CapgateResult<Self> {
        let schema: CapabilitySchema = toml::from_str(s).map_err(|e| CapgateError::ConfigError {
            reason: format!("failed to parse schema TOML: {}", e),
        })?;
        Ok(Self::from_schema(schema))
    }

    /// Read the file at `path` and parse it as a TOML schema.
    pub fn from_file(path: &Path) -> CapgateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CapgateError::ConfigError {
            reason: format!("failed to read schema file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Lint an already-built schema.
    pub fn from_schema(schema: CapabilitySchema) -> Self {
        let warnings = integrity_warnings(&schema);
        for warning in &warnings {
            warn!(schema_id = %schema.schema_id, %warning, "schema failed integrity lint");
        }
        debug!(
            schema_id = %schema.schema_id,
            version = schema.version,
            surface = %schema.surface,
            elements = schema.elements.len(),
            toggles = schema.toggles.len(),
            columns = schema.columns.len(),
            "schema loaded"
        );
        Self { schema, warnings }
    }

    pub fn schema(&self) -> &CapabilitySchema {
        &self.schema
    }

    pub fn into_schema(self) -> CapabilitySchema {
        self.schema
    }

    /// Integrity findings from load time.
    pub fn warnings(&self) -> &[ResolutionWarning] {
        &self.warnings
    }
}
