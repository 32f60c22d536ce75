//! The resolver: compile entry points bound to live sources.
//!
//! `Resolver` wires a [`CredentialSource`] and a [`PermittedFieldsSource`]
//! to the pure functions of this crate. Every call reads the sources again
//! and returns a freshly built result, so a caller that wants fresher
//! decisions simply calls again and drops the stale value.

use serde_json::Value;
use tracing::debug;

use capgate_contracts::{
    column::ColumnSpec,
    compiled::CompiledCapabilitySet,
    error::CapgateResult,
    schema::CapabilitySchema,
    toggle::{ToggleActionSpec, ToggleDecision},
};

use crate::{
    compiler::compile,
    filter::visible_columns,
    toggle::resolve_toggle,
    traits::{CredentialSource, PermittedFieldsSource, StaticPermittedFields},
};

/// Binds capability resolution to the actor's credential source and the
/// server's permitted-fields source.
pub struct Resolver {
    credentials: Box<dyn CredentialSource>,
    permitted: Box<dyn PermittedFieldsSource>,
}

impl Resolver {
    pub fn new(
        credentials: Box<dyn CredentialSource>,
        permitted: Box<dyn PermittedFieldsSource>,
    ) -> Self {
        Self { credentials, permitted }
    }

    /// A resolver for surfaces that have no permitted-fields source.
    pub fn with_credentials(credentials: Box<dyn CredentialSource>) -> Self {
        Self::new(credentials, Box::new(StaticPermittedFields::not_loaded()))
    }

    /// Compile `schema` with the current credentials.
    ///
    /// # Errors
    ///
    /// Only a failing credential source produces an error. Schema problems
    /// are reported through the compiled set's diagnostics.
    pub fn compile(
        &self,
        schema: &CapabilitySchema,
        entity: Option<&Value>,
    ) -> CapgateResult<CompiledCapabilitySet> {
        let credentials = self.credentials.credentials()?;
        debug!(
            schema_id = %schema.schema_id,
            surface = %schema.surface,
            credentials = credentials.len(),
            superadmin = credentials.is_superadmin(),
            "compiling surface"
        );
        Ok(compile(schema, &credentials, entity))
    }

    /// Resolve a single toggle with the current credentials.
    pub fn resolve_toggle(
        &self,
        spec: &ToggleActionSpec,
        entity: &Value,
    ) -> CapgateResult<ToggleDecision> {
        let credentials = self.credentials.credentials()?;
        Ok(resolve_toggle(spec, &credentials, entity))
    }

    /// The columns of `schema` that pass both the permitted-fields filter
    /// and the schema's local visibility rules.
    pub fn columns(&self, schema: &CapabilitySchema) -> CapgateResult<Vec<ColumnSpec>> {
        let compiled = self.compile(schema, None)?;
        let permitted = self.permitted.permitted_fields();
        let columns = visible_columns(&schema.columns, &permitted, &compiled);

        debug!(
            schema_id = %schema.schema_id,
            permitted = permitted.len(),
            declared = schema.columns.len(),
            shown = columns.len(),
            "list columns resolved"
        );

        Ok(columns)
    }
}
