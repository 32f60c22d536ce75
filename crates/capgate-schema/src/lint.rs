//! Load-time integrity checks for capability schemas.
//!
//! The resolver already fails closed on malformed declarations, but it only
//! notices them when a request happens to evaluate them. Running the same
//! checks once at load time surfaces them in the log before any user sees a
//! missing button.

use std::collections::HashSet;

use capgate_contracts::{
    error::ResolutionWarning,
    rule::{CredentialGroup, GateRule},
    schema::{CapabilitySchema, Surface},
};

/// Every integrity problem in `schema`, in declaration order.
///
/// Checks:
/// - empty credential groups in element rules and toggle gates
/// - unrecognized gate variants
/// - repeated `(id, kind)` element declarations
/// - repeated toggle ids and column ids
/// - columns declared on a surface other than `list_columns`
pub fn integrity_warnings(schema: &CapabilitySchema) -> Vec<ResolutionWarning> {
    let mut warnings = Vec::new();
    let mut push = |element: &str, reason: String| {
        warnings.push(ResolutionWarning::SchemaIntegrity {
            element: element.to_string(),
            reason,
        });
    };

    let mut declared = HashSet::new();
    for spec in &schema.elements {
        match &spec.rule {
            Some(GateRule::Show { any_of }) if any_of.is_empty() => {
                push(&spec.id, format!("empty credential group on '{}' rule", spec.kind));
            }
            Some(GateRule::Unrecognized) => {
                push(&spec.id, format!("unrecognized gate rule variant on '{}'", spec.kind));
            }
            _ => {}
        }
        if !declared.insert((spec.id.as_str(), spec.kind)) {
            push(&spec.id, format!("duplicate '{}' declaration", spec.kind));
        }
    }

    let mut toggle_ids = HashSet::new();
    for toggle in &schema.toggles {
        let groups: [(&str, Option<&CredentialGroup>); 2] =
            [("gate", Some(&toggle.gate)), ("leave_gate", toggle.leave_gate.as_ref())];
        for (name, group) in groups {
            if group.is_some_and(CredentialGroup::is_empty) {
                push(&toggle.id, format!("empty credential group on toggle {}", name));
            }
        }
        if !toggle_ids.insert(toggle.id.as_str()) {
            push(&toggle.id, "duplicate toggle declaration".to_string());
        }
    }

    let mut column_ids = HashSet::new();
    for column in &schema.columns {
        if schema.surface != Surface::ListColumns {
            push(
                &column.id,
                format!("column declared on '{}' surface", schema.surface),
            );
        }
        if !column_ids.insert(column.id.as_str()) {
            push(&column.id, "duplicate column declaration".to_string());
        }
    }

    warnings
}
