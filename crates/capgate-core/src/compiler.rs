//! The capability set compiler.
//!
//! Folds every declaration of a [`CapabilitySchema`] into one
//! [`CompiledCapabilitySet`]:
//!
//!   ElementSpec* ─┐
//!                 ├─ evaluator ─▶ elements[id] = { visible, editable }
//!   credentials ──┤
//!                 ├─ toggle resolver ─▶ toggles[id]   (only with a snapshot)
//!   entity? ──────┘
//!
//! The compiler is a pure function of its inputs. It keeps no cache; the
//! caller may memoize on (schema, credentials, entity) because equal inputs
//! always produce equal output.

use std::collections::{btree_map::Entry, BTreeMap, HashSet};

use serde_json::Value;
use tracing::debug;

use capgate_contracts::{
    compiled::{CompiledCapabilitySet, ElementCapabilities},
    credential::CredentialSet,
    element::CapabilityKind,
    error::Diagnostics,
    schema::CapabilitySchema,
    toggle::ToggleDecision,
};

use crate::{
    evaluator::{grants, schema_integrity},
    toggle::resolve_toggle_with,
};

/// Compile `schema` for `credentials`, resolving toggles against `entity`
/// when one is supplied.
///
/// # Rules
///
/// - Each `ElementSpec` is evaluated exactly once. A spec without a rule
///   takes its `default_when_no_rule`.
/// - `visible` and `editable` are independent. A kind that no spec
///   declares for a known element stays `true`.
/// - A repeated `(id, kind)` declaration is a schema integrity violation:
///   the pair is denied and a warning is recorded.
/// - Toggles are resolved only with a snapshot. A repeated toggle id is
///   recorded as a warning and the later decision is made unavailable.
pub fn compile(
    schema: &CapabilitySchema,
    credentials: &CredentialSet,
    entity: Option<&Value>,
) -> CompiledCapabilitySet {
    let mut diagnostics = Diagnostics::new();
    let mut elements: BTreeMap<String, ElementCapabilities> = BTreeMap::new();
    let mut declared: HashSet<(&str, CapabilityKind)> = HashSet::new();

    for spec in &schema.elements {
        let mut decision = match &spec.rule {
            Some(rule) => grants(&spec.id, rule, credentials, &mut diagnostics),
            None => spec.default_when_no_rule,
        };

        if !declared.insert((spec.id.as_str(), spec.kind)) {
            schema_integrity(
                &mut diagnostics,
                &spec.id,
                &format!("duplicate '{}' declaration", spec.kind),
            );
            decision = false;
        }

        let caps = elements.entry(spec.id.clone()).or_default();
        match spec.kind {
            CapabilityKind::Visible => caps.visible &= decision,
            CapabilityKind::Editable => caps.editable &= decision,
        }
    }

    let mut toggles: BTreeMap<String, ToggleDecision> = BTreeMap::new();
    if let Some(entity) = entity {
        for spec in &schema.toggles {
            let decision = resolve_toggle_with(spec, credentials, entity, &mut diagnostics);
            match toggles.entry(spec.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(decision);
                }
                Entry::Occupied(mut slot) => {
                    schema_integrity(&mut diagnostics, &spec.id, "duplicate toggle declaration");
                    slot.insert(ToggleDecision { available: false, ..decision });
                }
            }
        }
    }

    debug!(
        schema_id = %schema.schema_id,
        version = schema.version,
        surface = %schema.surface,
        elements = elements.len(),
        toggles = toggles.len(),
        warnings = diagnostics.len(),
        "capability set compiled"
    );

    CompiledCapabilitySet::new(
        schema.schema_id.clone(),
        schema.version,
        elements,
        toggles,
        diagnostics,
    )
}
