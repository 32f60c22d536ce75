//! Reading toggle fields from an entity snapshot.
//!
//! Snapshots are plain JSON owned by the data layer. The resolver only reads
//! them. A field that is absent reads as false and raises a
//! `MissingEntityField` warning; a field that is present but `null` reads as
//! false without one.

use serde_json::Value;
use tracing::warn;

use capgate_contracts::{
    error::{Diagnostics, ResolutionWarning},
    toggle::EntityField,
};

/// Resolve a dot-notation path (e.g. `"status.confirmed"`) against `value`.
///
/// Object segments are looked up by key and array segments by index.
/// Returns `None` when any segment is missing. A present `null` is returned
/// as `Some(&Value::Null)`.
pub fn resolve_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Truthiness of a snapshot value.
///
/// `null`, `false`, zero and the empty string are false. Every other
/// value, including empty arrays and objects, is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read `field` from `entity` as a boolean on behalf of toggle `toggle_id`.
///
/// With `field.equals` set the result is whether the value equals it;
/// otherwise it is the value's truthiness. A missing field is false and
/// recorded in `diagnostics`.
pub fn read_flag(
    toggle_id: &str,
    field: &EntityField,
    entity: &Value,
    diagnostics: &mut Diagnostics,
) -> bool {
    let Some(value) = resolve_path(entity, &field.path) else {
        warn!(
            toggle = %toggle_id,
            field = %field.path,
            "entity snapshot lacks toggle field; treating as false"
        );
        diagnostics.push(ResolutionWarning::MissingEntityField {
            toggle: toggle_id.to_string(),
            field: field.path.clone(),
        });
        return false;
    };

    match &field.equals {
        Some(expected) => value == expected,
        None => is_truthy(value),
    }
}
