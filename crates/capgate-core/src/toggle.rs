//! The toggle-state resolver.
//!
//! Each toggle has exactly two states and no intermediate one:
//!
//!   OFF ──(gate)──────────────▶ ON
//!   ON  ──(leave_gate or gate)─▶ OFF
//!
//! The entity snapshot picks the state; the gate for the edge leaving that
//! state decides availability. The two edges are gated independently, so an
//! actor may be able to confirm a contract without being able to unconfirm
//! it. Dimming is read from a separate field and never touches availability.

use serde_json::Value;
use tracing::debug;

use capgate_contracts::{
    credential::CredentialSet,
    error::Diagnostics,
    toggle::{ToggleActionSpec, ToggleDecision, ToggleVariant},
};

use crate::{entity::read_flag, evaluator::group_satisfied};

/// Resolve one toggle for one entity snapshot.
///
/// Warnings are logged and discarded. Use [`resolve_toggle_with`] to
/// collect them.
pub fn resolve_toggle(
    spec: &ToggleActionSpec,
    credentials: &CredentialSet,
    entity: &Value,
) -> ToggleDecision {
    resolve_toggle_with(spec, credentials, entity, &mut Diagnostics::new())
}

/// [`resolve_toggle`], recording warnings in `diagnostics`.
pub fn resolve_toggle_with(
    spec: &ToggleActionSpec,
    credentials: &CredentialSet,
    entity: &Value,
    diagnostics: &mut Diagnostics,
) -> ToggleDecision {
    let variant = if read_flag(&spec.id, &spec.state_field, entity, diagnostics) {
        ToggleVariant::On
    } else {
        ToggleVariant::Off
    };

    let available = group_satisfied(&spec.id, spec.gate_for(variant), credentials, diagnostics);

    let dimmed = spec
        .dim_when
        .as_ref()
        .is_some_and(|field| read_flag(&spec.id, field, entity, diagnostics));

    let (action, label, icon) = match variant {
        ToggleVariant::Off => (&spec.off_action, &spec.off_label, &spec.off_icon),
        ToggleVariant::On => (&spec.on_action, &spec.on_label, &spec.on_icon),
    };

    debug!(
        toggle = %spec.id,
        action = %action,
        available,
        dimmed,
        "toggle resolved"
    );

    ToggleDecision {
        toggle_id: spec.id.clone(),
        variant,
        action: action.clone(),
        label: label.clone(),
        icon: icon.clone(),
        available,
        dimmed,
    }
}
