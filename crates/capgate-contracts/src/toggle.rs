//! Toggle action types.
//!
//! A toggle is a pair of mutually exclusive actions, such as confirm and
//! unconfirm, of which exactly one applies to a given entity. Which one is
//! decided by the entity's current state; whether it may be used is decided
//! by the actor's credentials. Entering and leaving the ON state are gated
//! separately.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::CredentialGroup;

/// A reference to a boolean or enum field of an entity snapshot.
///
/// `path` uses dot notation (`"status.confirmed"`). With `equals` set, the
/// field reads as true only when it equals that value, which is how enum
/// fields are mapped onto the two toggle states.
///
/// In TOML either form is accepted:
///
/// ```toml
/// state_field = "is_confirmed"
/// state_field = { path = "status", equals = "confirmed" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntityFieldDecl")]
pub struct EntityField {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<Value>,
}

impl EntityField {
    /// A field read by truthiness.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), equals: None }
    }

    /// A field that reads as true when it equals `value`.
    pub fn equals(path: impl Into<String>, value: Value) -> Self {
        Self { path: path.into(), equals: Some(value) }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntityFieldDecl {
    Path(String),
    Full {
        path: String,
        #[serde(default)]
        equals: Option<Value>,
    },
}

impl From<EntityFieldDecl> for EntityField {
    fn from(decl: EntityFieldDecl) -> Self {
        match decl {
            EntityFieldDecl::Path(path) => Self { path, equals: None },
            EntityFieldDecl::Full { path, equals } => Self { path, equals },
        }
    }
}

/// Declaration of one toggle action pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleActionSpec {
    /// Toggle identifier, e.g. "confirmation".
    pub id: String,

    /// Action offered while the state field is false, e.g. "confirm".
    pub off_action: String,
    /// Action offered while the state field is true, e.g. "unconfirm".
    pub on_action: String,

    pub off_label: String,
    pub on_label: String,

    #[serde(default)]
    pub off_icon: Option<String>,
    #[serde(default)]
    pub on_icon: Option<String>,

    /// The entity field that selects between the two actions.
    pub state_field: EntityField,

    /// SHOW gate for entering the ON state.
    pub gate: CredentialGroup,

    /// SHOW gate for leaving the ON state. Falls back to `gate` when absent.
    #[serde(default)]
    pub leave_gate: Option<CredentialGroup>,

    /// Entity field that marks the action as discouraged.
    #[serde(default)]
    pub dim_when: Option<EntityField>,
}

impl ToggleActionSpec {
    /// The gate that applies in the given state.
    pub fn gate_for(&self, variant: ToggleVariant) -> &CredentialGroup {
        match variant {
            ToggleVariant::Off => &self.gate,
            ToggleVariant::On => self.leave_gate.as_ref().unwrap_or(&self.gate),
        }
    }
}

/// Which half of a toggle applies. Named after the entity state, so `Off`
/// means the entity is currently off and the offered action turns it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleVariant {
    Off,
    On,
}

/// The resolved state of one toggle for one entity.
///
/// `dimmed` is a presentation hint only. A dimmed action that is
/// `available` must stay invokable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDecision {
    pub toggle_id: String,
    pub variant: ToggleVariant,
    /// The applicable action id.
    pub action: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub available: bool,
    pub dimmed: bool,
}
