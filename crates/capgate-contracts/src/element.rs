//! Element gate declarations.
//!
//! An element is a form field, a list column, or an action button. Each
//! element may carry up to two independent declarations, one per
//! [`CapabilityKind`].

use serde::{Deserialize, Serialize};

use crate::rule::GateRule;

/// Which capability of an element a declaration controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    Visible,
    Editable,
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visible => f.write_str("visible"),
            Self::Editable => f.write_str("editable"),
        }
    }
}

/// One gate over one capability of one element.
///
/// When `rule` is absent the capability takes `default_when_no_rule`. That
/// default is never used as a fallback for a rule that fails to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Element identifier, typically the field or column name.
    pub id: String,

    /// The capability this declaration controls.
    pub kind: CapabilityKind,

    /// The gate, if any.
    #[serde(default)]
    pub rule: Option<GateRule>,

    /// Decision used when no rule is declared.
    #[serde(default = "default_when_no_rule")]
    pub default_when_no_rule: bool,
}

fn default_when_no_rule() -> bool {
    true
}

impl ElementSpec {
    /// A gated declaration.
    pub fn gated(id: impl Into<String>, kind: CapabilityKind, rule: GateRule) -> Self {
        Self {
            id: id.into(),
            kind,
            rule: Some(rule),
            default_when_no_rule: true,
        }
    }

    /// An ungated declaration that always resolves to `default`.
    pub fn ungated(id: impl Into<String>, kind: CapabilityKind, default: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            rule: None,
            default_when_no_rule: default,
        }
    }
}
