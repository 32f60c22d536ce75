//! Gate rule types.
//!
//! Two gate semantics exist and they are deliberately asymmetric:
//!
//! - `Show` grants a capability when the actor holds any token of its group.
//!   A superadmin passes every SHOW gate.
//! - `Hide` revokes a capability when the actor's raw set holds its token.
//!   Superadmin status does not protect against a HIDE gate.

use serde::{Deserialize, Serialize};

use crate::{
    credential::Credential,
    error::{CapgateError, CapgateResult},
};

/// An ordered "any of" list of alternative tokens.
///
/// Must never be empty. [`CredentialGroup::new`] enforces that; a group that
/// arrives empty through deserialization is accepted here and fails closed
/// when evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialGroup(Vec<Credential>);

impl CredentialGroup {
    /// Build a group from one or more tokens.
    ///
    /// Returns `CapgateError::InvalidSchema` for an empty list.
    pub fn new<I, S>(tokens: I) -> CapgateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<Credential> = tokens.into_iter().map(Credential::new).collect();
        if tokens.is_empty() {
            return Err(CapgateError::InvalidSchema {
                reason: "a credential group must list at least one token".to_string(),
            });
        }
        Ok(Self(tokens))
    }

    /// The alternative tokens, in declaration order.
    pub fn tokens(&self) -> &[Credential] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single gate over one capability of one element.
///
/// Serialized with an internal `gate` tag:
///
/// ```toml
/// rule = { gate = "show", any_of = ["superadmin", "admin", "contract_modify"] }
/// rule = { gate = "hide", token = "contract_new_reference_remove" }
/// ```
///
/// Any other tag deserializes to `Unrecognized`, which always denies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum GateRule {
    /// Granted iff the group is satisfied. Superadmin bypasses.
    Show { any_of: CredentialGroup },

    /// Revoked iff `token` is in the raw set. No superadmin bypass.
    Hide { token: Credential },

    /// A gate tag this build does not know.
    #[serde(other)]
    Unrecognized,
}

impl GateRule {
    /// A SHOW gate over the given alternatives.
    pub fn show(any_of: CredentialGroup) -> Self {
        Self::Show { any_of }
    }

    /// A HIDE gate keyed on a single token.
    pub fn hide(token: impl Into<String>) -> Self {
        Self::Hide { token: Credential::new(token) }
    }

    /// Short label used in log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::Hide { .. } => "hide",
            Self::Unrecognized => "unrecognized",
        }
    }
}
