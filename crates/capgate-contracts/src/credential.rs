//! Credential types.
//!
//! A `CredentialSet` is the actor's permission tokens for one request or
//! session. It is built once from whatever the credential source reports and
//! is never mutated afterwards; a fresher permission list means a new set.

use std::{borrow::Borrow, collections::BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{CapgateError, CapgateResult};

/// The reserved token that marks an actor as superadmin.
pub const SUPERADMIN_TOKEN: &str = "superadmin";

/// An opaque permission token.
///
/// Tokens are compared verbatim. A misspelled token simply never matches,
/// so a typo in a schema denies rather than grants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(pub String);

impl Credential {
    /// Construct a credential from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Credential {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a credential source hands over for the current actor.
///
/// This is the wire shape: `{ "permissions": [...], "is_superadmin": bool }`.
/// The camel-case `isSuperadmin` spelling is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSnapshot {
    /// Raw permission tokens granted to the actor.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Superadmin flag as asserted by the source.
    #[serde(default, alias = "isSuperadmin")]
    pub is_superadmin: bool,
}

/// The immutable permission set of the current actor.
///
/// `raw` holds exactly the tokens the source granted. `is_superadmin` is
/// true when the reserved [`SUPERADMIN_TOKEN`] is among them or when the
/// source asserted the flag directly. Only SHOW gates consult the flag;
/// HIDE gates look at `raw` alone.
///
/// Serde goes through [`CredentialSnapshot`], so a deserialized set derives
/// its flag the same way [`CredentialSet::from_snapshot`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CredentialSnapshot", into = "CredentialSnapshot")]
pub struct CredentialSet {
    raw: BTreeSet<Credential>,
    is_superadmin: bool,
}

impl CredentialSet {
    /// Build a set from raw tokens. The superadmin flag is derived from
    /// membership of the reserved token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: BTreeSet<Credential> = tokens.into_iter().map(Credential::new).collect();
        let is_superadmin = raw.contains(SUPERADMIN_TOKEN);
        Self { raw, is_superadmin }
    }

    /// Build a set from a credential source snapshot.
    pub fn from_snapshot(snapshot: CredentialSnapshot) -> Self {
        let mut set = Self::from_tokens(snapshot.permissions);
        set.is_superadmin |= snapshot.is_superadmin;
        set
    }

    /// Parse a JSON credential snapshot.
    ///
    /// Returns `CapgateError::CredentialSource` when the document is not a
    /// valid snapshot.
    pub fn from_json(s: &str) -> CapgateResult<Self> {
        let snapshot: CredentialSnapshot =
            serde_json::from_str(s).map_err(|e| CapgateError::CredentialSource {
                reason: format!("failed to parse credential snapshot: {}", e),
            })?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// True if the raw set contains `token`. The superadmin flag plays no part.
    pub fn has(&self, token: &str) -> bool {
        self.raw.contains(token)
    }

    pub fn is_superadmin(&self) -> bool {
        self.is_superadmin
    }

    /// Iterate the raw tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.raw.iter()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<CredentialSnapshot> for CredentialSet {
    fn from(snapshot: CredentialSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

impl From<CredentialSet> for CredentialSnapshot {
    fn from(set: CredentialSet) -> Self {
        Self {
            permissions: set.raw.into_iter().map(|c| c.0).collect(),
            is_superadmin: set.is_superadmin,
        }
    }
}
