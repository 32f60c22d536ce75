//! Boundaries to the collaborators the resolver consumes.
//!
//! - `CredentialSource`: who the actor is and what they hold
//! - `PermittedFieldsSource`: the server's allow-list of list columns
//!
//! Both are read again on every resolver call. Neither is cached here.

use std::collections::HashSet;

use capgate_contracts::{credential::CredentialSet, error::CapgateResult};

/// Supplies the current actor's credentials.
pub trait CredentialSource: Send + Sync {
    /// Return the credential set for the current request or session.
    fn credentials(&self) -> CapgateResult<CredentialSet>;
}

/// Supplies the server-approved column keys for list surfaces.
///
/// An empty set means the source has not answered yet.
pub trait PermittedFieldsSource: Send + Sync {
    fn permitted_fields(&self) -> HashSet<String>;
}

/// A credential source that always returns the same set.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub CredentialSet);

impl CredentialSource for StaticCredentials {
    fn credentials(&self) -> CapgateResult<CredentialSet> {
        Ok(self.0.clone())
    }
}

/// A permitted-fields source that always returns the same set.
#[derive(Debug, Clone, Default)]
pub struct StaticPermittedFields(pub HashSet<String>);

impl StaticPermittedFields {
    /// A source that has not loaded yet.
    pub fn not_loaded() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }
}

impl PermittedFieldsSource for StaticPermittedFields {
    fn permitted_fields(&self) -> HashSet<String> {
        self.0.clone()
    }
}
