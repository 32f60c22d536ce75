//! List column declarations.

use serde::{Deserialize, Serialize};

/// One column of a list surface.
///
/// `permission_key` ties the column to the server-supplied permitted-fields
/// set. A column without a key is never removed by that filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column identifier. Matches the element id used for local rules.
    pub id: String,

    /// Translation key or caption for the header.
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub permission_key: Option<String>,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            permission_key: None,
        }
    }

    /// Attach a permitted-fields key.
    pub fn keyed(mut self, permission_key: impl Into<String>) -> Self {
        self.permission_key = Some(permission_key.into());
        self
    }
}
