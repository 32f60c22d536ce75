//! Capability schema: everything one UI surface declares.

use serde::{Deserialize, Serialize};

use crate::{column::ColumnSpec, element::ElementSpec, toggle::ToggleActionSpec};

/// The UI surface a schema is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    CreateWizard,
    EditDialog,
    ListColumns,
    ActionMenu,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CreateWizard => "create_wizard",
            Self::EditDialog => "edit_dialog",
            Self::ListColumns => "list_columns",
            Self::ActionMenu => "action_menu",
        };
        f.write_str(name)
    }
}

/// A static, versioned set of declarations for one surface.
///
/// Schemas are authored outside the resolver and passed in whole. A compiled
/// result records the `schema_id` and `version` it came from, but nothing
/// checks that the two stay paired; that is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySchema {
    /// Stable identifier, e.g. "contract-edit-dialog".
    pub schema_id: String,

    /// Monotonic schema version.
    #[serde(default)]
    pub version: u32,

    pub surface: Surface,

    #[serde(default)]
    pub elements: Vec<ElementSpec>,

    #[serde(default)]
    pub toggles: Vec<ToggleActionSpec>,

    /// List columns. Only meaningful on the `list_columns` surface.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl CapabilitySchema {
    /// An empty schema for `surface`.
    pub fn new(schema_id: impl Into<String>, version: u32, surface: Surface) -> Self {
        Self {
            schema_id: schema_id.into(),
            version,
            surface,
            elements: Vec::new(),
            toggles: Vec::new(),
            columns: Vec::new(),
        }
    }
}
