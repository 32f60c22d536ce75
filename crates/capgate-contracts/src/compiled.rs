//! The compiled capability set handed to the rendering layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    element::CapabilityKind,
    error::Diagnostics,
    toggle::ToggleDecision,
};

/// Both capability decisions for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCapabilities {
    pub visible: bool,
    pub editable: bool,
}

impl ElementCapabilities {
    /// The decision for one capability kind.
    pub fn get(&self, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Visible => self.visible,
            CapabilityKind::Editable => self.editable,
        }
    }
}

impl Default for ElementCapabilities {
    fn default() -> Self {
        Self { visible: true, editable: true }
    }
}

/// Every decision for one schema, one credential set, and at most one
/// entity snapshot.
///
/// Built fresh by each compile call and never modified afterwards. When the
/// credentials or the snapshot change the caller compiles again and drops
/// the old value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledCapabilitySet {
    schema_id: String,
    version: u32,
    elements: BTreeMap<String, ElementCapabilities>,
    toggles: BTreeMap<String, ToggleDecision>,
    diagnostics: Diagnostics,
}

impl CompiledCapabilitySet {
    pub fn new(
        schema_id: impl Into<String>,
        version: u32,
        elements: BTreeMap<String, ElementCapabilities>,
        toggles: BTreeMap<String, ToggleDecision>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            schema_id: schema_id.into(),
            version,
            elements,
            toggles,
            diagnostics,
        }
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Decisions for `id`, or `None` if the schema never declared it.
    pub fn element(&self, id: &str) -> Option<ElementCapabilities> {
        self.elements.get(id).copied()
    }

    /// The decision for `(id, kind)`, or `None` for an undeclared element.
    pub fn decision(&self, id: &str, kind: CapabilityKind) -> Option<bool> {
        self.element(id).map(|caps| caps.get(kind))
    }

    /// True only for a declared element whose visible decision is true.
    pub fn is_visible(&self, id: &str) -> bool {
        self.decision(id, CapabilityKind::Visible).unwrap_or(false)
    }

    /// True only for a declared element whose editable decision is true.
    pub fn is_editable(&self, id: &str) -> bool {
        self.decision(id, CapabilityKind::Editable).unwrap_or(false)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, ElementCapabilities)> {
        self.elements.iter().map(|(id, caps)| (id.as_str(), *caps))
    }

    pub fn toggle(&self, id: &str) -> Option<&ToggleDecision> {
        self.toggles.get(id)
    }

    pub fn toggles(&self) -> impl Iterator<Item = &ToggleDecision> {
        self.toggles.values()
    }

    /// Warnings raised while compiling.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
