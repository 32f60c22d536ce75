//! # capgate-schema
//!
//! TOML-declared capability schemas for the capgate resolver.
//!
//! ## Overview
//!
//! Each UI surface (create wizard, edit dialog, list columns, action menu)
//! declares its gates in one TOML document. [`TomlSchema`] parses a
//! document and lints it; [`SchemaCatalog`] holds a directory of them.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use capgate_schema::TomlSchema;
//!
//! let schema = TomlSchema::from_file(Path::new("schemas/contract_edit_dialog.toml"))?;
//! let compiled = capgate_core::compile(schema.schema(), &credentials, Some(&entity));
//! ```
//!
//! ## Gate syntax
//!
//! `rule = { gate = "show", any_of = [...] }` grants when any token is held
//! (superadmin always passes). `rule = { gate = "hide", token = "..." }`
//! revokes when the token is held, superadmin or not.

pub mod catalog;
pub mod lint;
pub mod loader;

pub use catalog::SchemaCatalog;
pub use lint::integrity_warnings;
pub use loader::TomlSchema;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use capgate_contracts::{
        credential::CredentialSet,
        element::CapabilityKind,
        error::{CapgateError, ResolutionWarning},
        rule::GateRule,
        schema::Surface,
        toggle::EntityField,
    };

    use crate::{SchemaCatalog, TomlSchema};

    fn reasons(schema: &TomlSchema) -> Vec<String> {
        schema
            .warnings()
            .iter()
            .map(|w| match w {
                ResolutionWarning::SchemaIntegrity { element, reason } => {
                    format!("{element}: {reason}")
                }
                other => panic!("unexpected warning {:?}", other),
            })
            .collect()
    }

    // ── 1. parsing ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_elements_and_toggles() {
        let toml = r#"
            schema_id = "contract-edit"
            version = 4
            surface = "edit_dialog"

            [[elements]]
            id = "customer"
            kind = "visible"
            rule = { gate = "show", any_of = ["superadmin", "admin", "contract_modify"] }

            [[elements]]
            id = "reference"
            kind = "visible"
            rule = { gate = "hide", token = "contract_new_reference_remove" }

            [[elements]]
            id = "notes"
            kind = "editable"
            default_when_no_rule = false

            [[toggles]]
            id = "confirmation"
            off_action = "confirm"
            on_action = "unconfirm"
            off_label = "actionConfirm"
            on_label = "actionUnconfirm"
            state_field = "is_confirmed"
            gate = ["contract_list_confirmed"]
            leave_gate = ["contract_list_unconfirmed"]
            dim_when = { path = "status", equals = "hold" }
        "#;

        let loaded = TomlSchema::from_toml_str(toml).unwrap();
        let schema = loaded.schema();

        assert!(loaded.warnings().is_empty());
        assert_eq!(schema.version, 4);
        assert_eq!(schema.surface, Surface::EditDialog);
        assert_eq!(schema.elements.len(), 3);
        assert_eq!(
            schema.elements[1].rule,
            Some(GateRule::hide("contract_new_reference_remove"))
        );
        assert_eq!(schema.elements[2].kind, CapabilityKind::Editable);
        assert!(schema.elements[2].rule.is_none());
        assert!(!schema.elements[2].default_when_no_rule);

        let toggle = &schema.toggles[0];
        assert_eq!(toggle.state_field, EntityField::new("is_confirmed"));
        assert_eq!(toggle.dim_when, Some(EntityField::equals("status", json!("hold"))));
        assert_eq!(toggle.leave_gate.as_ref().unwrap().tokens()[0].as_str(), "contract_list_unconfirmed");
    }

    #[test]
    fn test_parse_columns() {
        let toml = r#"
            schema_id = "contract-list"
            surface = "list_columns"

            [[columns]]
            id = "reference"
            label = "reference"

            [[columns]]
            id = "customer_phone"
            label = "customerPhone"
            permission_key = "customer_phone"
        "#;

        let loaded = TomlSchema::from_toml_str(toml).unwrap();
        let schema = loaded.into_schema();
        assert_eq!(schema.version, 0);
        assert_eq!(schema.columns[0].permission_key, None);
        assert_eq!(schema.columns[1].permission_key.as_deref(), Some("customer_phone"));
    }

    // ── 2. parse errors ───────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        match TomlSchema::from_toml_str("this is not valid toml ][[[") {
            Err(CapgateError::ConfigError { reason }) => {
                assert!(reason.contains("failed to parse schema TOML"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_surface_is_config_error() {
        let toml = r#"
            schema_id = "x"
            surface = "sidebar"
        "#;
        assert!(matches!(
            TomlSchema::from_toml_str(toml),
            Err(CapgateError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        match TomlSchema::from_file(Path::new("/nonexistent/schema.toml")) {
            Err(CapgateError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read schema file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 3. integrity lint ─────────────────────────────────────────────────────

    #[test]
    fn test_lint_flags_malformed_declarations() {
        let toml = r#"
            schema_id = "broken"
            surface = "edit_dialog"

            [[elements]]
            id = "customer"
            kind = "visible"
            rule = { gate = "show", any_of = [] }

            [[elements]]
            id = "site"
            kind = "editable"
            rule = { gate = "require_mfa", token = "x" }

            [[elements]]
            id = "site"
            kind = "editable"

            [[toggles]]
            id = "hold"
            off_action = "hold"
            on_action = "unhold"
            off_label = "actionHold"
            on_label = "actionUnhold"
            state_field = "is_hold"
            gate = []

            [[columns]]
            id = "price"
        "#;

        let loaded = TomlSchema::from_toml_str(toml).unwrap();
        let found = reasons(&loaded);

        assert_eq!(
            found,
            vec![
                "customer: empty credential group on 'visible' rule",
                "site: unrecognized gate rule variant on 'editable'",
                "site: duplicate 'editable' declaration",
                "hold: empty credential group on toggle gate",
                "price: column declared on 'edit_dialog' surface",
            ]
        );
    }

    /// Lint findings do not stop the schema from compiling; the affected
    /// capabilities are simply denied.
    #[test]
    fn test_linted_schema_still_compiles_fail_closed() {
        let toml = r#"
            schema_id = "broken"
            surface = "create_wizard"

            [[elements]]
            id = "customer"
            kind = "visible"
            rule = { gate = "show", any_of = [] }
        "#;

        let loaded = TomlSchema::from_toml_str(toml).unwrap();
        assert_eq!(loaded.warnings().len(), 1);

        let compiled = capgate_core::compile(
            loaded.schema(),
            &CredentialSet::from_tokens(["superadmin"]),
            None,
        );
        assert!(!compiled.is_visible("customer"));
    }

    // ── 4. catalog ────────────────────────────────────────────────────────────

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let toml = r#"
            schema_id = "contract-wizard"
            surface = "create_wizard"
        "#;
        let mut catalog = SchemaCatalog::new();
        catalog.insert(TomlSchema::from_toml_str(toml).unwrap()).unwrap();

        match catalog.insert(TomlSchema::from_toml_str(toml).unwrap()) {
            Err(CapgateError::ConfigError { reason }) => assert!(reason.contains("contract-wizard")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_loads_workspace_schemas() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schemas");
        let catalog = SchemaCatalog::from_dir(&dir).unwrap();

        assert_eq!(catalog.len(), 4);
        for surface in [
            Surface::CreateWizard,
            Surface::EditDialog,
            Surface::ListColumns,
            Surface::ActionMenu,
        ] {
            assert_eq!(catalog.for_surface(surface).count(), 1, "surface {surface}");
        }
        assert!(catalog.get("contract-list-columns").is_some());
    }
}
