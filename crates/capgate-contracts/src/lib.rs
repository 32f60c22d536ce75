//! # capgate-contracts
//!
//! Shared types, schemas, and error contracts for the capgate capability
//! resolver.
//!
//! Every crate in the workspace imports from here. No resolution logic lives
//! in this crate, only data definitions and error types.

pub mod column;
pub mod compiled;
pub mod credential;
pub mod element;
pub mod error;
pub mod rule;
pub mod schema;
pub mod toggle;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use compiled::{CompiledCapabilitySet, ElementCapabilities};
    use credential::{CredentialSet, SUPERADMIN_TOKEN};
    use element::{CapabilityKind, ElementSpec};
    use error::{CapgateError, Diagnostics, ResolutionWarning};
    use rule::{CredentialGroup, GateRule};
    use toggle::{EntityField, ToggleActionSpec, ToggleVariant};

    // ── CredentialSet ────────────────────────────────────────────────────────

    #[test]
    fn credential_set_membership_is_exact() {
        let creds = CredentialSet::from_tokens(["contract_modify", "admin"]);

        assert!(creds.has("contract_modify"));
        assert!(creds.has("admin"));
        assert!(!creds.has("contract_modif"));
        assert!(!creds.has("Contract_Modify"));
        assert!(!creds.is_superadmin());
        assert_eq!(creds.len(), 2);
    }

    #[test]
    fn superadmin_derived_from_reserved_token() {
        let creds = CredentialSet::from_tokens([SUPERADMIN_TOKEN, "contract_modify"]);
        assert!(creds.is_superadmin());
        assert!(creds.has(SUPERADMIN_TOKEN));
    }

    #[test]
    fn superadmin_flag_from_snapshot_leaves_raw_set_untouched() {
        let creds = CredentialSet::from_json(
            r#"{ "permissions": ["contract_list"], "isSuperadmin": true }"#,
        )
        .unwrap();

        assert!(creds.is_superadmin());
        // The flag does not smuggle the reserved token into the raw set.
        assert!(!creds.has(SUPERADMIN_TOKEN));
        assert_eq!(creds.len(), 1);
    }

    #[test]
    fn deserialized_set_derives_superadmin_from_reserved_token() {
        let creds: CredentialSet =
            serde_json::from_value(json!({ "permissions": ["superadmin"], "is_superadmin": false }))
                .unwrap();

        assert!(creds.has(SUPERADMIN_TOKEN));
        assert!(creds.is_superadmin());
    }

    #[test]
    fn credential_set_serializes_as_snapshot() {
        let creds = CredentialSet::from_tokens(["contract_list", SUPERADMIN_TOKEN]);
        let value = serde_json::to_value(&creds).unwrap();

        assert_eq!(
            value,
            json!({ "permissions": ["contract_list", "superadmin"], "is_superadmin": true })
        );
        let back: CredentialSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, creds);
    }

    #[test]
    fn credential_snapshot_defaults_missing_fields() {
        let creds = CredentialSet::from_json("{}").unwrap();
        assert!(creds.is_empty());
        assert!(!creds.is_superadmin());
    }

    #[test]
    fn malformed_credential_json_is_a_source_error() {
        match CredentialSet::from_json("[not json") {
            Err(CapgateError::CredentialSource { reason }) => {
                assert!(reason.contains("failed to parse credential snapshot"));
            }
            other => panic!("expected CredentialSource, got {:?}", other),
        }
    }

    // ── CredentialGroup / GateRule ───────────────────────────────────────────

    #[test]
    fn empty_credential_group_rejected_by_constructor() {
        let result = CredentialGroup::new(Vec::<String>::new());
        assert!(matches!(result, Err(CapgateError::InvalidSchema { .. })));
    }

    #[test]
    fn credential_group_keeps_declaration_order() {
        let group = CredentialGroup::new(["superadmin", "admin", "contract_modify"]).unwrap();
        let names: Vec<&str> = group.tokens().iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["superadmin", "admin", "contract_modify"]);
    }

    #[test]
    fn gate_rule_uses_internal_tag() {
        let rule: GateRule =
            serde_json::from_value(json!({ "gate": "hide", "token": "customer_phone_remove" }))
                .unwrap();
        assert_eq!(rule, GateRule::hide("customer_phone_remove"));

        let rule: GateRule =
            serde_json::from_value(json!({ "gate": "show", "any_of": ["admin"] })).unwrap();
        assert_eq!(rule.kind_name(), "show");
    }

    #[test]
    fn unknown_gate_tag_becomes_unrecognized() {
        let rule: GateRule =
            serde_json::from_value(json!({ "gate": "require_mfa", "token": "x" })).unwrap();
        assert_eq!(rule, GateRule::Unrecognized);
    }

    #[test]
    fn deserialized_empty_group_is_accepted_for_later_fail_closed() {
        let rule: GateRule =
            serde_json::from_value(json!({ "gate": "show", "any_of": [] })).unwrap();
        match rule {
            GateRule::Show { any_of } => assert!(any_of.is_empty()),
            other => panic!("expected Show, got {:?}", other),
        }
    }

    #[test]
    fn element_spec_defaults_to_visible_without_rule() {
        let spec: ElementSpec =
            serde_json::from_value(json!({ "id": "notes", "kind": "editable" })).unwrap();
        assert_eq!(spec, ElementSpec::ungated("notes", CapabilityKind::Editable, true));
    }

    // ── Toggle types ─────────────────────────────────────────────────────────

    #[test]
    fn entity_field_accepts_shorthand_and_table() {
        let short: EntityField = serde_json::from_value(json!("is_confirmed")).unwrap();
        assert_eq!(short, EntityField::new("is_confirmed"));

        let full: EntityField =
            serde_json::from_value(json!({ "path": "status", "equals": "confirmed" })).unwrap();
        assert_eq!(full, EntityField::equals("status", json!("confirmed")));
    }

    #[test]
    fn leave_gate_falls_back_to_enter_gate() {
        let mut spec = ToggleActionSpec {
            id: "confirmation".to_string(),
            off_action: "confirm".to_string(),
            on_action: "unconfirm".to_string(),
            off_label: "actionConfirm".to_string(),
            on_label: "actionUnconfirm".to_string(),
            off_icon: None,
            on_icon: None,
            state_field: EntityField::new("is_confirmed"),
            gate: CredentialGroup::new(["contract_list_confirmed"]).unwrap(),
            leave_gate: None,
            dim_when: None,
        };
        assert_eq!(spec.gate_for(ToggleVariant::On), &spec.gate);

        let leave = CredentialGroup::new(["contract_list_unconfirmed"]).unwrap();
        spec.leave_gate = Some(leave.clone());
        assert_eq!(spec.gate_for(ToggleVariant::On), &leave);
        assert_eq!(spec.gate_for(ToggleVariant::Off), &spec.gate);
    }

    // ── CompiledCapabilitySet ────────────────────────────────────────────────

    #[test]
    fn compiled_set_lookups() {
        let mut elements = BTreeMap::new();
        elements.insert(
            "price".to_string(),
            ElementCapabilities { visible: true, editable: false },
        );
        let compiled =
            CompiledCapabilitySet::new("s", 3, elements, BTreeMap::new(), Diagnostics::new());

        assert_eq!(compiled.version(), 3);
        assert!(compiled.is_visible("price"));
        assert!(!compiled.is_editable("price"));
        assert_eq!(compiled.decision("price", CapabilityKind::Editable), Some(false));

        // Undeclared elements are unknown, and the boolean helpers deny them.
        assert_eq!(compiled.element("ghost"), None);
        assert!(!compiled.is_visible("ghost"));
        assert!(compiled.toggle("confirmation").is_none());
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn schema_integrity_warning_display() {
        let warning = ResolutionWarning::SchemaIntegrity {
            element: "reference".to_string(),
            reason: "empty credential group".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("reference"));
        assert!(msg.contains("empty credential group"));
    }

    #[test]
    fn missing_entity_field_warning_display() {
        let warning = ResolutionWarning::MissingEntityField {
            toggle: "hold".to_string(),
            field: "is_hold".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("hold"));
        assert!(msg.contains("is_hold"));
    }

    #[test]
    fn config_error_display() {
        let err = CapgateError::ConfigError {
            reason: "missing schema path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing schema path"));
    }
}
