//! Surface 4: Contract row-action menu.
//!
//! Two toggles share the menu:
//!
//! - confirmation: `contract_list_confirmed` to confirm,
//!   `contract_list_unconfirmed` to unconfirm
//! - hold: `contract_hold` to hold, `contract_unhold` or `admin` to release
//!
//! A contract on hold dims the confirmation entry. Dimming is a hint; the
//! entry stays invokable when the actor is allowed to use it.

use capgate_contracts::{
    credential::CredentialSet,
    error::CapgateResult,
    schema::CapabilitySchema,
    toggle::ToggleDecision,
};
use capgate_core::compile;
use capgate_schema::TomlSchema;

use crate::fixtures;

const SCHEMA: &str = include_str!("../../../../schemas/contract_action_menu.toml");

pub fn load() -> CapgateResult<TomlSchema> {
    TomlSchema::from_toml_str(SCHEMA)
}

pub fn schema() -> CapgateResult<CapabilitySchema> {
    load().map(TomlSchema::into_schema)
}

fn describe(decision: &ToggleDecision) -> String {
    let mut flags = Vec::new();
    if !decision.available {
        flags.push("unavailable");
    }
    if decision.dimmed {
        flags.push("dimmed");
    }
    if flags.is_empty() {
        decision.label.clone()
    } else {
        format!("{} ({})", decision.label, flags.join(", "))
    }
}

fn print_menu(schema: &CapabilitySchema, actor: &str, credentials: &CredentialSet, contract_id: &str) {
    let contract = fixtures::contract(contract_id);
    let compiled = compile(schema, credentials, Some(&contract));

    println!("  {} on {}:", actor, contract_id);
    for (id, caps) in compiled.elements() {
        if caps.visible {
            let suffix = if caps.editable { "" } else { " (disabled)" };
            println!("      {}{}", id, suffix);
        }
    }
    for decision in compiled.toggles() {
        println!("      {}", describe(decision));
    }
}

/// Run the action menu walkthrough.
pub fn run_scenario() -> CapgateResult<()> {
    println!("=== Surface 4: Contract Action Menu ===");
    println!();

    let schema = schema()?;

    print_menu(&schema, "sales-agent", &fixtures::sales_agent(), "C-1001");
    print_menu(&schema, "sales-agent", &fixtures::sales_agent(), "C-1003");
    print_menu(&schema, "back-office", &fixtures::back_office(), "C-1002");
    print_menu(&schema, "viewer", &fixtures::viewer(), "C-1001");

    println!();
    println!("  The sales agent confirms C-1001 but cannot unconfirm C-1003.");
    println!();
    Ok(())
}
