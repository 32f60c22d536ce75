//! Surface 2: Contract edit dialog.
//!
//! Fields are declared visible and editable separately, so a sales agent
//! sees the price-free dialog with customer data unlocked while back office
//! sees prices and may edit them. The confirm/unconfirm toggle in the
//! dialog footer is resolved against the contract being edited.

use capgate_contracts::{error::CapgateResult, schema::CapabilitySchema};
use capgate_core::{traits::StaticCredentials, Resolver};
use capgate_schema::TomlSchema;

use crate::{fixtures, surfaces::print_elements};

const SCHEMA: &str = include_str!("../../../../schemas/contract_edit_dialog.toml");

pub fn load() -> CapgateResult<TomlSchema> {
    TomlSchema::from_toml_str(SCHEMA)
}

pub fn schema() -> CapgateResult<CapabilitySchema> {
    load().map(TomlSchema::into_schema)
}

/// Run the edit dialog walkthrough.
pub fn run_scenario() -> CapgateResult<()> {
    println!("=== Surface 2: Contract Edit Dialog ===");
    println!();

    let schema = schema()?;
    let contract = fixtures::contract("C-1003");
    println!("  Editing contract C-1003 (is_confirmed = true)");
    println!();

    for (name, credentials) in [
        ("sales-agent", fixtures::sales_agent()),
        ("back-office", fixtures::back_office()),
    ] {
        let resolver = Resolver::with_credentials(Box::new(StaticCredentials(credentials)));
        let compiled = resolver.compile(&schema, Some(&contract))?;

        println!("  Actor: {}", name);
        print_elements(&compiled);
        if let Some(toggle) = compiled.toggle("confirmation") {
            println!(
                "      [{}] {}",
                if toggle.available { "x" } else { " " },
                toggle.label
            );
        }
        println!();
    }
    Ok(())
}
