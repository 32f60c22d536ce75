//! Surface 1: Contract creation wizard.
//!
//! Shows the three ways a wizard field can be decided:
//!
//! - SHOW gate: `customer` appears for anyone holding `contract_new`, and
//!   for every superadmin
//! - HIDE gate: `reference` disappears for anyone holding
//!   `contract_new_reference_remove`, superadmin included
//! - no rule: `internal_notes` takes its declared default (hidden)

use capgate_contracts::{error::CapgateResult, schema::CapabilitySchema};
use capgate_core::compile;
use capgate_schema::TomlSchema;

use crate::{fixtures, surfaces::print_elements};

const SCHEMA: &str = include_str!("../../../../schemas/contract_create_wizard.toml");

/// Parse and lint the embedded schema.
pub fn load() -> CapgateResult<TomlSchema> {
    TomlSchema::from_toml_str(SCHEMA)
}

pub fn schema() -> CapgateResult<CapabilitySchema> {
    load().map(TomlSchema::into_schema)
}

/// Run the create wizard walkthrough.
pub fn run_scenario() -> CapgateResult<()> {
    println!("=== Surface 1: Contract Create Wizard ===");
    println!();

    let schema = schema()?;

    for (name, credentials) in [
        ("sales-agent", fixtures::sales_agent()),
        ("restricted-superadmin", fixtures::restricted_superadmin()),
    ] {
        println!("  Actor: {} (superadmin = {})", name, credentials.is_superadmin());
        let compiled = compile(&schema, &credentials, None);
        print_elements(&compiled);
        println!();
    }

    println!("  The restricted superadmin passes every SHOW gate but still loses");
    println!("  'reference': HIDE gates are not bypassed.");
    println!();
    Ok(())
}
