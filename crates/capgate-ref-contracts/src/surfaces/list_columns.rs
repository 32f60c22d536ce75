//! Surface 3: Contract list columns.
//!
//! Walks the list through the permitted-fields lifecycle:
//!
//! 1. first paint, server has not answered: every column passes the outer
//!    filter and only local rules remove columns
//! 2. server answered: keyed columns outside the allow-list are dropped
//!    even when local rules would show them

use capgate_contracts::{error::CapgateResult, schema::CapabilitySchema};
use capgate_core::{
    traits::{StaticCredentials, StaticPermittedFields},
    Resolver,
};
use capgate_schema::TomlSchema;

use crate::fixtures;

const SCHEMA: &str = include_str!("../../../../schemas/contract_list_columns.toml");

pub fn load() -> CapgateResult<TomlSchema> {
    TomlSchema::from_toml_str(SCHEMA)
}

pub fn schema() -> CapgateResult<CapabilitySchema> {
    load().map(TomlSchema::into_schema)
}

/// Run the list columns walkthrough.
pub fn run_scenario() -> CapgateResult<()> {
    println!("=== Surface 3: Contract List Columns ===");
    println!();

    let schema = schema()?;
    let phases = [
        ("permitted fields not loaded", StaticPermittedFields::not_loaded()),
        (
            "permitted fields loaded",
            StaticPermittedFields(fixtures::permitted_fields_for_sales()),
        ),
    ];

    for (phase, permitted) in phases {
        let resolver = Resolver::new(
            Box::new(StaticCredentials(fixtures::sales_agent())),
            Box::new(permitted),
        );
        let columns = resolver.columns(&schema)?;
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        println!("  sales-agent, {}:", phase);
        println!("      {}", ids.join(", "));
    }
    println!();
    Ok(())
}
