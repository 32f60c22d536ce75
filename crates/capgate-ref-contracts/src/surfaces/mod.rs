//! Reference surfaces of the contract back office.
//!
//! Each module embeds its TOML schema, exposes it, and provides a
//! walkthrough that resolves it for the fixture actors and prints what the
//! rendering layer would receive.

use tracing::info;

use capgate_contracts::{compiled::CompiledCapabilitySet, error::CapgateResult};

pub mod action_menu;
pub mod create_wizard;
pub mod edit_dialog;
pub mod list_columns;

/// Run every walkthrough in surface order.
pub fn run_all() -> CapgateResult<()> {
    create_wizard::run_scenario()?;
    edit_dialog::run_scenario()?;
    list_columns::run_scenario()?;
    action_menu::run_scenario()?;
    info!(surfaces = 4, "reference walkthroughs complete");
    Ok(())
}

/// Print the element decisions of a compiled set, one per line.
pub(crate) fn print_elements(compiled: &CompiledCapabilitySet) {
    for (id, caps) in compiled.elements() {
        let state = match (caps.visible, caps.editable) {
            (false, _) => "hidden",
            (true, false) => "read-only",
            (true, true) => "editable",
        };
        println!("      {:<16} {}", id, state);
    }
    for warning in compiled.diagnostics().iter() {
        println!("      ! {}", warning);
    }
}
