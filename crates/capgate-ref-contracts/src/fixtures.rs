//! Simulated actors and contract records for the reference surfaces.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! session service (credentials), the contract API (entity snapshots), and
//! the permitted-fields endpoint of a real deployment.

use std::collections::HashSet;

use serde_json::{json, Value};

use capgate_contracts::credential::{CredentialSet, CredentialSnapshot};

// ── Actors ────────────────────────────────────────────────────────────────────

/// A field sales agent: may edit customer data and confirm contracts, but
/// not unconfirm them, and never sees prices.
pub fn sales_agent() -> CredentialSet {
    CredentialSet::from_tokens(["contract_list", "contract_modify", "contract_list_confirmed"])
}

/// Back office: full control over confirmation, holds, and pricing.
pub fn back_office() -> CredentialSet {
    CredentialSet::from_tokens([
        "contract_list",
        "contract_list_confirmed",
        "contract_list_unconfirmed",
        "contract_price_show",
        "contract_price_modify",
        "contract_margin_show",
        "contract_hold",
        "contract_unhold",
    ])
}

/// A superadmin account that was explicitly stripped of the contract
/// reference field and of customer phone numbers in the list.
pub fn restricted_superadmin() -> CredentialSet {
    CredentialSet::from_tokens([
        "superadmin",
        "contract_new_reference_remove",
        "contract_list_customer_phone_remove",
    ])
}

/// Read-only access to the contract list.
pub fn viewer() -> CredentialSet {
    CredentialSet::from_snapshot(CredentialSnapshot {
        permissions: vec!["contract_list".to_string()],
        is_superadmin: false,
    })
}

/// Look up an actor profile by name.
pub fn actor(name: &str) -> Option<CredentialSet> {
    match name {
        "sales-agent" => Some(sales_agent()),
        "back-office" => Some(back_office()),
        "restricted-superadmin" => Some(restricted_superadmin()),
        "viewer" => Some(viewer()),
        _ => None,
    }
}

/// Names accepted by [`actor`].
pub const ACTORS: [&str; 4] = ["sales-agent", "back-office", "restricted-superadmin", "viewer"];

// ── Contracts ─────────────────────────────────────────────────────────────────

/// Return a contract snapshot.
///
/// Known records:
/// - `C-1001` draft, not confirmed, not on hold
/// - `C-1002` confirmed and on hold
/// - `C-1003` confirmed, active
///
/// Any other id returns a record without the toggle fields, the way a
/// partially loaded row looks.
pub fn contract(contract_id: &str) -> Value {
    match contract_id {
        "C-1001" => json!({
            "id": "C-1001",
            "reference": "2026-NORTH-0042",
            "customer": "Halvorsen Logistics",
            "customer_phone": "+47 555 01 234",
            "site": "Tromsø depot",
            "price": 18400,
            "is_confirmed": false,
            "is_hold": false
        }),
        "C-1002" => json!({
            "id": "C-1002",
            "reference": "2026-WEST-0107",
            "customer": "Brightwater Farms",
            "customer_phone": "+44 555 0199",
            "site": "Kelso yard",
            "price": 7250,
            "is_confirmed": true,
            "is_hold": true
        }),
        "C-1003" => json!({
            "id": "C-1003",
            "reference": "2026-EAST-0311",
            "customer": "Ostrava Metalworks",
            "customer_phone": "+420 555 321 654",
            "site": "Plant 2",
            "price": 96000,
            "is_confirmed": true,
            "is_hold": false
        }),
        other => json!({
            "id": other,
            "reference": null
        }),
    }
}

// ── Permitted fields ──────────────────────────────────────────────────────────

/// The allow-list the server returns for sales agents.
pub fn permitted_fields_for_sales() -> HashSet<String> {
    ["customer", "customer_phone", "site"]
        .into_iter()
        .map(String::from)
        .collect()
}
