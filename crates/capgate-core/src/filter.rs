//! The permitted-fields column filter for list surfaces.
//!
//! The server supplies a set of approved column keys, refreshed
//! asynchronously. Until it first answers the set is empty, and an empty set
//! means "not loaded yet": every column is shown so the first paint is not
//! blank. Once the set is non-empty it is authoritative and keyed columns
//! missing from it are dropped, whatever local rules say.
//!
//! This is the outer, coarse filter. Local gate rules compiled by
//! [`crate::compiler::compile`] are the finer one; [`visible_columns`]
//! applies both.

use std::collections::HashSet;

use tracing::debug;

use capgate_contracts::{
    column::ColumnSpec,
    compiled::CompiledCapabilitySet,
    element::CapabilityKind,
};

/// Keep the columns the permitted set allows, in their original order.
///
/// - Empty `permitted_ids`: every column is kept.
/// - Columns without a `permission_key` are always kept.
/// - Otherwise a column is kept iff its key is in `permitted_ids`.
pub fn filter_permitted(all_columns: &[ColumnSpec], permitted_ids: &HashSet<String>) -> Vec<ColumnSpec> {
    if permitted_ids.is_empty() {
        debug!(columns = all_columns.len(), "permitted fields not loaded; keeping all columns");
        return all_columns.to_vec();
    }

    all_columns
        .iter()
        .filter(|column| match &column.permission_key {
            Some(key) => permitted_ids.contains(key),
            None => true,
        })
        .cloned()
        .collect()
}

/// Apply the permitted-set filter, then drop columns whose compiled
/// `visible` decision is false. Columns the schema never declared pass the
/// second step.
pub fn visible_columns(
    all_columns: &[ColumnSpec],
    permitted_ids: &HashSet<String>,
    compiled: &CompiledCapabilitySet,
) -> Vec<ColumnSpec> {
    let mut columns = filter_permitted(all_columns, permitted_ids);
    columns.retain(|column| compiled.decision(&column.id, CapabilityKind::Visible) != Some(false));
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("reference", "reference"),
            ColumnSpec::new("customer_phone", "customerPhone").keyed("customer_phone"),
            ColumnSpec::new("price", "price").keyed("price"),
        ]
    }

    fn ids(columns: &[ColumnSpec]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    fn permitted(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn empty_permitted_set_keeps_everything() {
        assert_eq!(filter_permitted(&columns(), &HashSet::new()), columns());
    }

    #[test]
    fn non_empty_permitted_set_is_authoritative() {
        let kept = filter_permitted(&columns(), &permitted(&["price"]));
        assert_eq!(ids(&kept), vec!["reference", "price"]);
    }

    #[test]
    fn unkeyed_columns_survive_any_permitted_set() {
        let kept = filter_permitted(&columns(), &permitted(&["something_else"]));
        assert_eq!(ids(&kept), vec!["reference"]);
    }

    #[test]
    fn order_is_preserved() {
        let kept = filter_permitted(&columns(), &permitted(&["price", "customer_phone"]));
        assert_eq!(ids(&kept), vec!["reference", "customer_phone", "price"]);
    }
}
