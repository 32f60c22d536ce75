//! # capgate-ref-contracts
//!
//! Contract-management reference surfaces for the capgate resolver.
//!
//! Demonstrates the resolver on the four surfaces of a contract back office:
//!
//! 1. **Create wizard**: SHOW gates, a HIDE gate that beats superadmin,
//!    and a field hidden by default.
//! 2. **Edit dialog**: fields that are always visible but conditionally
//!    editable, plus the confirm/unconfirm toggle.
//! 3. **List columns**: the permitted-fields filter before and after the
//!    server answers, composed with local column rules.
//! 4. **Action menu**: confirm/unconfirm and hold/unhold toggles with
//!    independently gated directions and hold dimming.
//!
//! All data is hardcoded and fictional. No external calls are made.

pub mod fixtures;
pub mod surfaces;
