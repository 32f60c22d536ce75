//! The rule evaluator.
//!
//! Pure functions over a [`GateRule`] and a [`CredentialSet`]. Nothing here
//! reads global state, caches, or performs I/O, so every call is cheap to
//! repeat on each render.
//!
//! The two gate kinds answer different questions:
//!
//! | rule        | `evaluate` returns true when           | superadmin |
//! |-------------|----------------------------------------|------------|
//! | `Show(g)`   | the actor holds any token of `g`       | bypasses   |
//! | `Hide(t)`   | the actor's raw set contains `t`       | no effect  |
//!
//! `evaluate` reports the raw gate outcome ("shown" for SHOW, "hidden" for
//! HIDE). [`grants`] folds both into a single "capability granted" answer
//! and is what the compiler uses.

use tracing::{debug, warn};

use capgate_contracts::{
    credential::CredentialSet,
    error::{Diagnostics, ResolutionWarning},
    rule::{CredentialGroup, GateRule},
};

/// Element name used in warnings raised outside of a compile call.
const ANONYMOUS_ELEMENT: &str = "<anonymous>";

/// Evaluate `rule` against `credentials`.
///
/// - `Show`: true if the actor is superadmin or holds any token of the group.
/// - `Hide`: true ("hidden") iff the raw set contains the token.
/// - `Unrecognized`: false, with a schema-integrity warning.
///
/// An empty SHOW group fails closed and logs a schema-integrity warning.
/// Use [`evaluate_for`] to collect the warning instead of only logging it.
pub fn evaluate(rule: &GateRule, credentials: &CredentialSet) -> bool {
    evaluate_for(ANONYMOUS_ELEMENT, rule, credentials, &mut Diagnostics::new())
}

/// [`evaluate`], attributing any warning to `element` and recording it in
/// `diagnostics`.
pub fn evaluate_for(
    element: &str,
    rule: &GateRule,
    credentials: &CredentialSet,
    diagnostics: &mut Diagnostics,
) -> bool {
    match rule {
        GateRule::Show { any_of } => group_satisfied(element, any_of, credentials, diagnostics),
        GateRule::Hide { token } => credentials.has(token.as_str()),
        GateRule::Unrecognized => {
            schema_integrity(diagnostics, element, "unrecognized gate rule variant");
            false
        }
    }
}

/// True when `rule` leaves the capability granted.
///
/// `Show` grants when satisfied, `Hide` grants when its token is absent, and
/// an unrecognized rule never grants.
pub fn grants(
    element: &str,
    rule: &GateRule,
    credentials: &CredentialSet,
    diagnostics: &mut Diagnostics,
) -> bool {
    let granted = match rule {
        GateRule::Show { .. } => evaluate_for(element, rule, credentials, diagnostics),
        GateRule::Hide { .. } => !evaluate_for(element, rule, credentials, diagnostics),
        GateRule::Unrecognized => {
            schema_integrity(diagnostics, element, "unrecognized gate rule variant");
            false
        }
    };

    debug!(
        element = %element,
        gate = rule.kind_name(),
        superadmin = credentials.is_superadmin(),
        granted,
        "gate evaluated"
    );

    granted
}

/// SHOW semantics for a bare credential group: satisfied if the actor is
/// superadmin or holds any listed token. An empty group is never satisfied.
pub fn group_satisfied(
    element: &str,
    group: &CredentialGroup,
    credentials: &CredentialSet,
    diagnostics: &mut Diagnostics,
) -> bool {
    if group.is_empty() {
        schema_integrity(diagnostics, element, "empty credential group");
        return false;
    }

    credentials.is_superadmin() || group.tokens().iter().any(|t| credentials.has(t.as_str()))
}

/// Log a schema-integrity finding and record it.
pub(crate) fn schema_integrity(diagnostics: &mut Diagnostics, element: &str, reason: &str) {
    warn!(element = %element, reason = %reason, "schema integrity warning; denying capability");
    diagnostics.push(ResolutionWarning::SchemaIntegrity {
        element: element.to_string(),
        reason: reason.to_string(),
    });
}
