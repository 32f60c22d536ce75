//! # capgate-core
//!
//! Pure capability resolution for UI surfaces.
//!
//! This crate provides:
//! - The rule evaluator (SHOW gates that superadmin bypasses, HIDE gates
//!   that it does not)
//! - The toggle-state resolver for paired actions such as confirm/unconfirm
//! - The capability set compiler that folds a whole schema into one lookup
//! - The permitted-fields column filter for list surfaces
//! - `Resolver`, which binds all of the above to live credential and
//!   permitted-field sources
//!
//! Nothing in here performs I/O or holds mutable state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use capgate_core::{compile, Resolver, traits::StaticCredentials};
//!
//! let compiled = compile(&schema, &credentials, Some(&entity));
//! if compiled.is_editable("price") { /* render an input */ }
//! ```

pub mod compiler;
pub mod entity;
pub mod evaluator;
pub mod filter;
pub mod resolver;
pub mod toggle;
pub mod traits;

pub use compiler::compile;
pub use evaluator::{evaluate, grants};
pub use filter::{filter_permitted, visible_columns};
pub use resolver::Resolver;
pub use toggle::resolve_toggle;

// ── Tests ─────────────────────────────────────────────────────────────────────
