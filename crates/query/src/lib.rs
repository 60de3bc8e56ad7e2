#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Read-only query objects over compatibility profile records.
//!
//! # Purpose
//!
//! A profile stores a command's parameters and its parameter aliases as two independent maps.
//! This crate reconciles them into one case-insensitive [`ParameterTable`] so a caller can
//! resolve a parameter by its canonical name or by any alias without caring which it holds.
//! The remaining query objects ([`Command`], [`OperatingSystem`]) forward profile fields.
//!
//! # Mental Model
//!
//! 1. **Records:** [`pscompat_data`] holds the materialized profile. It is never mutated.
//! 2. **Build:** [`Command::new`] builds its [`ParameterTable`] eagerly, in three phases
//!    (seed canonical names, resolve alias targets, merge aliases if absent).
//! 3. **Query:** every query object borrows from the record and lives no longer than it.
//!    Tables are immutable after construction and can be shared across threads freely.
//!
//! # Precedence Contract
//!
//! - Canonical names always win over aliases of the same (case-insensitive) name.
//! - Among colliding aliases, the first in alias-map order wins.
//!
//! - Enforced in: [`table::merge_aliases`]
//! - Tested by: `table::tests::test_canonical_precedence`, `table::tests::prop_canonical_precedence`
//!
//! # Faults
//!
//! A dangling alias or a case-only duplicate canonical name fails the whole command under the
//! default [`TableOptions`]. Faults never leak into other commands built from the same profile.

pub mod command;
pub mod error;
pub mod name;
pub mod platform;
pub mod table;

pub use command::{Command, CommandKind, Parameter, ParameterSet};
pub use error::{QueryError, Result};
pub use name::NameKey;
pub use platform::{OperatingSystem, WindowsSku};
pub use pscompat_data as data;
pub use table::{
	Collision, CollisionKind, DanglingAliasPolicy, DuplicateCanonicalPolicy, ParameterTable,
	TableOptions,
};
