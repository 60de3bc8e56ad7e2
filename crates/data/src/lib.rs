//! Profile record shapes.
//!
//! # Role
//!
//! These are the already-materialized records a compatibility profile is made of. They are
//! plain owned data: the query layer borrows them and never mutates them. Field names follow
//! the PascalCase keys of the serialized profile so the derives line up with existing files.
//!
//! Maps that the profile may omit are `Option`s. Callers should treat `None` and an empty map
//! the same way; the query layer does.

mod command;
mod platform;

pub use command::{
	CmdletData, CommandData, FunctionData, ParameterData, ParameterSetData, ParameterSetFlag,
};
pub use platform::{Architecture, OperatingSystemData, OsFamily};

/// Insertion-ordered map used for every keyed collection in a profile.
///
/// Source order matters: alias resolution breaks ties by the order aliases appear in.
pub type ProfileMap<V> = indexmap::IndexMap<String, V>;
