//! Error types for query object construction.

use thiserror::Error;

/// Data-integrity faults found while building a query object.
///
/// These signal a corrupt or hand-edited profile record. Retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	/// An alias names a canonical parameter the command does not have.
	#[error("command {command}: alias {alias:?} refers to unknown parameter {target:?}")]
	DanglingAliasReference {
		command: String,
		alias: String,
		target: String,
	},

	/// Two canonical parameter names differ only by case.
	#[error("command {command}: parameters {first:?} and {second:?} differ only by case")]
	DuplicateCanonicalName {
		command: String,
		first: String,
		second: String,
	},
}

/// Result type for query construction.
pub type Result<T> = std::result::Result<T, QueryError>;
