//! Case-insensitive name keys.
//!
//! PowerShell resolves parameter names without regard to case. Rather than leaning on a
//! case-insensitive container, keys are stored in a folded form and the original spelling is
//! kept alongside for display.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Folds `name` for comparison. Borrows when already folded.
///
/// Folds per char, so the result never depends on neighbouring chars (no final sigma).
pub fn fold(name: &str) -> Cow<'_, str> {
	if name.chars().all(|c| c.to_lowercase().eq([c])) {
		Cow::Borrowed(name)
	} else {
		Cow::Owned(name.chars().flat_map(char::to_lowercase).collect())
	}
}

/// Compares two names the way the lookup tables do.
pub fn eq_folded(a: &str, b: &str) -> bool {
	a == b || fold(a) == fold(b)
}

/// A name compared by its folded form.
///
/// `Eq` and `Hash` only see the folded form, and `Borrow<str>` exposes it, so a map keyed by
/// `NameKey` can be probed with `fold(name).as_ref()` without allocating a key.
#[derive(Clone)]
pub struct NameKey {
	folded: Box<str>,
	display: Box<str>,
}

impl NameKey {
	pub fn new(name: &str) -> Self {
		Self {
			folded: fold(name).into(),
			display: name.into(),
		}
	}

	/// The name as spelled in the profile.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.display
	}

	/// The folded comparison form.
	#[inline]
	pub fn folded(&self) -> &str {
		&self.folded
	}
}

impl PartialEq for NameKey {
	fn eq(&self, other: &Self) -> bool {
		self.folded == other.folded
	}
}

impl Eq for NameKey {}

impl Hash for NameKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.folded.hash(state);
	}
}

impl Borrow<str> for NameKey {
	fn borrow(&self) -> &str {
		&self.folded
	}
}

impl From<&str> for NameKey {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl fmt::Debug for NameKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self.display, f)
	}
}

impl fmt::Display for NameKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fold_borrows_lowercase() {
		assert!(matches!(fold("path"), Cow::Borrowed("path")));
		assert_eq!(fold("LiteralPath"), "literalpath");
	}

	#[test]
	fn test_key_equality_ignores_case() {
		let a = NameKey::new("ErrorAction");
		let b = NameKey::new("erroraction");
		assert_eq!(a, b);
		assert_eq!(a.as_str(), "ErrorAction");
		assert_eq!(b.as_str(), "erroraction");
		assert_eq!(a.folded(), b.folded());
	}

	#[test]
	fn test_fold_titlecase() {
		assert_eq!(fold("ǅx"), "ǆx");
		assert_eq!(fold("ǅx"), fold("Ǆx"));
		assert!(eq_folded("ǅx", "ǆx"));
	}

	#[test]
	fn test_fold_sigma_ignores_position() {
		assert_eq!(fold("ΑΣ"), "ασ");
		assert_eq!(fold("ΑΣ"), fold("ασ"));
		assert!(eq_folded("ΑΣ", "ασ"));
	}

	#[test]
	fn test_eq_folded() {
		assert!(eq_folded("Verbose", "VERBOSE"));
		assert!(!eq_folded("Verbose", "Verb"));
	}
}
