//! Parameter resolution tables.
//!
//! # Role
//!
//! Merges a command's canonical parameter map and its alias map into one case-insensitive
//! lookup table, plus a second table holding only the aliases that made it in.
//!
//! # Build Phases
//!
//! 1. **Seed:** every canonical name is bound to its definition.
//! 2. **Resolve:** every alias target is looked up in the seeded table. Dangling targets are
//!    handled per [`DanglingAliasPolicy`].
//! 3. **Merge:** resolved aliases are bound only if their name is still free. Canonical names
//!    are never displaced, and the first of several colliding aliases wins.
//!
//! # Invariants
//!
//! - Every canonical name resolves to its own definition.
//!   - Tested by: `tests::prop_canonical_names_resolve`
//! - An alias resolves to exactly the definition its target resolves to.
//!   - Tested by: `tests::prop_alias_matches_target`
//! - The alias table holds exactly the aliases bound in the merge phase.
//!   - Tested by: `tests::test_alias_shadowed_by_canonical`, `tests::test_duplicate_alias_first_wins`

use indexmap::IndexMap;
use indexmap::map::Entry;
use pscompat_data::{ParameterData, ProfileMap};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::command::Parameter;
use crate::error::{QueryError, Result};
use crate::name::{NameKey, fold};

type Map<'a> = IndexMap<NameKey, Parameter<'a>, FxBuildHasher>;

/// What to do with an alias whose target is not a parameter of the command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DanglingAliasPolicy {
	/// Fail construction with [`QueryError::DanglingAliasReference`].
	#[default]
	Reject,
	/// Leave the alias out of both tables and record a [`Collision`].
	Skip,
}

/// What to do with canonical names that differ only by case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCanonicalPolicy {
	/// Fail construction with [`QueryError::DuplicateCanonicalName`].
	#[default]
	Reject,
	/// Keep the first name in source order and record a [`Collision`].
	FirstWins,
}

/// Table construction settings.
///
/// The defaults are strict: profiles come out of a generation pipeline, so any integrity
/// fault means the record is broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TableOptions {
	pub dangling_alias: DanglingAliasPolicy,
	pub duplicate_canonical: DuplicateCanonicalPolicy,
}

impl TableOptions {
	/// Sets the dangling alias policy.
	pub fn on_dangling_alias(mut self, policy: DanglingAliasPolicy) -> Self {
		self.dangling_alias = policy;
		self
	}

	/// Sets the duplicate canonical name policy.
	pub fn on_duplicate_canonical(mut self, policy: DuplicateCanonicalPolicy) -> Self {
		self.duplicate_canonical = policy;
		self
	}

	/// Tolerates every integrity fault, dropping the offending entries.
	pub fn lenient() -> Self {
		Self {
			dangling_alias: DanglingAliasPolicy::Skip,
			duplicate_canonical: DuplicateCanonicalPolicy::FirstWins,
		}
	}
}

/// A name that was left out of the tables during the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// The name that lost, as spelled in the profile.
	pub key: String,
	pub kind: CollisionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionKind {
	/// A canonical name differing only by case from an earlier one.
	DuplicateCanonical { kept: String },
	/// An alias whose target does not exist.
	DanglingAlias { target: String },
	/// An alias spelled like a canonical parameter name.
	ShadowedByCanonical { target: String },
	/// An alias spelled like an earlier alias.
	DuplicateAlias { kept: String, target: String },
}

/// Case-insensitive lookup from any parameter name or alias to its definition.
///
/// Entries keep profile order: canonical names first, then merged aliases.
#[derive(Debug, Clone, Default)]
pub struct ParameterTable<'a> {
	resolved: Map<'a>,
	aliases: Map<'a>,
	canonical_len: usize,
	collisions: Vec<Collision>,
}

impl<'a> ParameterTable<'a> {
	/// Builds the tables for one command.
	///
	/// `command` is only used in errors and diagnostics. Absent maps are treated as empty.
	pub fn build(
		command: &str,
		parameters: Option<&'a ProfileMap<ParameterData>>,
		aliases: Option<&'a ProfileMap<String>>,
		options: &TableOptions,
	) -> Result<Self> {
		let mut build = TableBuild {
			command,
			options,
			resolved: Map::default(),
			collisions: Vec::new(),
		};

		seed_canonical(&mut build, parameters.into_iter().flatten())?;
		let canonical_len = build.resolved.len();
		let pending = resolve_aliases(&mut build, aliases.into_iter().flatten())?;
		let aliases = merge_aliases(&mut build, canonical_len, pending);

		tracing::debug!(
			command,
			parameters = canonical_len,
			aliases = aliases.len(),
			collisions = build.collisions.len(),
			"built parameter table"
		);

		Ok(Self {
			resolved: build.resolved,
			aliases,
			canonical_len,
			collisions: build.collisions,
		})
	}

	/// Resolves a canonical name or alias.
	#[inline]
	pub fn get(&self, name: &str) -> Option<Parameter<'a>> {
		self.resolved.get(fold(name).as_ref()).copied()
	}

	/// Resolves a name only if it is a merged alias.
	#[inline]
	pub fn get_alias(&self, name: &str) -> Option<Parameter<'a>> {
		self.aliases.get(fold(name).as_ref()).copied()
	}

	/// Returns true if `name` resolves to any parameter.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.resolved.contains_key(fold(name).as_ref())
	}

	/// Returns true if `name` is a merged alias rather than a canonical name.
	#[inline]
	pub fn is_alias(&self, name: &str) -> bool {
		self.aliases.contains_key(fold(name).as_ref())
	}

	/// Iterates every resolvable name with its parameter.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Parameter<'a>)> + '_ {
		self.resolved.iter().map(|(k, p)| (k.as_str(), *p))
	}

	/// Iterates canonical parameters only, in profile order.
	pub fn canonical(&self) -> impl Iterator<Item = Parameter<'a>> + '_ {
		self.resolved.values().take(self.canonical_len).copied()
	}

	/// Iterates merged aliases with the parameter each resolves to.
	pub fn aliases(&self) -> impl Iterator<Item = (&str, Parameter<'a>)> + '_ {
		self.aliases.iter().map(|(k, p)| (k.as_str(), *p))
	}

	/// Number of resolvable names, canonical and alias.
	#[inline]
	pub fn len(&self) -> usize {
		self.resolved.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.resolved.is_empty()
	}

	#[inline]
	pub fn canonical_len(&self) -> usize {
		self.canonical_len
	}

	#[inline]
	pub fn alias_len(&self) -> usize {
		self.aliases.len()
	}

	/// Names dropped during the build, for diagnostics.
	#[inline]
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}
}

/// Build-time state shared by the phases.
struct TableBuild<'a, 'b> {
	command: &'b str,
	options: &'b TableOptions,
	resolved: Map<'a>,
	collisions: Vec<Collision>,
}

/// Phase 1: binds canonical names.
fn seed_canonical<'a>(
	build: &mut TableBuild<'a, '_>,
	parameters: impl Iterator<Item = (&'a String, &'a ParameterData)>,
) -> Result<()> {
	for (name, data) in parameters {
		match build.resolved.entry(NameKey::new(name)) {
			Entry::Vacant(slot) => {
				slot.insert(Parameter::new(name, data));
			}
			Entry::Occupied(existing) => {
				let kept = existing.key().as_str().to_owned();
				match build.options.duplicate_canonical {
					DuplicateCanonicalPolicy::Reject => {
						return Err(QueryError::DuplicateCanonicalName {
							command: build.command.to_owned(),
							first: kept,
							second: name.clone(),
						});
					}
					DuplicateCanonicalPolicy::FirstWins => {
						tracing::warn!(
							command = build.command,
							kept = %kept,
							dropped = %name,
							"canonical parameter names differ only by case; keeping first"
						);
						build.collisions.push(Collision {
							key: name.clone(),
							kind: CollisionKind::DuplicateCanonical { kept },
						});
					}
				}
			}
		}
	}
	Ok(())
}

/// Phase 2: looks up each alias target among the canonical names.
///
/// Returns resolved aliases in alias-map order. Nothing is bound yet.
fn resolve_aliases<'a>(
	build: &mut TableBuild<'a, '_>,
	aliases: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<Vec<(&'a str, Parameter<'a>)>> {
	let mut pending = Vec::new();
	for (alias, target) in aliases {
		if let Some(param) = build.resolved.get(fold(target).as_ref()) {
			pending.push((alias.as_str(), *param));
			continue;
		}

		match build.options.dangling_alias {
			DanglingAliasPolicy::Reject => {
				return Err(QueryError::DanglingAliasReference {
					command: build.command.to_owned(),
					alias: alias.clone(),
					target: target.clone(),
				});
			}
			DanglingAliasPolicy::Skip => {
				tracing::warn!(
					command = build.command,
					alias = %alias,
					target = %target,
					"alias refers to unknown parameter; skipping"
				);
				build.collisions.push(Collision {
					key: alias.clone(),
					kind: CollisionKind::DanglingAlias {
						target: target.clone(),
					},
				});
			}
		}
	}
	Ok(pending)
}

/// Phase 3: binds resolved aliases whose names are still free.
///
/// `canonical_len` marks where canonical entries end in the resolved table.
fn merge_aliases<'a>(
	build: &mut TableBuild<'a, '_>,
	canonical_len: usize,
	pending: Vec<(&'a str, Parameter<'a>)>,
) -> Map<'a> {
	let mut merged = Map::default();
	for (alias, param) in pending {
		let key = NameKey::new(alias);
		if let Some((idx, existing_key, existing)) = build.resolved.get_full(key.folded()) {
			let kind = if idx < canonical_len {
				CollisionKind::ShadowedByCanonical {
					target: param.name().to_owned(),
				}
			} else {
				CollisionKind::DuplicateAlias {
					kept: existing_key.as_str().to_owned(),
					target: param.name().to_owned(),
				}
			};
			tracing::debug!(
				command = build.command,
				alias,
				existing = existing.name(),
				?kind,
				"alias name already bound; dropping"
			);
			build.collisions.push(Collision {
				key: alias.to_owned(),
				kind,
			});
			continue;
		}

		build.resolved.insert(key.clone(), param);
		merged.insert(key, param);
	}
	merged
}
