//! Command query objects.

use std::fmt;
use std::ptr;

use pscompat_data::{
	CmdletData, CommandData, FunctionData, ParameterData, ParameterSetData, ParameterSetFlag,
};

use crate::error::Result;
use crate::name::eq_folded;
use crate::table::{ParameterTable, TableOptions};

/// A canonical parameter of a command.
///
/// Alias lookups yield the same value as the canonical lookup, including [`Parameter::name`].
/// Two parameters are equal when they refer to the same record.
#[derive(Clone, Copy)]
pub struct Parameter<'a> {
	name: &'a str,
	data: &'a ParameterData,
}

impl<'a> Parameter<'a> {
	pub fn new(name: &'a str, data: &'a ParameterData) -> Self {
		Self { name, data }
	}

	/// The canonical parameter name.
	#[inline]
	pub fn name(&self) -> &'a str {
		self.name
	}

	/// Full name of the parameter's .NET type, if recorded.
	#[inline]
	pub fn type_name(&self) -> Option<&'a str> {
		self.data.type_name.as_deref()
	}

	/// True if the parameter is only added at runtime by a dynamic parameter block.
	#[inline]
	pub fn is_dynamic(&self) -> bool {
		self.data.dynamic
	}

	/// Iterates the parameter sets this parameter belongs to.
	pub fn parameter_sets(&self) -> impl Iterator<Item = (&'a str, ParameterSet<'a>)> + use<'a> {
		let data = self.data;
		data.parameter_sets
			.iter()
			.flatten()
			.map(|(name, data)| (name.as_str(), ParameterSet { data }))
	}

	/// Looks up a parameter set membership by set name, ignoring case.
	pub fn parameter_set(&self, set: &str) -> Option<ParameterSet<'a>> {
		self.parameter_sets()
			.find(|(name, _)| eq_folded(name, set))
			.map(|(_, s)| s)
	}

	/// The underlying profile record.
	#[inline]
	pub fn data(&self) -> &'a ParameterData {
		self.data
	}
}

impl PartialEq for Parameter<'_> {
	fn eq(&self, other: &Self) -> bool {
		ptr::eq(self.data, other.data) && self.name == other.name
	}
}

impl Eq for Parameter<'_> {}

impl fmt::Debug for Parameter<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Parameter")
			.field("name", &self.name)
			.field("type", &self.data.type_name)
			.finish()
	}
}

/// A parameter's membership in one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet<'a> {
	data: &'a ParameterSetData,
}

impl<'a> ParameterSet<'a> {
	#[inline]
	pub fn position(&self) -> Option<i32> {
		self.data.position
	}

	#[inline]
	pub fn flags(&self) -> &'a [ParameterSetFlag] {
		&self.data.flags
	}

	#[inline]
	pub fn has_flag(&self, flag: ParameterSetFlag) -> bool {
		self.data.flags.contains(&flag)
	}

	#[inline]
	pub fn is_mandatory(&self) -> bool {
		self.has_flag(ParameterSetFlag::Mandatory)
	}

	/// True if the parameter accepts pipeline input by value or by property name.
	pub fn accepts_pipeline_input(&self) -> bool {
		self.has_flag(ParameterSetFlag::ValueFromPipeline)
			|| self.has_flag(ParameterSetFlag::ValueFromPipelineByPropertyName)
	}
}

/// How a command is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
	Cmdlet,
	Function { cmdlet_binding: bool },
}

/// Read-only view of one command record.
///
/// The parameter table is built once, on construction, and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Command<'a> {
	name: &'a str,
	kind: CommandKind,
	data: &'a CommandData,
	parameters: ParameterTable<'a>,
}

impl<'a> Command<'a> {
	/// Creates a query object with the default (strict) table options.
	///
	/// # Errors
	///
	/// Fails if the record's parameter aliases do not reconcile with its parameters.
	pub fn new(name: &'a str, data: &'a CommandData, kind: CommandKind) -> Result<Self> {
		Self::with_options(name, data, kind, &TableOptions::default())
	}

	/// Creates a query object, building its parameter table with `options`.
	///
	/// # Errors
	///
	/// Fails with the first integrity fault `options` does not tolerate. No partial command is
	/// returned.
	pub fn with_options(
		name: &'a str,
		data: &'a CommandData,
		kind: CommandKind,
		options: &TableOptions,
	) -> Result<Self> {
		let parameters = ParameterTable::build(
			name,
			data.parameters.as_ref(),
			data.parameter_aliases.as_ref(),
			options,
		)?;
		Ok(Self {
			name,
			kind,
			data,
			parameters,
		})
	}

	/// Creates a query object for a cmdlet record.
	pub fn cmdlet(name: &'a str, data: &'a CmdletData) -> Result<Self> {
		Self::new(name, &data.command, CommandKind::Cmdlet)
	}

	/// Creates a query object for a function record.
	pub fn function(name: &'a str, data: &'a FunctionData) -> Result<Self> {
		Self::new(
			name,
			&data.command,
			CommandKind::Function {
				cmdlet_binding: data.cmdlet_binding,
			},
		)
	}

	#[inline]
	pub fn name(&self) -> &'a str {
		self.name
	}

	#[inline]
	pub fn kind(&self) -> CommandKind {
		self.kind
	}

	/// True for cmdlets and for functions declared with `[CmdletBinding()]`.
	pub fn is_cmdlet_binding(&self) -> bool {
		match self.kind {
			CommandKind::Cmdlet => true,
			CommandKind::Function { cmdlet_binding } => cmdlet_binding,
		}
	}

	pub fn output_types(&self) -> &'a [String] {
		self.data.output_type.as_deref().unwrap_or_default()
	}

	pub fn parameter_sets(&self) -> &'a [String] {
		self.data.parameter_sets.as_deref().unwrap_or_default()
	}

	pub fn default_parameter_set(&self) -> Option<&'a str> {
		self.data.default_parameter_set.as_deref()
	}

	/// Every parameter, reachable by canonical name or alias.
	#[inline]
	pub fn parameters(&self) -> &ParameterTable<'a> {
		&self.parameters
	}

	/// Resolves a parameter by canonical name or alias, ignoring case.
	#[inline]
	pub fn parameter(&self, name: &str) -> Option<Parameter<'a>> {
		self.parameters.get(name)
	}

	/// Iterates the aliases that resolve on this command.
	pub fn parameter_aliases(&self) -> impl Iterator<Item = (&str, Parameter<'a>)> + '_ {
		self.parameters.aliases()
	}

	#[inline]
	pub fn is_parameter_alias(&self, name: &str) -> bool {
		self.parameters.is_alias(name)
	}
}

#[cfg(test)]
mod tests;
