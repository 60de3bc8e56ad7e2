use serde::{Deserialize, Serialize};

use crate::ProfileMap;

/// Binding behaviors a parameter can have within one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterSetFlag {
	Mandatory,
	ValueFromPipeline,
	ValueFromPipelineByPropertyName,
	ValueFromRemainingArguments,
}

/// How a parameter participates in a single parameter set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterSetData {
	/// Positional index, if the parameter can be bound by position in this set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position: Option<i32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub flags: Vec<ParameterSetFlag>,
}

/// Attributes of one canonical parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterData {
	/// Full name of the parameter's .NET type.
	#[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
	pub type_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parameter_sets: Option<ProfileMap<ParameterSetData>>,
	#[serde(default)]
	pub dynamic: bool,
}

/// Fields shared by every kind of command record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandData {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub output_type: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parameter_sets: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_parameter_set: Option<String>,
	/// Canonical parameter name to parameter attributes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parameters: Option<ProfileMap<ParameterData>>,
	/// Alias name to canonical parameter name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parameter_aliases: Option<ProfileMap<String>>,
}

/// A compiled cmdlet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmdletData {
	#[serde(flatten)]
	pub command: CommandData,
}

/// A script function, which may or may not opt into cmdlet binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionData {
	#[serde(flatten)]
	pub command: CommandData,
	#[serde(default)]
	pub cmdlet_binding: bool,
}
