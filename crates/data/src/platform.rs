use serde::{Deserialize, Serialize};

/// Machine architecture of the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
	X86,
	X64,
	Arm,
	Arm64,
}

/// Broad operating system family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
	Windows,
	Linux,
	#[serde(rename = "MacOS")]
	MacOs,
	#[default]
	Other,
}

/// Operating system description captured with a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperatingSystemData {
	/// Name as reported by `$PSVersionTable.OS`.
	#[serde(default)]
	pub name: Option<String>,
	/// Platform as reported by `$PSVersionTable.Platform`.
	#[serde(default)]
	pub platform: Option<String>,
	pub architecture: Architecture,
	#[serde(default)]
	pub family: OsFamily,
	/// Self-declared OS version (the kernel version on Linux).
	#[serde(default)]
	pub version: Option<String>,
	#[serde(default)]
	pub service_pack: Option<String>,
	/// Windows SKU id from the product info API.
	#[serde(default)]
	pub sku_id: Option<u32>,
	#[serde(default)]
	pub distribution_id: Option<String>,
	#[serde(default)]
	pub distribution_version: Option<String>,
	#[serde(default)]
	pub distribution_pretty_name: Option<String>,
}
