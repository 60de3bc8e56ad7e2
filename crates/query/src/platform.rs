//! Operating system query objects.

use pscompat_data::{Architecture, OperatingSystemData, OsFamily};

/// Windows edition, decoded from the product info SKU id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowsSku {
	Undefined,
	Ultimate,
	HomeBasic,
	HomePremium,
	Enterprise,
	Business,
	StandardServer,
	DatacenterServer,
	SmallBusinessServer,
	EnterpriseServer,
	Starter,
	DatacenterServerCore,
	StandardServerCore,
	EnterpriseServerCore,
	WebServer,
	WebServerCore,
	HyperV,
	Professional,
	CoreN,
	CoreCountrySpecific,
	CoreSingleLanguage,
	Core,
	Education,
	EnterpriseS,
	ProfessionalWorkstation,
	ServerRdsh,
	/// Any id without a named variant.
	Other(u32),
}

impl From<u32> for WindowsSku {
	fn from(id: u32) -> Self {
		match id {
			0x00 => Self::Undefined,
			0x01 => Self::Ultimate,
			0x02 => Self::HomeBasic,
			0x03 => Self::HomePremium,
			0x04 => Self::Enterprise,
			0x06 => Self::Business,
			0x07 => Self::StandardServer,
			0x08 => Self::DatacenterServer,
			0x09 => Self::SmallBusinessServer,
			0x0A => Self::EnterpriseServer,
			0x0B => Self::Starter,
			0x0C => Self::DatacenterServerCore,
			0x0D => Self::StandardServerCore,
			0x0E => Self::EnterpriseServerCore,
			0x11 => Self::WebServer,
			0x1D => Self::WebServerCore,
			0x2A => Self::HyperV,
			0x30 => Self::Professional,
			0x62 => Self::CoreN,
			0x63 => Self::CoreCountrySpecific,
			0x64 => Self::CoreSingleLanguage,
			0x65 => Self::Core,
			0x79 => Self::Education,
			0x7D => Self::EnterpriseS,
			0xA1 => Self::ProfessionalWorkstation,
			0xAF => Self::ServerRdsh,
			other => Self::Other(other),
		}
	}
}

/// Read-only view of a profile's operating system record.
#[derive(Debug, Clone, Copy)]
pub struct OperatingSystem<'a> {
	data: &'a OperatingSystemData,
}

impl<'a> OperatingSystem<'a> {
	pub fn new(data: &'a OperatingSystemData) -> Self {
		Self { data }
	}

	/// Name as reported by `$PSVersionTable.OS`.
	pub fn name(&self) -> Option<&'a str> {
		self.data.name.as_deref()
	}

	/// Platform as reported by `$PSVersionTable.Platform`.
	pub fn platform(&self) -> Option<&'a str> {
		self.data.platform.as_deref()
	}

	pub fn architecture(&self) -> Architecture {
		self.data.architecture
	}

	pub fn family(&self) -> OsFamily {
		self.data.family
	}

	/// Self-declared version; the kernel version on Linux.
	pub fn version(&self) -> Option<&'a str> {
		self.data.version.as_deref()
	}

	pub fn service_pack(&self) -> Option<&'a str> {
		self.data.service_pack.as_deref()
	}

	pub fn sku_id(&self) -> Option<u32> {
		self.data.sku_id
	}

	pub fn distribution_id(&self) -> Option<&'a str> {
		self.data.distribution_id.as_deref()
	}

	pub fn distribution_version(&self) -> Option<&'a str> {
		self.data.distribution_version.as_deref()
	}

	pub fn distribution_pretty_name(&self) -> Option<&'a str> {
		self.data.distribution_pretty_name.as_deref()
	}

	/// Human-readable name: the distribution's pretty name on Linux, the OS name elsewhere.
	pub fn friendly_name(&self) -> Option<&'a str> {
		match self.family() {
			OsFamily::Linux => self.distribution_pretty_name(),
			_ => self.name(),
		}
	}

	/// Decoded Windows SKU, if the profile recorded one.
	pub fn sku(&self) -> Option<WindowsSku> {
		self.data.sku_id.map(WindowsSku::from)
	}
}
