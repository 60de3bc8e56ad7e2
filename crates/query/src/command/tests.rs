use pretty_assertions::assert_eq;
use pscompat_data::{
	CmdletData, CommandData, FunctionData, ParameterData, ParameterSetData, ParameterSetFlag,
	ProfileMap,
};

use super::*;
use crate::error::QueryError;
use crate::table::DanglingAliasPolicy;

fn get_child_item() -> CmdletData {
	let path_sets: ProfileMap<ParameterSetData> = [
		(
			"Items".to_owned(),
			ParameterSetData {
				position: Some(0),
				flags: vec![
					ParameterSetFlag::ValueFromPipeline,
					ParameterSetFlag::ValueFromPipelineByPropertyName,
				],
			},
		),
	]
	.into_iter()
	.collect();

	let parameters: ProfileMap<ParameterData> = [
		(
			"Path".to_owned(),
			ParameterData {
				type_name: Some("System.String[]".to_owned()),
				parameter_sets: Some(path_sets),
				dynamic: false,
			},
		),
		(
			"LiteralPath".to_owned(),
			ParameterData {
				type_name: Some("System.String[]".to_owned()),
				parameter_sets: Some(
					[(
						"LiteralItems".to_owned(),
						ParameterSetData {
							position: None,
							flags: vec![ParameterSetFlag::Mandatory],
						},
					)]
					.into_iter()
					.collect(),
				),
				dynamic: false,
			},
		),
		(
			"Directory".to_owned(),
			ParameterData {
				type_name: Some("System.Management.Automation.SwitchParameter".to_owned()),
				parameter_sets: None,
				dynamic: true,
			},
		),
	]
	.into_iter()
	.collect();

	let aliases: ProfileMap<String> = [
		("PSPath", "LiteralPath"),
		("LP", "LiteralPath"),
		("ad", "Directory"),
		("d", "Directory"),
	]
	.into_iter()
	.map(|(a, t)| (a.to_owned(), t.to_owned()))
	.collect();

	CmdletData {
		command: CommandData {
			output_type: Some(vec![
				"System.IO.FileInfo".to_owned(),
				"System.IO.DirectoryInfo".to_owned(),
			]),
			parameter_sets: Some(vec!["Items".to_owned(), "LiteralItems".to_owned()]),
			default_parameter_set: Some("Items".to_owned()),
			parameters: Some(parameters),
			parameter_aliases: Some(aliases),
		},
	}
}

#[test]
fn test_cmdlet_forwards_record_fields() {
	let data = get_child_item();
	let cmd = Command::cmdlet("Get-ChildItem", &data).unwrap();

	assert_eq!(cmd.name(), "Get-ChildItem");
	assert_eq!(cmd.kind(), CommandKind::Cmdlet);
	assert!(cmd.is_cmdlet_binding());
	assert_eq!(cmd.output_types(), ["System.IO.FileInfo", "System.IO.DirectoryInfo"]);
	assert_eq!(cmd.parameter_sets(), ["Items", "LiteralItems"]);
	assert_eq!(cmd.default_parameter_set(), Some("Items"));
}

#[test]
fn test_parameter_resolution_through_command() {
	let data = get_child_item();
	let cmd = Command::cmdlet("Get-ChildItem", &data).unwrap();

	let literal = cmd.parameter("literalpath").unwrap();
	assert_eq!(cmd.parameter("PSPath"), Some(literal));
	assert_eq!(cmd.parameter("lp"), Some(literal));
	assert_eq!(literal.name(), "LiteralPath");
	assert!(cmd.is_parameter_alias("pspath"));
	assert!(!cmd.is_parameter_alias("LiteralPath"));
	assert_eq!(cmd.parameter("Recurse"), None);

	let aliases: Vec<_> = cmd.parameter_aliases().map(|(a, p)| (a, p.name())).collect();
	assert_eq!(
		aliases,
		[
			("PSPath", "LiteralPath"),
			("LP", "LiteralPath"),
			("ad", "Directory"),
			("d", "Directory"),
		]
	);
	assert_eq!(cmd.parameters().canonical_len(), 3);
	assert_eq!(cmd.parameters().len(), 7);
}

#[test]
fn test_parameter_views() {
	let data = get_child_item();
	let cmd = Command::cmdlet("Get-ChildItem", &data).unwrap();

	let path = cmd.parameter("path").unwrap();
	assert_eq!(path.type_name(), Some("System.String[]"));
	assert!(!path.is_dynamic());
	let items = path.parameter_set("ITEMS").unwrap();
	assert_eq!(items.position(), Some(0));
	assert!(!items.is_mandatory());
	assert!(items.accepts_pipeline_input());

	let literal = cmd.parameter("PSPath").unwrap();
	let sets: Vec<_> = literal.parameter_sets().map(|(name, _)| name).collect();
	assert_eq!(sets, ["LiteralItems"]);
	assert!(literal.parameter_set("LiteralItems").unwrap().is_mandatory());
	assert!(literal.parameter_set("Items").is_none());

	let directory = cmd.parameter("ad").unwrap();
	assert!(directory.is_dynamic());
	assert_eq!(directory.parameter_sets().count(), 0);
}

#[test]
fn test_function_binding_follows_record() {
	let advanced = FunctionData {
		command: CommandData::default(),
		cmdlet_binding: true,
	};
	let simple = FunctionData::default();

	let cmd = Command::function("Invoke-Thing", &advanced).unwrap();
	assert!(cmd.is_cmdlet_binding());
	assert_eq!(cmd.kind(), CommandKind::Function { cmdlet_binding: true });

	let cmd = Command::function("helper", &simple).unwrap();
	assert!(!cmd.is_cmdlet_binding());
	assert!(cmd.output_types().is_empty());
	assert!(cmd.parameter_sets().is_empty());
	assert_eq!(cmd.default_parameter_set(), None);
	assert!(cmd.parameters().is_empty());
}

#[test]
fn test_broken_record_does_not_affect_siblings() {
	let good = get_child_item();
	let mut broken = get_child_item();
	broken
		.command
		.parameter_aliases
		.get_or_insert_with(Default::default)
		.insert("x".to_owned(), "NoSuchParam".to_owned());

	let records = [("Get-ChildItem", &good), ("Get-Broken", &broken)];
	let built: Vec<_> = records
		.iter()
		.map(|(name, data)| Command::cmdlet(name, data))
		.collect();

	assert!(built[0].is_ok());
	assert_eq!(
		built[1].as_ref().unwrap_err(),
		&QueryError::DanglingAliasReference {
			command: "Get-Broken".to_owned(),
			alias: "x".to_owned(),
			target: "NoSuchParam".to_owned(),
		}
	);

	let options = TableOptions::default().on_dangling_alias(DanglingAliasPolicy::Skip);
	let lenient =
		Command::with_options("Get-Broken", &broken.command, CommandKind::Cmdlet, &options)
			.unwrap();
	assert_eq!(lenient.parameter("x"), None);
	assert_eq!(lenient.parameters().collisions().len(), 1);
}
