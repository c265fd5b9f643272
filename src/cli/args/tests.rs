use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::SortArg;
use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["ecodir"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn search_accepts_filters_and_global_flags_after_subcommand() {
	let parsed = CliArgs::parse_from([
		"ecodir", "search", "--keyword", "dex", "--tag", "defi", "--page", "2", "--sort", "a-z",
		"-vv", "--output", "json",
	]);
	assert_eq!(
		parsed.command,
		Some(Command::Search {
			keyword: Some("dex".into()),
			tag: Some("defi".into()),
			page: 2,
		})
	);
	assert_eq!(parsed.sort, Some(SortArg::Alphabetical));
	assert_eq!(parsed.verbose, 2);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn show_requires_an_id() {
	assert!(CliArgs::try_parse_from(["ecodir", "show"]).is_err());
	let parsed = CliArgs::parse_from(["ecodir", "show", "abc"]);
	assert_eq!(parsed.command, Some(Command::Show { id: "abc".into() }));
}

#[test]
fn sort_labels_match_engine_labels() {
	assert_eq!(SortArg::Alphabetical.as_str(), "A - Z");
	assert_eq!(SortArg::Followers.as_str(), "Followers");
}
