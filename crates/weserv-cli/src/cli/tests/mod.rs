//! CLI parse tests.

use super::{Cli, CliCommand, UrlArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_url(args: &[&str]) -> UrlArgs {
    let mut full = vec!["weserv", "url"];
    full.extend_from_slice(args);
    match parse(&full) {
        CliCommand::Url(args) => args,
        _ => panic!("expected Url"),
    }
}

mod build;
