//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn parse_check_defaults() {
    match parse(&["voxcheck", "check"]) {
        CliCommand::Check { data_root, json } => {
            assert!(data_root.is_none());
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_check_with_flags() {
    match parse(&["voxcheck", "check", "--data-root", "/tmp/voices", "--json"]) {
        CliCommand::Check { data_root, json } => {
            assert_eq!(data_root, Some(PathBuf::from("/tmp/voices")));
            assert!(json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_list() {
    match parse(&["voxcheck", "list", "--data-root", "/tmp/voices"]) {
        CliCommand::List { data_root } => {
            assert_eq!(data_root, Some(PathBuf::from("/tmp/voices")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn parse_checksum() {
    match parse(&["voxcheck", "checksum", "voice.cg.flitevox"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "voice.cg.flitevox"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["voxcheck"]).is_err());
}
