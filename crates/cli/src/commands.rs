//! Clap command tree.

use canonwire_fixtures::config::{DEFAULT_OUT_DIR, DEFAULT_SECRET, DEFAULT_ZONE};
use clap::{Arg, ArgAction, Command};

fn fixture_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("out-dir")
            .long("out-dir")
            .short('o')
            .value_name("DIR")
            .default_value(DEFAULT_OUT_DIR)
            .help("Directory holding the fixture files"),
    )
    .arg(
        Arg::new("zone")
            .long("zone")
            .value_name("NAME")
            .default_value(DEFAULT_ZONE)
            .help("Time zone the fixed timestamp is constructed in"),
    )
    .arg(
        Arg::new("secret")
            .long("secret")
            .value_name("TEXT")
            .default_value(DEFAULT_SECRET)
            .help("Secret the Ed25519 key is derived from"),
    )
}

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("canonwire")
        .about("Golden fixtures for the canonwire binary codec")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("More log output (repeatable)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(fixture_args(
            Command::new("generate").about("Write fresh fixture files"),
        ))
        .subcommand(fixture_args(
            Command::new("verify").about("Check fixture files against a fresh generation"),
        ))
}
