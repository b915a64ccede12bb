//! canonwire CLI: generate or verify golden fixtures.
//!
//! - `canonwire generate`: write `varint.json`, `time.json`, `block_id.json`
//!   and `pubkey.json` into the output directory
//! - `canonwire verify`: compare those files with a fresh generation
//!
//! Exits 0 on success, 1 on any error or mismatch.

mod commands;
mod parse;

use std::process;

use canonwire_fixtures::{
    verify_fixture_dir, write_fixture_set, FixtureError, FixtureGenerator, GeneratorConfig,
};
use tracing::{error, info};

use commands::build_cli;
use parse::{log_level, matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&matches))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let result = match action {
        CliAction::Generate(config) => run_generate(config),
        CliAction::Verify(config) => run_verify(config),
    };

    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run_generate(config: GeneratorConfig) -> Result<i32, FixtureError> {
    let generator = FixtureGenerator::with_default_registry(config)?;
    let set = generator.generate_all()?;
    let written = write_fixture_set(&generator.config().out_dir, &set)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(0)
}

fn run_verify(config: GeneratorConfig) -> Result<i32, FixtureError> {
    let generator = FixtureGenerator::with_default_registry(config)?;
    let set = generator.generate_all()?;
    let mismatches = verify_fixture_dir(&generator.config().out_dir, &set)?;
    if mismatches.is_empty() {
        info!("All {} records match", set.len());
        return Ok(0);
    }
    for mismatch in &mismatches {
        eprintln!("{}", mismatch);
    }
    Ok(1)
}
