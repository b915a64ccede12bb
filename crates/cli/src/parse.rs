//! ArgMatches → CliAction conversion.

use canonwire_fixtures::GeneratorConfig;
use clap::ArgMatches;
use tracing::Level;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Generate and write fixtures.
    Generate(GeneratorConfig),
    /// Compare existing fixtures with a fresh generation.
    Verify(GeneratorConfig),
}

/// Map `-v`/`-q` to a log level. Default is `INFO`.
pub fn log_level(matches: &ArgMatches) -> Level {
    if matches.get_flag("quiet") {
        return Level::ERROR;
    }
    match matches.get_count("verbose") {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Translate parsed arguments into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "generate" => Ok(CliAction::Generate(parse_config(sub_matches)?)),
        "verify" => Ok(CliAction::Verify(parse_config(sub_matches)?)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_config(m: &ArgMatches) -> Result<GeneratorConfig, String> {
    let mut config = GeneratorConfig::new();
    if let Some(dir) = m.get_one::<String>("out-dir") {
        config = config.out_dir(dir);
    }
    if let Some(zone) = m.get_one::<String>("zone") {
        if zone.is_empty() {
            return Err("--zone must not be empty".to_string());
        }
        config = config.zone(zone.as_str());
    }
    if let Some(secret) = m.get_one::<String>("secret") {
        config = config.secret(secret.as_str());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_generate_defaults() {
        let action = matches_to_action(&parse(&["canonwire", "generate"])).unwrap();
        assert_eq!(action, CliAction::Generate(GeneratorConfig::default()));
    }

    #[test]
    fn test_verify_with_overrides() {
        let m = parse(&[
            "canonwire", "verify", "--out-dir", "out", "--zone", "UTC", "--secret", "bar",
        ]);
        match matches_to_action(&m).unwrap() {
            CliAction::Verify(config) => {
                assert_eq!(config.out_dir, PathBuf::from("out"));
                assert_eq!(config.zone, "UTC");
                assert_eq!(config.secret, "bar");
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_empty_zone_rejected() {
        let m = parse(&["canonwire", "generate", "--zone", ""]);
        assert!(matches_to_action(&m).is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(&parse(&["canonwire", "generate"])), Level::INFO);
        assert_eq!(log_level(&parse(&["canonwire", "-v", "generate"])), Level::DEBUG);
        assert_eq!(log_level(&parse(&["canonwire", "generate", "-vv"])), Level::TRACE);
        assert_eq!(log_level(&parse(&["canonwire", "-q", "verify"])), Level::ERROR);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(build_cli().try_get_matches_from(["canonwire"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(build_cli()
            .try_get_matches_from(["canonwire", "-q", "-v", "generate"])
            .is_err());
    }
}
