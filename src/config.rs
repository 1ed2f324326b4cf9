//! Runtime configuration: environment variables, then command-line overrides.

use anyhow::{anyhow, Result};

use crate::types::{Screen, TARGET_CORRECT_GUESSES};

pub const USAGE: &str = "\
usage: bug-hunt [help] [--target N] [--log PATH]

  help          start on the help screen
  --target N    distinct bad bugs needed to win (default 2)
  --log PATH    append a JSON line per handled event to PATH
  -h, --help    print this message

environment: BUG_HUNT_TARGET, BUG_HUNT_LOG_PATH, BUG_HUNT_START=game|help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub target: usize,
    pub log_path: Option<String>,
    pub start_screen: Screen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target: TARGET_CORRECT_GUESSES,
            log_path: None,
            start_screen: Screen::Game,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(AppConfig),
    PrintUsage,
}

impl AppConfig {
    /// Read `BUG_HUNT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = non_blank(lookup("BUG_HUNT_TARGET")) {
            config.target = parse_target(&v)
                .map_err(|_| anyhow!("BUG_HUNT_TARGET: invalid value: {}", v))?;
        }

        config.log_path = non_blank(lookup("BUG_HUNT_LOG_PATH"));

        if let Some(v) = non_blank(lookup("BUG_HUNT_START")) {
            config.start_screen = Screen::from_str(&v)
                .ok_or_else(|| anyhow!("BUG_HUNT_START: unknown screen: {}", v))?;
        }

        Ok(config)
    }
}

/// Apply command-line arguments (without the program name) on top of `base`.
pub fn parse_args(base: AppConfig, args: &[String]) -> Result<CliCommand> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(CliCommand::PrintUsage),
            "help" => config.start_screen = Screen::Help,
            "--target" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --target"))?;
                config.target =
                    parse_target(v).map_err(|_| anyhow!("invalid --target value: {}", v))?;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_path = non_blank(Some(v.clone()));
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(CliCommand::Run(config))
}

fn parse_target(s: &str) -> Result<usize, std::num::ParseIntError> {
    s.trim().parse::<usize>()
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.target, 2);
    }

    #[test]
    fn environment_overrides() {
        let config = AppConfig::from_lookup(env(&[
            ("BUG_HUNT_TARGET", " 1 "),
            ("BUG_HUNT_LOG_PATH", "/tmp/bugs.jsonl"),
            ("BUG_HUNT_START", "Help"),
        ]))
        .unwrap();
        assert_eq!(config.target, 1);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/bugs.jsonl"));
        assert_eq!(config.start_screen, Screen::Help);
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let config = AppConfig::from_lookup(env(&[("BUG_HUNT_LOG_PATH", "   ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn bad_environment_values_are_errors() {
        assert!(AppConfig::from_lookup(env(&[("BUG_HUNT_TARGET", "two")])).is_err());
        assert!(AppConfig::from_lookup(env(&[("BUG_HUNT_START", "menu")])).is_err());
    }

    #[test]
    fn args_override_environment() {
        let base = AppConfig {
            target: 1,
            ..AppConfig::default()
        };
        let cmd = parse_args(base, &args(&["help", "--target", "2", "--log", "out.jsonl"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(AppConfig {
                target: 2,
                log_path: Some("out.jsonl".into()),
                start_screen: Screen::Help,
            })
        );
    }

    #[test]
    fn help_flag_wins() {
        let cmd = parse_args(AppConfig::default(), &args(&["--target", "1", "-h"])).unwrap();
        assert_eq!(cmd, CliCommand::PrintUsage);
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(parse_args(AppConfig::default(), &args(&["--target"])).is_err());
        assert!(parse_args(AppConfig::default(), &args(&["--target", "x"])).is_err());
        assert!(parse_args(AppConfig::default(), &args(&["--log"])).is_err());
        assert!(parse_args(AppConfig::default(), &args(&["--fast"])).is_err());
    }
}
