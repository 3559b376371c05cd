//! Provides parsing and validation of command line arguments into the
//! logger configuration, and opens the recorded event stream to replay.

use xmlbuildlog::{LoggerConfig, Verbosity};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

pub mod input;

const OUTPUT_ENV: &str = "XMLBUILDLOG_OUTPUT";
const VERBOSITY_ENV: &str = "XMLBUILDLOG_VERBOSITY";

pub struct CLI {
    matches: ArgMatches,
}

impl CLI {
    pub fn init() -> Result<CLI> {
        let matches = get_cli_definition().get_matches();
        Ok(CLI { matches })
    }

    #[cfg(test)]
    fn from_args(args: &[&str]) -> Result<CLI> {
        let matches = get_cli_definition().try_get_matches_from(args)?;
        Ok(CLI { matches })
    }

    pub fn get_logger_config(&self) -> Result<LoggerConfig> {
        self.resolve_config(|key| std::env::var(key).ok())
    }

    /// Flags take precedence over the environment, which takes precedence
    /// over the defaults.
    fn resolve_config(&self, env: impl Fn(&str) -> Option<String>) -> Result<LoggerConfig> {
        let verbosity = match self.matches.get_one::<String>("verbosity").cloned().or_else(|| env(VERBOSITY_ENV)) {
            Some(v) => v.parse::<Verbosity>()?,
            None => Verbosity::default(),
        };

        let output = self
            .matches
            .get_one::<String>("output")
            .cloned()
            .or_else(|| env(OUTPUT_ENV))
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(LoggerConfig { output, verbosity })
    }

    pub fn get_input(&self) -> Result<Box<dyn BufRead>> {
        match self.matches.get_one::<String>("input").map(String::as_str) {
            None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
            Some(path) => {
                let file = File::open(path).with_context(|| format!("Failed to open event stream {}", path))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

fn get_cli_definition() -> Command {
    Command::new("xmlbuildlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes a recorded stream of build events as a single XML log")
        .arg(
            Arg::new("input")
                .help("JSON lines event stream to read, or - for standard input")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("File to write the XML log to; standard output when omitted")
                .long("output")
                .short('o')
                .value_name("PATH")
                .num_args(1),
        )
        .arg(
            Arg::new("verbosity")
                .help("One of q[uiet], m[inimal], n[ormal], d[etailed], diag[nostic]")
                .long("verbosity")
                .short('v')
                .value_name("LEVEL")
                .num_args(1),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let cli = CLI::from_args(&["xmlbuildlog"]).unwrap();
        let config = cli.resolve_config(no_env).unwrap();
        assert_eq!(config, LoggerConfig { output: None, verbosity: Verbosity::Normal });
    }

    #[test]
    fn test_flags() {
        let cli = CLI::from_args(&["xmlbuildlog", "events.jsonl", "-o", "build.xml", "-v", "diag"]).unwrap();
        let config = cli.resolve_config(no_env).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("build.xml")));
        assert_eq!(config.verbosity, Verbosity::Diagnostic);
    }

    #[test]
    fn test_env_fallback() {
        let env = |key: &str| match key {
            OUTPUT_ENV => Some("env.xml".to_string()),
            VERBOSITY_ENV => Some("quiet".to_string()),
            _ => None,
        };

        let cli = CLI::from_args(&["xmlbuildlog"]).unwrap();
        let config = cli.resolve_config(env).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("env.xml")));
        assert_eq!(config.verbosity, Verbosity::Quiet);

        let cli = CLI::from_args(&["xmlbuildlog", "--verbosity", "detailed"]).unwrap();
        let config = cli.resolve_config(env).unwrap();
        assert_eq!(config.verbosity, Verbosity::Detailed);
    }

    #[test]
    fn test_bad_verbosity() {
        let cli = CLI::from_args(&["xmlbuildlog", "-v", "loud"]).unwrap();
        assert!(cli.resolve_config(no_env).is_err());
    }
}
