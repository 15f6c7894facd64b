// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::io::{Read, Write};
use std::path::PathBuf;

use crate::helpers::input::read_input;
use anyhow::Result;
use clap::{ArgAction, Parser};
use sr_config::{load_config, RecoveryConfig};
use sr_shares::recover_secret;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(
    about = "Reconstruct a shared secret from k shares by exact Lagrange interpolation at zero",
    long_about = None,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), ")")
)]
pub struct Cli {
    /// JSON share document. Reads standard input when omitted
    pub input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `recover -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    /// Loads configuration, reads the document and writes the secret to `out`.
    #[instrument(skip_all)]
    pub fn execute<R: Read, W: Write>(self, stdin: R, mut out: W) -> Result<()> {
        let config = self.load_config()?;
        if let Some(path) = config.config_file() {
            info!("Config loaded from: {:?}", path);
        }

        let input = read_input(self.input.as_deref(), stdin)?;
        let secret = recover_secret(&input, config.strict(), &config.interpolator())?;

        writeln!(out, "{secret}")?;
        Ok(())
    }

    /// Runs [`Cli::execute`] and reports a failure on `err` as `Error: ...`.
    ///
    /// Returns the process exit status: 0 on success, 1 on any error.
    pub fn run_with_status<R: Read, W: Write, E: Write>(
        self,
        stdin: R,
        out: W,
        mut err: E,
    ) -> i32 {
        match self.execute(stdin, out) {
            Ok(()) => 0,
            Err(e) => {
                // Nothing left to report to if stderr itself is gone.
                let _ = writeln!(err, "Error: {:#}", e);
                1
            }
        }
    }

    pub fn load_config(&self) -> Result<RecoveryConfig> {
        load_config(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const SAMPLE: &str = r#"{
        "keys": {"n": 4, "k": 3},
        "1": {"base": "10", "value": "4"},
        "2": {"base": "2", "value": "111"},
        "3": {"base": "10", "value": "12"},
        "6": {"base": "4", "value": "213"}
    }"#;

    fn run(args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        cli.execute(stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_log_level() -> Result<()> {
        assert_eq!(Cli::try_parse_from(["recover"])?.log_level(), Level::WARN);
        assert_eq!(Cli::try_parse_from(["recover", "-v"])?.log_level(), Level::INFO);
        assert_eq!(
            Cli::try_parse_from(["recover", "-vv"])?.log_level(),
            Level::DEBUG
        );
        assert_eq!(
            Cli::try_parse_from(["recover", "-vvvv"])?.log_level(),
            Level::TRACE
        );
        assert_eq!(Cli::try_parse_from(["recover", "-q"])?.log_level(), Level::ERROR);
        assert!(Cli::try_parse_from(["recover", "-q", "-v"]).is_err());
        Ok(())
    }

    #[test]
    fn test_recovers_from_stdin() {
        Jail::expect_with(|_jail| {
            let out = run(&["recover"], SAMPLE).map_err(|e| e.to_string())?;
            assert_eq!(out, "3\n");
            Ok(())
        });
    }

    #[test]
    fn test_recovers_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("shares.json", SAMPLE)?;
            let out = run(&["recover", "shares.json"], "").map_err(|e| e.to_string())?;
            assert_eq!(out, "3\n");
            Ok(())
        });
    }

    #[test]
    fn test_strict_config_rejects_stray_entries() {
        Jail::expect_with(|jail| {
            jail.create_file("strict.yaml", "strict: true\n")?;
            let doc = r#"{"keys": {"k": 1}, "comment": "hello", "1": {"base": "10", "value": "9"}}"#;

            let out = run(&["recover"], doc).map_err(|e| e.to_string())?;
            assert_eq!(out, "9\n");

            let err = run(&["recover", "--config", "strict.yaml"], doc)
                .expect_err("strict mode should reject the comment entry");
            assert!(err.to_string().contains("comment"));
            Ok(())
        });
    }

    #[test]
    fn test_reports_insufficient_shares() {
        Jail::expect_with(|_jail| {
            let doc = r#"{"keys": {"k": 2}, "1": {"base": "10", "value": "9"}}"#;
            let err = run(&["recover"], doc).expect_err("one share cannot satisfy k = 2");
            assert_eq!(
                err.to_string(),
                "Not enough points to interpolate: have 1, need 2"
            );
            Ok(())
        });
    }

    #[test]
    fn test_exit_status_and_error_line() {
        Jail::expect_with(|_jail| {
            let (mut out, mut err) = (Vec::new(), Vec::new());
            let cli = Cli::try_parse_from(["recover"]).map_err(|e| e.to_string())?;
            assert_eq!(cli.run_with_status(SAMPLE.as_bytes(), &mut out, &mut err), 0);
            assert_eq!(out, b"3\n");
            assert!(err.is_empty());

            let (mut out, mut err) = (Vec::new(), Vec::new());
            let doc = r#"{"keys": {"k": 2}, "1": {"base": "10", "value": "9"}}"#;
            let cli = Cli::try_parse_from(["recover"]).map_err(|e| e.to_string())?;
            assert_eq!(cli.run_with_status(doc.as_bytes(), &mut out, &mut err), 1);
            assert!(out.is_empty());
            assert_eq!(
                String::from_utf8_lossy(&err),
                "Error: Not enough points to interpolate: have 1, need 2\n"
            );

            let mut err = Vec::new();
            let cli = Cli::try_parse_from(["recover", "missing.json"]).map_err(|e| e.to_string())?;
            assert_eq!(cli.run_with_status("".as_bytes(), Vec::new(), &mut err), 1);
            let err = String::from_utf8_lossy(&err);
            assert!(err.starts_with("Error: Failed to open file: missing.json"));
            Ok(())
        });
    }
}
