//! dagmatch CLI - validate and match scene node identifiers
//!
//! Thin wrapper over the dagmatch library: all validation and matching
//! logic lives in the library, this binary only parses arguments and
//! formats output.

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use dagmatch::{
    is_valid, make_match_full_name_function, make_match_full_path_function,
    make_match_name_function, make_match_path_function, AddressLevel, Matcher,
};

#[derive(Parser)]
#[command(name = "dagmatch")]
#[command(version = dagmatch::VERSION)]
#[command(about = "Validate and match scene node names, paths, and patterns")]
#[command(after_help = "EXAMPLES:
  # Validate a path pattern
  dagmatch check --level path --wildcards '*|child_*'

  # Validate a relative full path
  dagmatch check --level full-path --relative '->|node'

  # Match candidates against a name pattern (prints the ones that match)
  dagmatch match --level name 'node*' node node_awesome

  # Match paths, exit code 1 when nothing matches
  dagmatch match --level path '*|*Shape*' '|master|light' '|master|lightShape'
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a string is well-formed at an addressing level
    Check {
        /// The string to check
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Addressing level to check against
        #[arg(long, value_enum, default_value = "name")]
        level: Level,

        /// Accept wildcard characters
        #[arg(long)]
        wildcards: bool,

        /// Accept one leading namespace or underworld delimiter
        #[arg(long)]
        relative: bool,
    },

    /// Match candidate strings against a pattern
    Match {
        /// The pattern, wildcards allowed
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Candidate strings to test
        #[arg(required = true, allow_hyphen_values = true)]
        candidates: Vec<String>,

        /// Addressing level to match at
        #[arg(long, value_enum, default_value = "name")]
        level: Level,

        /// Accept one leading namespace or underworld delimiter
        #[arg(long)]
        relative: bool,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum Level {
    Name,
    FullName,
    Path,
    FullPath,
    /// Well-formed at any of the four levels (check only)
    Any,
}

impl From<Level> for AddressLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Name => AddressLevel::Name,
            Level::FullName => AddressLevel::FullName,
            Level::Path => AddressLevel::Path,
            Level::FullPath => AddressLevel::FullPath,
            Level::Any => AddressLevel::Any,
        }
    }
}

fn build_matcher(pattern: &str, level: AddressLevel, relative: bool) -> dagmatch::Result<Matcher> {
    match level {
        AddressLevel::Name => make_match_name_function(pattern),
        AddressLevel::FullName => make_match_full_name_function(pattern, relative),
        AddressLevel::Path => make_match_path_function(pattern),
        AddressLevel::FullPath => make_match_full_path_function(pattern, relative),
        AddressLevel::Any => unreachable!("rejected before matcher construction"),
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            value,
            level,
            wildcards,
            relative,
        } => {
            if is_valid(&value, level.into(), wildcards, relative) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Match {
            pattern,
            candidates,
            level,
            relative,
        } => {
            let level = AddressLevel::from(level);
            if level == AddressLevel::Any {
                bail!("the any level only applies to check");
            }
            let matcher = build_matcher(&pattern, level, relative)?;
            let mut matched = false;
            for candidate in &candidates {
                if !is_valid(candidate, level, false, relative) {
                    bail!("the {level} candidate '{candidate}' is not valid");
                }
                if matcher.is_match(candidate) {
                    println!("{candidate}");
                    matched = true;
                }
            }
            Ok(if matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
