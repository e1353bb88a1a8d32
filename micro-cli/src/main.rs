//! Micro CLI - Command line interface
//!
//! Validates one Micro program read from a file or standard input.
//! Silence and exit code 0 mean the program was accepted.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod logging;

use crate::config::LogConfig;
use micro_api::{CheckConfig, LogFormat, LogLevel, MicroConfig, RunConfig};

#[derive(Parser)]
#[command(
    name = "micro",
    about = "Micro programming language - syntax checker",
    version
)]
struct Cli {
    /// Source file path, or `-` to read standard input
    #[arg(value_name = "PATH")]
    path: String,

    /// Number of errors a stage tolerates before giving up
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    max_errors: Option<u64>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log format: pretty, compact, json
    #[arg(long, value_name = "FORMAT", value_parser = parse_log_format)]
    log_format: Option<LogFormat>,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the scanned tokens as JSON to stdout before parsing
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let cli = Cli::parse();

    // Flags take precedence over the config file
    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let log_config = LogConfig::from(&config.logging);
    if let Err(e) = logging::init(&log_config, config.logging.format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Merge the optional config file with command-line flags
fn build_config(cli: &Cli) -> Result<MicroConfig, String> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => MicroConfig::default(),
    };

    if let Some(n) = cli.max_errors {
        config.check = CheckConfig {
            max_errors: usize::try_from(n).unwrap_or(usize::MAX),
        };
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Read and parse a JSON config file
fn read_config_file(path: &Path) -> Result<MicroConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error: Cannot read config '{}': {}", path.display(), e))?;

    MicroConfig::from_json_str(&content).map_err(|e| format!("{} ('{}')", e, path.display()))
}

fn run(cli: &Cli, config: &MicroConfig) -> Result<(), String> {
    let run_config = RunConfig::from_config(config);
    debug!(target: "micro::cli", ?run_config, "Resolved configuration");

    if cli.path == "-" {
        info!(target: "micro::cli", "Checking stdin");
        check_reader(io::stdin().lock(), &run_config, cli.dump_tokens)
    } else {
        info!(target: "micro::cli", path = %cli.path, "Checking file");
        let file = File::open(&cli.path)
            .map_err(|e| format!("open {}: {}", cli.path, e))?;
        check_reader(BufReader::new(file), &run_config, cli.dump_tokens)
    }
}

fn check_reader<R: BufRead>(reader: R, config: &RunConfig, dump_tokens: bool) -> Result<(), String> {
    if !dump_tokens {
        let output = micro_api::check(reader, config).map_err(|e| e.to_string())?;
        debug!(target: "micro::cli", tokens = output.token_count, "Program accepted");
        return Ok(());
    }

    let tokens = micro_api::scan(reader, config).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&tokens).map_err(|e| e.to_string())?;
    println!("{}", json);

    micro_api::parse(tokens, config).map_err(|e| e.to_string())
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    match s.to_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "compact" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        _ => Err(format!("unknown log format '{}'", s)),
    }
}
