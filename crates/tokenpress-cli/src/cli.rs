//! Argument parsing, logging setup, and command dispatch.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tokenpress_config::{ConfigOverrides, GeneratorKind, PipelineConfig};
use tokenpress_fsops::FsStore;
use tokenpress_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::client::{CliError, CliResult, config_error};
use crate::commands::{handle_all, handle_fetch, handle_generate, handle_tailwind};

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        version: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}; continuing without structured logs");
    }

    let command = command_label(&cli.command);
    let span = info_span!("tokenpress", command, run_id = %Uuid::new_v4());
    match dispatch(cli).instrument(span).await {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.display_message();
            error!(command, exit_code, error = %message, "command failed");
            eprintln!("error: {message}");
            exit_code
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let config = load_config(&cli)?;
    let store = FsStore::current_dir().map_err(CliError::failure)?;
    info!(version = tokenpress_telemetry::tool_version(), "starting");

    match cli.command {
        Command::Fetch => handle_fetch(&config, &store).await,
        Command::Generate => handle_generate(&config, &store),
        Command::Tailwind => handle_tailwind(&config, &store),
        Command::All => handle_all(&config, &store).await,
    }
}

fn load_config(cli: &Cli) -> CliResult<PipelineConfig> {
    tokenpress_config::from_env()
        .and_then(|config| config.with_overrides(cli.overrides()))
        .map_err(config_error)
}

#[derive(Parser)]
#[command(
    name = "tokenpress",
    version,
    about = "Turn design tokens into CSS, SCSS, and a Tailwind theme"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "TOKENPRESS_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: String,
    #[arg(
        long,
        global = true,
        env = "TOKENPRESS_LOG_FORMAT",
        value_parser = parse_log_format,
        help = "Log output format: pretty or json"
    )]
    log_format: Option<LogFormat>,
    #[command(flatten)]
    paths: PathArgs,
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        value_parser = parse_generator,
        help = "Generators to run, e.g. scss,css"
    )]
    generators: Vec<GeneratorKind>,
    #[arg(
        long,
        global = true,
        action = ArgAction::Set,
        value_name = "BOOL",
        help = "Append !default to SCSS declarations"
    )]
    scss_default: Option<bool>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct PathArgs {
    #[arg(long, global = true, help = "Token graph JSON path")]
    variables_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Flat CSS output path")]
    css_file: Option<PathBuf>,
    #[arg(long, global = true, help = "SCSS output directory")]
    scss_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Tailwind output directory")]
    tailwind_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Download the local token graph and store it as JSON.
    Fetch,
    /// Generate CSS and SCSS from the stored token graph.
    Generate,
    /// Rewrite the flat CSS into the Tailwind theme files.
    Tailwind,
    /// Fetch, generate, and rewrite in one go.
    All,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            variables_file: self.paths.variables_file.clone(),
            css_file: self.paths.css_file.clone(),
            scss_dir: self.paths.scss_dir.clone(),
            tailwind_dir: self.paths.tailwind_dir.clone(),
            generators: (!self.generators.is_empty()).then(|| self.generators.clone()),
            scss_default: self.scss_default,
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Fetch => "fetch",
        Command::Generate => "generate",
        Command::Tailwind => "tailwind",
        Command::All => "all",
    }
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input
        .parse()
        .map_err(|_| format!("invalid log format '{input}' (expected pretty or json)"))
}

fn parse_generator(input: &str) -> Result<GeneratorKind, String> {
    input
        .parse()
        .map_err(|_| format!("invalid generator '{input}' (expected scss or css)"))
}
