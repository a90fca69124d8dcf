// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use glossary_builder::Controller;
use glossary_builder::app_config::{Config, LogLevel};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for glossary-builder
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Glossary Builder - finance glossary scaffold generator
///
/// Builds a JSON glossary from the built-in finance term list, with empty
/// translation and description fields ready to be filled in.
#[derive(Parser, Debug)]
#[command(name = "glossary-builder")]
#[command(version)]
#[command(about = "Generate a finance glossary scaffold")]
#[command(long_about = "Glossary Builder turns the built-in finance term list into a JSON glossary
with empty translation slots and descriptions.

EXAMPLES:
    glossary-builder                                  # Write industries/financial.json
    glossary-builder -o out/financial.json            # Write to a different file
    glossary-builder --dry-run                        # Print the JSON to stdout instead
    glossary-builder -c glossary.json -l debug        # Use a config file with debug logging
    glossary-builder completions bash > gb.bash       # Generate bash completions

CONFIGURATION:
    Without --config the built-in defaults are used. A config file may set
    output_path, category, target_languages and log_level; missing fields
    keep their defaults. The output directory must already exist.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output file path (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the glossary to stdout without writing a file
    #[arg(long)]
    dry_run: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "⚠️ ",
            Level::Info => "",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {}{}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts at info; the config or CLI may change the level below
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "glossary-builder", &mut std::io::stdout());
        return Ok(());
    }

    run_build(cli)
}

fn load_config(options: &CommandLineOptions) -> Result<Config> {
    let mut config = match &options.config {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!("Config file not found: {:?}", path));
            }
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(output) = &options.output {
        config.output_path = output.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn run_build(options: CommandLineOptions) -> Result<()> {
    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config);

    if options.dry_run {
        let json = controller.render()?;
        println!("{}", json);
        info!("Dry run, nothing written");
        return Ok(());
    }

    controller.run()?;
    Ok(())
}
