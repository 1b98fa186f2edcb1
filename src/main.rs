// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use vttclean::app_config::{self, Config};
use vttclean::app_controller::Controller;
use vttclean::errors::AppError;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for vttclean
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// vttclean - WebVTT subtitles to plain text
///
/// Strips headers, cue timings and inline tags from a WebVTT file and prints
/// the remaining subtitle lines once each, in order of first appearance.
#[derive(Parser, Debug)]
#[command(name = "vttclean")]
#[command(version)]
#[command(about = "Clean WebVTT subtitles into de-duplicated plain text")]
#[command(long_about = "vttclean turns a WebVTT subtitle file into plain text lines for summarization.

The cleaned text goes to stdout; statistics and diagnostics go to stderr.

EXAMPLES:
    vttclean subtitle.en.vtt                    # Print cleaned text
    vttclean subtitle.en.vtt > transcript.txt   # Save it, stats stay on the terminal
    vttclean -o out/transcript.txt talk.vtt     # Write to a file
    vttclean --no-stats talk.vtt | wc -w        # Pipe without the statistics block
    vttclean completions bash > vttclean.bash   # Generate bash completions

CONFIGURATION:
    An optional JSON file passed with --config (or VTTCLEAN_CONFIG):
    { \"log_level\": \"warn\", \"show_stats\": true }")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// WebVTT subtitle file to clean
    #[arg(value_name = "SUBTITLE_FILE")]
    input_path: Option<PathBuf>,

    /// Write the cleaned text to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "FILE", env = "VTTCLEAN_CONFIG")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Do not print the statistics block
    #[arg(long)]
    no_stats: bool,
}

// @struct: Custom logger implementation, stderr only
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // The logger is installed with the widest level; set_max_level narrows it
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(app_config::LogLevel::default().into());

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage) => {
            let mut cmd = CommandLineOptions::command();
            eprintln!("Error: {}", AppError::Usage);
            eprintln!("{}", cmd.render_usage());
            eprintln!("Example: vttclean subtitle.en.vtt");
            ExitCode::from(AppError::Usage.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<(), AppError> {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "vttclean", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it before loading config
    if let Some(cmd_log_level) = cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.into();
        log::set_max_level(config_log_level.into());
    }

    let mut config = match &cli.config_path {
        Some(config_path) => Config::from_file(config_path)
            .map_err(|e| AppError::Config(format!("{:#}", e)))?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    if cli.no_stats {
        config.show_stats = false;
    }
    log::set_max_level(config.log_level.into());
    debug!("Using configuration: {:?}", config);

    let input_path = cli.input_path.ok_or(AppError::Usage)?;
    let controller = Controller::with_config(config);

    let stats = match &cli.output {
        Some(output_path) => controller.run_to_file(&input_path, output_path)?,
        None => controller.run(&input_path, &mut std::io::stdout().lock())?,
    };

    controller.report_stats(&stats, &mut std::io::stderr())
}
