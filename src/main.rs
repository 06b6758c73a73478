// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use subconv::app_config::{self, Config};
use subconv::app_controller::{ConversionOutcome, Controller};
use subconv::SubtitleFormat;

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
    Dfxp,
    Ttml,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
            CliSubtitleFormat::Dfxp => SubtitleFormat::Dfxp,
            CliSubtitleFormat::Ttml => SubtitleFormat::Ttml,
        }
    }
}

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
    /// Convert a subtitle file, or every subtitle file in a directory
    Convert(ConvertArgs),

    /// Print the parsed cues of a subtitle file as JSON
    Inspect(InspectArgs),

    /// Generate shell completions for subconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input subtitle file or directory
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Target format (defaults to the configured output format)
    #[arg(short, long, value_enum)]
    to: Option<CliSubtitleFormat>,

    /// Source format, overriding detection by file extension
    #[arg(long, value_enum)]
    from: Option<CliSubtitleFormat>,

    /// Output file (single file input only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input subtitle file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Source format, overriding detection by file extension
    #[arg(long, value_enum)]
    from: Option<CliSubtitleFormat>,
}

/// subconv - convert subtitles between SRT, WebVTT, DFXP and TTML
#[derive(Parser, Debug)]
#[command(name = "subconv")]
#[command(version)]
#[command(about = "Subtitle format converter")]
#[command(long_about = "subconv converts subtitle files between SubRip, WebVTT, DFXP and TTML.

EXAMPLES:
    subconv convert movie.srt -t vtt             # Write movie.vtt
    subconv convert movie.vtt -o out/movie.dfxp  # Explicit output path
    subconv convert --from vtt captions.txt -t srt
    subconv convert -f /subtitles/ -t srt        # Convert a whole folder
    subconv inspect movie.ttml                   # Dump cues as JSON
    subconv completions bash > subconv.bash      # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json by default (see --config-path). A missing
    file means defaults: SRT output, recursive folders, no overwriting.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
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
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subconv", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Convert(args) => run_convert(&controller, args),
        Commands::Inspect(args) => run_inspect(&controller, args),
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_convert(controller: &Controller, args: ConvertArgs) -> Result<()> {
    let target: SubtitleFormat = args
        .to
        .map(Into::into)
        .unwrap_or(controller.config().output_format);

    if args.input_path.is_file() {
        let outcome = controller.convert_file(
            &args.input_path,
            target,
            args.from.map(Into::into),
            args.output.as_deref(),
            args.force_overwrite,
        )?;

        match outcome {
            ConversionOutcome::Converted { output, .. } => info!("Success: {:?}", output),
            ConversionOutcome::SkippedExisting(output) => info!("Skipped, output exists: {:?}", output),
            ConversionOutcome::SkippedSameFormat => info!("Skipped, already {}", target.display_name()),
        }
        Ok(())
    } else if args.input_path.is_dir() {
        if args.output.is_some() {
            return Err(anyhow!("--output can only be used with a single input file"));
        }
        if args.from.is_some() {
            return Err(anyhow!("--from can only be used with a single input file"));
        }

        let summary = controller.convert_folder(&args.input_path, target, args.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) failed to convert", summary.failed));
        }
        Ok(())
    } else {
        Err(anyhow!("Input path does not exist: {:?}", args.input_path))
    }
}

fn run_inspect(controller: &Controller, args: InspectArgs) -> Result<()> {
    let cues = controller.inspect(&args.input_file, args.from.map(Into::into))?;
    println!("{}", serde_json::to_string_pretty(&cues)?);
    Ok(())
}
