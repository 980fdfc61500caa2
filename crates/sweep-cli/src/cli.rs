//! CLI argument definitions for datasweep.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use sweep_cli::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "datasweep",
    version,
    about = "Clean a tabular dataset and write a report",
    long_about = "Load a CSV, TSV, XLSX or JSON dataset, drop duplicate rows, coerce \
                  numeric columns and fill missing text.\n\n\
                  Writes cleaned_data.csv, summary_report.txt and visual_summary.png \
                  into the output directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More (-v, -vv) or less (-q) log output; warnings are shown by default.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to color terminal output.
    #[command(flatten)]
    pub color: Color,

    /// Set the log level directly, ignoring -v/-q and RUST_LOG.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log line format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration implied by the global flags.
    ///
    /// `--log-level` wins over `-v/-q`; `RUST_LOG` is honored only when
    /// neither is given.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LogLevelArg::level_filter);
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
            },
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a dataset and write the output artifacts.
    Clean(CleanArgs),

    /// List supported input formats.
    Formats,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input dataset (.csv, .tsv, .xlsx or .json).
    #[arg(value_name = "INPUT", default_value = "raw_data.tsv")]
    pub input: PathBuf,

    /// Directory for generated files, created if absent.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
