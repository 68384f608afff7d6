//! Command-line interface definition using clap.

use clap::{ArgAction, Parser};

use crate::config::{
    DEFAULT_BOUNDARY_MARKER, DEFAULT_DATETIME_FORMAT, DEFAULT_NAME_PATTERN, DEFAULT_SEPARATOR,
    DEFAULT_TIMESTAMP_PATTERN, ParserConfig,
};
use crate::core::models::OutputConfig;
use crate::format::OutputFormat;

/// File stem of the default output path; the extension follows `--format`.
pub const DEFAULT_OUTPUT_STEM: &str = "chat_turns";

/// Parse an exported chat log and merge consecutive messages from the same
/// author into turns.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatturns")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatturns chat.txt
    chatturns chat.txt -o turns.jsonl -f jsonl
    chatturns chat.txt --no-merge -t --index
    chatturns chat.txt --eom '</s>'")]
pub struct Args {
    /// Path to the exported chat log
    pub input: String,

    /// Path to output file [default: chat_turns.<format>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (csv, json, jsonl)
    #[arg(short, long, default_value = "csv")]
    pub format: OutputFormat,

    /// Write parsed records instead of merged turns
    #[arg(long)]
    pub no_merge: bool,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include record/turn indices in output
    #[arg(long)]
    pub index: bool,

    /// End-of-message marker appended to each merged message
    #[arg(long, value_name = "MARKER", default_value = DEFAULT_BOUNDARY_MARKER)]
    pub eom: String,

    /// Literal removed between timestamp and author
    #[arg(long, value_name = "SEP", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// chrono format of the leading timestamp
    #[arg(long, value_name = "FMT", default_value = DEFAULT_DATETIME_FORMAT)]
    pub datetime_format: String,

    /// Regex matching the leading timestamp
    #[arg(long, value_name = "RE", default_value = DEFAULT_TIMESTAMP_PATTERN)]
    pub timestamp_pattern: String,

    /// Regex matching the leading author name
    #[arg(long, value_name = "RE", default_value = DEFAULT_NAME_PATTERN)]
    pub name_pattern: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration described by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_datetime_format(&self.datetime_format)
            .with_timestamp_pattern(&self.timestamp_pattern)
            .with_name_pattern(&self.name_pattern)
            .with_separator(&self.separator)
            .with_boundary_marker(&self.eom)
    }

    /// Output configuration described by the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.index {
            config = config.with_index();
        }
        config
    }

    /// The `-o` path, or the default stem with the format's extension.
    pub fn output_path(&self) -> String {
        self.output.clone().unwrap_or_else(|| {
            format!("{}.{}", DEFAULT_OUTPUT_STEM, self.format.extension())
        })
    }

    /// Default log filter for the given verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
