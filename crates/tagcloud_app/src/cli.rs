use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Generate an HTML tag cloud of the most frequent words in a text file.
///
/// Arguments left out are asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "tagcloud", version)]
pub struct Cli {
    /// Text file to count words in.
    pub input: Option<PathBuf>,

    /// HTML file to write.
    pub output: Option<PathBuf>,

    /// Number of words in the cloud (0 up to the number of distinct words).
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Config file (defaults to ./tagcloud.ron when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write a JSON manifest next to the output.
    #[arg(long)]
    pub manifest: bool,

    /// Where log messages go.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, value_name = "PATH", default_value = "tagcloud.log")]
    pub log_file: PathBuf,

    /// Log debug details.
    #[arg(short, long)]
    pub verbose: bool,
}
