use clap::Parser;

use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
use crate::ports::outbound::TreeFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "tree" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self, colored: bool) -> Box<dyn TreeFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextTreeFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonTreeFormatter::new()),
        }
    }
}

/// Browse Apache Ant build targets and their dependencies
#[derive(Parser, Debug)]
#[command(name = "ant-tree")]
#[command(version)]
#[command(about = "Browse Apache Ant build targets and their dependencies", long_about = None)]
pub struct Args {
    /// Workspace folder to load (repeatable; defaults to the current directory)
    #[arg(short, long = "path", value_name = "DIR")]
    pub paths: Vec<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Comma-separated candidate build file names (overrides config)
    #[arg(long, value_name = "LIST")]
    pub build_filenames: Option<String>,

    /// Comma-separated candidate directories, relative to each workspace
    /// folder (overrides config)
    #[arg(long, value_name = "LIST")]
    pub build_file_directories: Option<String>,

    /// List targets in declaration order instead of alphabetically
    #[arg(long)]
    pub no_sort: bool,

    /// Run the named target instead of printing the tree
    #[arg(short, long, value_name = "TARGET")]
    pub run: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
