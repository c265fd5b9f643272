use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, SortArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ecodir` binary.
#[derive(Parser, Debug)]
#[command(
    name = "ecodir",
    version,
    long_version = long_version(),
    about = "Search and rank the ecosystem project directory",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ECODIR_CONFIG",
        action = ArgAction::Append,
        global = true,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        global = true,
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        help = "JSON project catalog to read (default: bundled catalog)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short = 's',
        long = "sort",
        value_enum,
        global = true,
        help = "Ordering used when no keyword is given (default: followers)"
    )]
    pub(crate) sort: Option<SortArg>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        global = true,
        help = "Projects per listing page (default: 24)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long = "related-limit",
        value_name = "NUM",
        global = true,
        help = "Related projects shown with a project (default: 6)"
    )]
    pub(crate) related_limit: Option<usize>,
    #[arg(
        short = 'p',
        long = "print-config",
        global = true,
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity; RUST_LOG takes precedence (default: warnings only)"
    )]
    pub(crate) verbose: u8,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        global = true,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

/// Directory operations exposed by the binary.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// List projects matching a category and keyword.
    Search {
        #[arg(short, long, value_name = "TEXT", help = "Free-text keyword (default: none)")]
        keyword: Option<String>,
        #[arg(short, long, value_name = "TAG", help = "Category filter (default: all)")]
        tag: Option<String>,
        #[arg(long, value_name = "NUM", default_value_t = 1, help = "1-based page number")]
        page: usize,
    },
    /// Show one project together with related projects.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List categories with their deployed project counts.
    Tags,
}

impl Default for Command {
    fn default() -> Self {
        Self::Search {
            keyword: None,
            tag: None,
            page: 1,
        }
    }
}
