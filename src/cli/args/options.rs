use clap::ValueEnum;
use ecodir::ProjectSorting;

/// Listing orders accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    #[value(name = "a-z")]
    Alphabetical,
    Followers,
}

impl SortArg {
    /// Return the label consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortArg::Alphabetical => ProjectSorting::Alphabetical.label(),
            SortArg::Followers => ProjectSorting::Followers.label(),
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
