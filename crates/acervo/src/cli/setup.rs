use super::logging::LogFormat;
use acervoapp::commands::browse::{GalleryFilter, SortKey};
use acervoapp::error::AcervoError;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "acervo",
    bin_name = "acervo",
    version,
    disable_help_subcommand = true,
    after_help = "Data root: --data, then $ACERVO_DATA, then the nearest .acervo/ above the current directory."
)]
#[command(about = "Browse a museum collection as the public gallery shows it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data root (a .acervo directory, or the directory containing one)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Log format on stderr
    #[arg(
        long,
        value_enum,
        default_value_t = LogFormat::Pretty,
        global = true,
        help_heading = "Options"
    )]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the public collection
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the options offered for type, location and year
    #[command(display_order = 2)]
    Facets,

    /// Show one item in detail
    #[command(alias = "view", display_order = 3)]
    Show {
        /// Listing index (e.g. 3), item id, or id:<id>
        selector: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show resolved configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g. tenant); all keys when omitted
        key: Option<String>,
    },
}

/// Filter flags shared by `list` and `show`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Match title, artist or registration number (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only items of this type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Only items at this location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Only items from this year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Only items with this status (e.g. Exposto)
    #[arg(long)]
    pub status: Option<String>,

    /// Ordering: alphabetical, year-desc (newest) or year-asc (oldest)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,
}

fn parse_sort_key(value: &str) -> Result<SortKey, AcervoError> {
    value.parse()
}

impl FilterArgs {
    /// The filter these flags describe; unset sort falls back to `default_sort`.
    pub fn to_filter(&self, default_sort: SortKey) -> GalleryFilter {
        GalleryFilter {
            search_term: self.search.clone().unwrap_or_default(),
            kind: self.kind.clone(),
            location: self.location.clone(),
            year: self.year,
            status: self.status.clone(),
            sort: self.sort.unwrap_or(default_sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = parse(&["acervo"]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_list_filter_flags() {
        let cli = parse(&[
            "acervo", "ls", "-s", "vaso", "--type", "Cerâmica", "--year", "1950", "--sort",
            "newest",
        ]);
        let Some(Commands::List { filter }) = cli.command else {
            panic!("expected list");
        };
        let filter = filter.to_filter(SortKey::Alphabetical);
        assert_eq!(filter.search_term, "vaso");
        assert_eq!(filter.kind.as_deref(), Some("Cerâmica"));
        assert_eq!(filter.year, Some(1950));
        assert_eq!(filter.sort, SortKey::YearDesc);
    }

    #[test]
    fn test_unset_sort_uses_default() {
        let filter = FilterArgs::default().to_filter(SortKey::YearAsc);
        assert_eq!(filter.sort, SortKey::YearAsc);
        assert!(!filter.is_constrained());
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["acervo", "list", "--sort", "random"]).is_err());
    }

    #[test]
    fn test_show_takes_selector_and_filters() {
        let cli = parse(&["acervo", "show", "2", "--status", "Exposto", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Show { selector, filter }) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(selector, "2");
        assert_eq!(filter.status.as_deref(), Some("Exposto"));
    }

    #[test]
    fn test_global_data_flag() {
        let cli = parse(&["acervo", "facets", "--data", "/tmp/museu"]);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/museu")));
        assert!(matches!(cli.command, Some(Commands::Facets)));
    }
}
