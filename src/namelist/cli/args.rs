use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "namelist", bin_name = "namelist", version)]
#[command(about = "Keep a searchable, paginated list of names", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the list data (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current page
    #[command(alias = "ls")]
    List {
        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Jump to this page first
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Add a name to the top of the list
    #[command(alias = "a")]
    Add {
        /// The name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Rename an entry
    #[command(alias = "e")]
    Edit {
        /// Index of the entry (as shown by list)
        index: usize,

        /// New name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Mark one or more entries as done
    #[command(alias = "d")]
    Done {
        /// Indexes of the entries (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Remove one or more entries
    #[command(alias = "rm")]
    Remove {
        /// Indexes of the entries (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Remove every entry marked as done
    ClearDone,

    /// Remove every entry
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Go to a page
    Page { page: usize },

    /// Set how many entries a page shows (prints the choices if omitted)
    PerPage { size: Option<usize> },

    /// Get or set configuration
    Config {
        /// Configuration key (line-width, confirm-clear)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["namelist"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn add_joins_words() {
        let cli = Cli::try_parse_from(["namelist", "add", "Buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { title }) => assert_eq!(title.join(" "), "Buy milk"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = Cli::try_parse_from(["namelist", "rm", "2", "3", "--data-dir", "/tmp/x", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::Remove { ref indexes }) if indexes == &[2, 3]));
    }

    #[test]
    fn list_takes_search_and_page() {
        let cli = Cli::try_parse_from(["namelist", "ls", "-s", "mil", "-p", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List { search: Some(ref s), page: Some(2) }) if s == "mil"
        ));
    }

    #[test]
    fn edit_requires_a_title() {
        assert!(Cli::try_parse_from(["namelist", "edit", "1"]).is_err());
    }

    #[test]
    fn clear_all_yes_flag() {
        let cli = Cli::try_parse_from(["namelist", "clear-all", "-y"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ClearAll { yes: true })));
    }
}
