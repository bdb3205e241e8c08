//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Strategy;

/// Category tree builder: assemble a self-referencing category table into trees
/// and compare two assembly strategies
#[derive(Parser, Debug)]
#[command(name = "cattree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// SQLite database file (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "CATTREE_DB")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed, build with both strategies, print trees and comparison (default)
    Run,

    /// Populate the database with a category catalog
    Seed {
        /// Generate a synthetic catalog instead of the sample one
        #[arg(long)]
        synthetic: bool,
        /// Synthetic catalog: roots and children per category
        #[arg(long)]
        breadth: Option<usize>,
        /// Synthetic catalog: number of levels
        #[arg(long)]
        depth: Option<usize>,
        /// Replace existing categories
        #[arg(short, long)]
        force: bool,
    },

    /// Build and print the tree with one strategy
    Tree {
        /// Assembly strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Indexed)]
        strategy: StrategyArg,
    },

    /// Compare both strategies, timings only
    Bench,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file locations
    Path,
    /// Print a commented config template
    Template,
}

/// Assembly strategy as given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Eager join + recursive scan
    Scan,
    /// Projection + indexed single pass
    Indexed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Strategy::Scan,
            StrategyArg::Indexed => Strategy::Indexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_no_subcommand_when_parsing_then_command_is_none() {
        let cli = Cli::try_parse_from(["cattree"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["cattree", "-ddd", "bench"]).unwrap();
        assert_eq!(cli.debug, 3);
        assert!(matches!(cli.command, Some(Commands::Bench)));
    }

    #[test]
    fn given_tree_with_scan_when_parsing_then_strategy_is_scan() {
        let cli = Cli::try_parse_from(["cattree", "tree", "--strategy", "scan"]).unwrap();
        match cli.command {
            Some(Commands::Tree { strategy }) => {
                assert_eq!(Strategy::from(strategy), Strategy::Scan)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
