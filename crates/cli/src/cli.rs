//! CLI command definitions for bagpipe.
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use bp_core::config::{MissingDependencyPolicy, ResolverOptions};
use bp_protocol::UnitKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Kind of unit to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KindArg {
    /// `pipe.yml` units
    Pipe,
    /// `bag.yml` units (default)
    #[default]
    Bag,
}

impl From<KindArg> for UnitKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pipe => UnitKind::Pipe,
            KindArg::Bag => UnitKind::Bag,
        }
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolve nested pipe/bag units and their dependencies
#[derive(Parser, Debug)]
#[command(name = "bagpipe", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the folder containing the unit file (default: current directory)
    #[arg(long, global = true)]
    pub context: Option<PathBuf>,

    /// Kind of unit to resolve
    #[arg(long, value_enum, default_value_t = KindArg::Bag, global = true)]
    pub kind: KindArg,

    /// Treat dependencies that name no unit as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print the full error report on failure
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every unit of the tree with its dependencies
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the order in which a unit and its dependencies are processed
    Plan {
        /// Unit to plan for (default: the unit of the context directory)
        #[arg(long)]
        target: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the details of one unit
    Show {
        /// Unit name
        name: String,
    },
}

impl Cli {
    pub fn resolver_options(&self) -> ResolverOptions {
        let policy = if self.strict {
            MissingDependencyPolicy::Error
        } else {
            MissingDependencyPolicy::Ignore
        };
        ResolverOptions::new(self.kind.into()).with_missing_dependencies(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bagpipe", "list"]);

        assert_eq!(cli.kind, KindArg::Bag);
        assert!(cli.context.is_none());
        let options = cli.resolver_options();
        assert_eq!(options.kind, UnitKind::Bag);
        assert_eq!(options.missing_dependencies, MissingDependencyPolicy::Ignore);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "bagpipe", "plan", "--target", "tasks", "--kind", "pipe", "--strict",
        ]);

        match &cli.command {
            Command::Plan { target, format } => {
                assert_eq!(target.as_deref(), Some("tasks"));
                assert_eq!(*format, OutputFormat::Text);
            }
            other => panic!("Expected plan, got {other:?}"),
        }
        let options = cli.resolver_options();
        assert_eq!(options.kind, UnitKind::Pipe);
        assert_eq!(options.missing_dependencies, MissingDependencyPolicy::Error);
    }
}
