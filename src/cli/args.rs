//! Defines the command-line arguments and subcommands for the sift CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "Compile tag expressions into test-runner grep filters."
)]
pub struct SiftArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a tag expression into a grep pattern.
    Compile {
        /// The tag expression, e.g. "@smoke && !@flaky".
        #[arg(required = true)]
        expression: String,
    },
    /// Parse a tag expression and print its tree.
    Ast {
        /// The tag expression to parse.
        #[arg(required = true)]
        expression: String,
        /// Print the tree as JSON instead of the pretty form.
        #[arg(long)]
        json: bool,
    },
    /// List the builtin suite catalog.
    Suites {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Resolve the run configuration for a suite.
    Resolve {
        /// Suite key; falls back to $TEST_SUITE, then to "all".
        #[arg(long)]
        suite: Option<String>,
        /// Print the full resolved configuration as JSON.
        #[arg(long)]
        json: bool,
    },
}
