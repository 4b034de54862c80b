//! The sift command-line interface.
//!
//! This module is the entry point for all CLI commands and the impure
//! boundary of the crate: it owns the process environment, stdout, and exit
//! codes, while the core library stays pure.

use std::collections::HashMap;
use std::env;
use std::process;

use clap::Parser;
use once_cell::sync::Lazy;

use crate::cli::args::{Command, SiftArgs};
use crate::errors::{print_error, SiftError};
use crate::parser;
use crate::pattern;
use crate::suites::{self, SuiteCatalog};

pub mod args;
pub mod output;

/// The builtin catalog, constructed once and never mutated.
static CATALOG: Lazy<SuiteCatalog> = Lazy::new(SuiteCatalog::builtin);

/// The main entry point for the CLI.
pub fn run() {
    let args = SiftArgs::parse();

    let result = match args.command {
        Command::Compile { expression } => handle_compile(&expression),
        Command::Ast { expression, json } => handle_ast(&expression, json),
        Command::Suites { json } => handle_suites(json),
        Command::Resolve { suite, json } => handle_resolve(suite.as_deref(), json),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

fn handle_compile(expression: &str) -> Result<(), SiftError> {
    let expr = parser::parse(expression)?;
    println!("{}", pattern::to_pattern(&expr));
    Ok(())
}

fn handle_ast(expression: &str, json: bool) -> Result<(), SiftError> {
    let expr = parser::parse(expression)?;
    if json {
        output::print_json(&expr);
    } else {
        println!("{}", expr.pretty());
    }
    Ok(())
}

fn handle_suites(json: bool) -> Result<(), SiftError> {
    if json {
        output::print_json(&*CATALOG);
    } else {
        output::print_catalog(&CATALOG);
    }
    Ok(())
}

fn handle_resolve(key: Option<&str>, json: bool) -> Result<(), SiftError> {
    let config = match key {
        Some(key) => suites::resolve_for_key(&CATALOG, key)?,
        None => {
            // Snapshot the environment into a plain map so the resolver
            // itself never reads process state.
            let env: HashMap<String, String> = env::vars().collect();
            suites::resolve_from_env(&CATALOG, &env)?
        }
    };

    if json {
        output::print_json(&config);
    } else {
        output::print_resolved(&config);
    }
    Ok(())
}
