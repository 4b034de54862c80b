//! Handles all user-facing output for the CLI.
//!
//! Pretty-printing, colorizing, and JSON rendering live here so every
//! subcommand reports through the same surface.

use atty::Stream;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::suites::{suite_grep, ResolvedRunConfig, SuiteCatalog};

fn stdout() -> StandardStream {
    let choice = if atty::is(Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints the suite catalog, one suite per block.
pub fn print_catalog(catalog: &SuiteCatalog) {
    let mut stdout = stdout();
    for suite in catalog.iter() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        print!("{}", suite.key);
        let _ = stdout.reset();
        println!(
            "  (retries: {})  {}",
            suite.retries.unwrap_or(0),
            suite.description
        );
        println!("    {}", suite_grep(suite));
    }
}

/// Prints a resolved run configuration in runner-facing form.
pub fn print_resolved(config: &ResolvedRunConfig) {
    let mut stdout = stdout();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!("suite: {}", config.suite.key);
    let _ = stdout.reset();
    println!("grep: {}", config.grep);
    println!("retries: {}", config.retries);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) {
    // crate-owned types serialize infallibly
    let rendered = serde_json::to_string_pretty(value).expect("value serializes to JSON");
    println!("{}", rendered);
}
