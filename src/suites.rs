//! The suite catalog and test-run resolution.
//!
//! A suite is a named, curated slice of the test corpus: a tag expression
//! plus a retry policy. The catalog is built once at startup and injected
//! into the resolvers; nothing in this module touches the process
//! environment directly, which keeps resolution pure and testable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::{and, not, or, tag, TagExpr};
use crate::errors::{self, SiftError};
use crate::pattern::to_pattern;

/// Environment variable naming the suite to run.
pub const SUITE_ENV_VAR: &str = "TEST_SUITE";

/// Catalog key used when the environment does not name a suite.
pub const DEFAULT_SUITE: &str = "all";

// ============================================================================
// CATALOG
// ============================================================================

/// A named test suite: what to select and how often to retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteDefinition {
    pub key: String,
    pub description: String,
    pub expression: TagExpr,
    /// Runner retry count; `None` means the resolved config defaults to 0.
    pub retries: Option<u32>,
}

/// An ordered, immutable collection of suite definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteCatalog {
    suites: Vec<SuiteDefinition>,
}

impl SuiteCatalog {
    pub fn new(suites: Vec<SuiteDefinition>) -> Self {
        Self { suites }
    }

    /// The fixed catalog the CLI ships with.
    pub fn builtin() -> Self {
        fn suite(
            key: &str,
            description: &str,
            expression: TagExpr,
            retries: Option<u32>,
        ) -> SuiteDefinition {
            SuiteDefinition {
                key: key.to_string(),
                description: description.to_string(),
                expression,
                retries,
            }
        }

        Self::new(vec![
            suite(
                "smoke",
                "Fast confidence pass over the critical paths",
                and(tag("@smoke"), not(tag("@flaky"))),
                Some(2),
            ),
            suite(
                "regression",
                "Full regression sweep",
                and(tag("@regression"), not(tag("@flaky"))),
                Some(1),
            ),
            suite("checkout", "Checkout flows end to end", tag("@checkout"), None),
            suite("cart", "Cart state and badge behavior", tag("@cart"), None),
            suite("menu", "Burger-menu navigation", tag("@menu"), None),
            suite("users", "Login matrix across user archetypes", tag("@users"), None),
            suite(
                "health",
                "API health endpoints",
                or(tag("@health"), tag("@api")),
                Some(1),
            ),
            suite("ux", "Visual and layout checks", tag("@ux"), None),
            suite(
                "all",
                "Everything except quarantined or in-progress work",
                not(or(tag("@quarantine"), tag("@wip"))),
                None,
            ),
        ])
    }

    /// Exact lookup by key. No partial matching, no case folding.
    pub fn get(&self, key: &str) -> Result<&SuiteDefinition, SiftError> {
        self.suites
            .iter()
            .find(|suite| suite.key == key)
            .ok_or_else(|| errors::unknown_suite(key, &self.keys()))
    }

    /// Suite keys in definition order.
    pub fn keys(&self) -> Vec<&str> {
        self.suites.iter().map(|suite| suite.key.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuiteDefinition> {
        self.suites.iter()
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Compiles a suite's expression to its grep pattern.
pub fn suite_grep(suite: &SuiteDefinition) -> String {
    to_pattern(&suite.expression)
}

/// The CLI argument bundle handed to the external runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerArgs {
    pub grep: String,
    pub retries: u32,
}

/// Looks up a suite and compiles its runner arguments.
pub fn resolve_runner_args(catalog: &SuiteCatalog, key: &str) -> Result<RunnerArgs, SiftError> {
    let suite = catalog.get(key)?;
    Ok(RunnerArgs {
        grep: suite_grep(suite),
        retries: suite.retries.unwrap_or(0),
    })
}

/// A fully resolved run configuration. Derived fresh on every resolution;
/// it has no identity or persistence of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRunConfig {
    pub suite: SuiteDefinition,
    pub grep: String,
    pub retries: u32,
}

/// Resolves the run configuration for an explicit suite key.
pub fn resolve_for_key(catalog: &SuiteCatalog, key: &str) -> Result<ResolvedRunConfig, SiftError> {
    let suite = catalog.get(key)?;
    Ok(ResolvedRunConfig {
        suite: suite.clone(),
        grep: suite_grep(suite),
        retries: suite.retries.unwrap_or(0),
    })
}

/// Resolves the run configuration from an injected environment mapping.
///
/// An absent `TEST_SUITE` falls back to the default suite; a present but
/// unknown value propagates the lookup error, never a silent fallback.
pub fn resolve_from_env(
    catalog: &SuiteCatalog,
    env: &HashMap<String, String>,
) -> Result<ResolvedRunConfig, SiftError> {
    let key = env
        .get(SUITE_ENV_VAR)
        .map_or(DEFAULT_SUITE, String::as_str);
    resolve_for_key(catalog, key)
}
