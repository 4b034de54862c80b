// tests/suite_tests.rs

use std::collections::HashMap;

use sift::ast::{not, tag};
use sift::errors::{ErrorCategory, ErrorKind};
use sift::suites::{
    resolve_from_env, resolve_runner_args, suite_grep, SuiteCatalog, SuiteDefinition,
    DEFAULT_SUITE, SUITE_ENV_VAR,
};

fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---
// Catalog
// ---

#[test]
fn test_builtin_catalog_keeps_definition_order() {
    let catalog = SuiteCatalog::builtin();
    assert_eq!(
        catalog.keys(),
        ["smoke", "regression", "checkout", "cart", "menu", "users", "health", "ux", "all"]
    );
}

#[test]
fn test_lookup_is_exact() {
    let catalog = SuiteCatalog::builtin();
    assert!(catalog.get("smoke").is_ok());

    let err = catalog.get("Smoke").unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::Resolve);
    assert!(matches!(err.kind, ErrorKind::UnknownSuite { .. }));
}

#[test]
fn test_suite_grep_compiles_the_suite_expression() {
    let suite = SuiteDefinition {
        key: "stable".to_string(),
        description: "everything not quarantined".to_string(),
        expression: not(tag("@quarantine")),
        retries: None,
    };
    assert_eq!(suite_grep(&suite), "^(?!.*@quarantine).*");
}

#[test]
fn test_the_all_suite_excludes_quarantined_and_wip_tests() {
    let catalog = SuiteCatalog::builtin();
    let all = catalog.get("all").unwrap();
    assert!(all.expression.eval("checkout happy path @checkout"));
    assert!(!all.expression.eval("old cart flow @cart @quarantine"));
    assert!(!all.expression.eval("new menu @menu @wip"));
}

// ---
// Runner arguments
// ---

#[test]
fn test_runner_args_default_retries_to_zero() {
    let catalog = SuiteCatalog::builtin();

    let cart = resolve_runner_args(&catalog, "cart").unwrap();
    assert_eq!(cart.retries, 0);
    assert!(!cart.grep.is_empty());

    let smoke = resolve_runner_args(&catalog, "smoke").unwrap();
    assert_eq!(smoke.retries, 2);
}

#[test]
fn test_runner_args_propagate_unknown_suite() {
    let catalog = SuiteCatalog::builtin();
    let err = resolve_runner_args(&catalog, "nightly").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSuite { .. }));
}

// ---
// Environment resolution
// ---

#[test]
fn test_missing_env_var_falls_back_to_all() {
    let catalog = SuiteCatalog::builtin();
    let config = resolve_from_env(&catalog, &env(&[])).unwrap();
    assert_eq!(config.suite.key, DEFAULT_SUITE);
    assert_eq!(config.retries, 0);
    assert!(!config.grep.is_empty());
}

#[test]
fn test_env_var_selects_the_named_suite() {
    let catalog = SuiteCatalog::builtin();
    let config = resolve_from_env(&catalog, &env(&[(SUITE_ENV_VAR, "health")])).unwrap();
    assert_eq!(config.suite.key, "health");
    assert_eq!(config.retries, 1);
}

#[test]
fn test_invalid_env_value_is_an_error_not_a_fallback() {
    let catalog = SuiteCatalog::builtin();
    let err = resolve_from_env(&catalog, &env(&[(SUITE_ENV_VAR, "smok")])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSuite { .. }));
}

#[test]
fn test_custom_catalogs_are_injectable() {
    let catalog = SuiteCatalog::new(vec![SuiteDefinition {
        key: "only".to_string(),
        description: "one suite".to_string(),
        expression: tag("@only"),
        retries: Some(3),
    }]);

    let config = resolve_from_env(&catalog, &env(&[(SUITE_ENV_VAR, "only")])).unwrap();
    assert_eq!(config.retries, 3);

    // The default key need not exist in a custom catalog.
    assert!(resolve_from_env(&catalog, &env(&[])).is_err());
}
