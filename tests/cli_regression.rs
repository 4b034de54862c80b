// Regression test: ensure the CLI compiles expressions, resolves suites, and
// renders errors with miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_compile_prints_the_grep_pattern() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("compile").arg("@smoke && !@flaky");
    cmd.assert()
        .success()
        .stdout(contains("^(?=.*@smoke)(?!.*@flaky).*"));
}

#[test]
fn cli_reports_miette_diagnostics_on_parse_error() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("compile").arg("@smoke &&");
    cmd.assert()
        .failure()
        .stderr(contains("sift::parse::expected_tag"));
}

#[test]
fn cli_rejects_an_empty_expression() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("compile").arg("");
    cmd.assert()
        .failure()
        .stderr(contains("sift::parse::empty_expression"));
}

#[test]
fn cli_ast_prints_the_pretty_tree() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.args(["ast", "@a || @b && !@c"]);
    cmd.assert().success().stdout(contains("@a || (@b && !@c)"));
}

#[test]
fn cli_suites_lists_the_catalog() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("suites");
    cmd.assert()
        .success()
        .stdout(contains("smoke").and(contains("regression")));
}

#[test]
fn cli_resolve_honors_the_environment_variable() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("resolve").env("TEST_SUITE", "health");
    cmd.assert().success().stdout(contains("suite: health"));
}

#[test]
fn cli_resolve_defaults_to_all_without_env() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.arg("resolve").env_remove("TEST_SUITE");
    cmd.assert().success().stdout(contains("suite: all"));
}

#[test]
fn cli_resolve_rejects_unknown_suites() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.args(["resolve", "--suite", "nightly"]);
    cmd.assert()
        .failure()
        .stderr(contains("sift::resolve::unknown_suite"));
}

#[test]
fn cli_resolve_emits_json_when_asked() {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.args(["resolve", "--suite", "smoke", "--json"]);
    cmd.assert()
        .success()
        .stdout(contains("\"retries\": 2").and(contains("\"grep\"")));
}
