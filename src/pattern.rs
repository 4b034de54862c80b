//! Compilation of tag expressions to test-runner grep patterns.
//!
//! A compiled pattern is a chain of zero-width lookahead assertions behind a
//! start anchor, followed by a catch-all `.*`. A regex engine with lookaround
//! support then matches a candidate text exactly when the boolean expression
//! holds under "tag present" := "text contains the tag as a substring".

use crate::ast::TagExpr;

/// Compiles an expression tree to a grep pattern string.
///
/// The pattern is produced for an external runner's `--grep`-style filter;
/// this crate never executes it itself. Tag matching is substring-based, not
/// word-boundary based: a tag value that is a prefix of another (`@smoke`
/// inside `@smokey`) matches that text too.
pub fn to_pattern(expr: &TagExpr) -> String {
    // The anchor pins every lookahead to the start of the text. Without it,
    // an unanchored search would let a negative lookahead succeed at some
    // tail position where the excluded tag no longer lies ahead.
    format!("^{}.*", compiled(expr))
}

fn compiled(expr: &TagExpr) -> String {
    match expr {
        TagExpr::Tag(value) => format!("(?=.*{})", regex::escape(value)),
        TagExpr::Not(child) => negated(child),
        // Lookaheads consume no input, so concatenation is conjunction.
        TagExpr::And(left, right) => format!("{}{}", compiled(left), compiled(right)),
        TagExpr::Or(left, right) => format!("(?:{}|{})", compiled(left), compiled(right)),
    }
}

/// Compiles the negation of `expr`, pushing the `!` down to the leaves.
///
/// A negated `Not` unwraps back into [`compiled`] (double-negation
/// elimination); negated `And`/`Or` rewrite through De Morgan until only
/// base-case `(?=…)`/`(?!…)` groups remain in the output.
fn negated(expr: &TagExpr) -> String {
    match expr {
        TagExpr::Tag(value) => format!("(?!.*{})", regex::escape(value)),
        TagExpr::Not(child) => compiled(child),
        // !(a && b) == !a || !b
        TagExpr::And(left, right) => format!("(?:{}|{})", negated(left), negated(right)),
        // !(a || b) == !a && !b
        TagExpr::Or(left, right) => format!("{}{}", negated(left), negated(right)),
    }
}
