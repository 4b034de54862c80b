//! Tag expression trees.
//!
//! The core data type for tag filters: a small boolean algebra over opaque
//! tag literals. Trees are built once via the constructor functions and
//! never mutated; every combinator returns a new node.

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A boolean expression over tag literals.
///
/// A `Tag` leaf holds an opaque string and is satisfied by any text that
/// contains it as a substring. The value is not validated for a leading `@`
/// or any particular charset; regex metacharacters in it are escaped at
/// compile time, never interpreted.
///
/// Equality is structural: two separately constructed trees with the same
/// shape and values compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagExpr {
    Tag(String),
    Not(Box<TagExpr>),
    And(Box<TagExpr>, Box<TagExpr>),
    Or(Box<TagExpr>, Box<TagExpr>),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Builds a leaf node satisfied by text containing `value` as a substring.
pub fn tag(value: impl Into<String>) -> TagExpr {
    TagExpr::Tag(value.into())
}

/// Builds the conjunction of two expressions, preserving operand order.
pub fn and(left: TagExpr, right: TagExpr) -> TagExpr {
    TagExpr::And(Box::new(left), Box::new(right))
}

/// Builds the disjunction of two expressions, preserving operand order.
pub fn or(left: TagExpr, right: TagExpr) -> TagExpr {
    TagExpr::Or(Box::new(left), Box::new(right))
}

/// Builds the negation of an expression.
pub fn not(child: TagExpr) -> TagExpr {
    TagExpr::Not(Box::new(child))
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl TagExpr {
    /// Evaluates the expression directly against a text blob.
    ///
    /// Uses the same substring-containment semantics the compiled pattern
    /// encodes: a `Tag` is satisfied when `text` contains its value
    /// anywhere. Agrees with [`crate::pattern::to_pattern`] on every input.
    pub fn eval(&self, text: &str) -> bool {
        match self {
            TagExpr::Tag(value) => text.contains(value.as_str()),
            TagExpr::Not(child) => !child.eval(text),
            TagExpr::And(left, right) => left.eval(text) && right.eval(text),
            TagExpr::Or(left, right) => left.eval(text) || right.eval(text),
        }
    }

    /// Pretty-prints the expression in DSL-flavored infix form.
    ///
    /// Compound operands are parenthesized for readability. The parentheses
    /// are display-only: the DSL itself has no grouping syntax, so this form
    /// is for diagnostics, not for feeding back into the parser.
    pub fn pretty(&self) -> String {
        match self {
            TagExpr::Tag(value) => value.clone(),
            TagExpr::Not(child) => format!("!{}", child.pretty_grouped()),
            TagExpr::And(left, right) => {
                format!("{} && {}", left.pretty_grouped(), right.pretty_grouped())
            }
            TagExpr::Or(left, right) => {
                format!("{} || {}", left.pretty_grouped(), right.pretty_grouped())
            }
        }
    }

    fn pretty_grouped(&self) -> String {
        match self {
            TagExpr::Tag(_) | TagExpr::Not(_) => self.pretty(),
            _ => format!("({})", self.pretty()),
        }
    }

    /// Returns the node kind as a string (for diagnostics and debugging).
    pub fn type_name(&self) -> &'static str {
        match self {
            TagExpr::Tag(_) => "Tag",
            TagExpr::Not(_) => "Not",
            TagExpr::And(_, _) => "And",
            TagExpr::Or(_, _) => "Or",
        }
    }
}

impl std::fmt::Display for TagExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
