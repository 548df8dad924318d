//! Where-clause compilation.
//!
//! One field plus its patterns becomes one [`CompiledClause`]:
//! - no usable pattern → no clause at all
//! - one pattern → `field LIKE 'p'`
//! - several patterns → `(field LIKE 'p1' OR field LIKE 'p2')`
//!
//! `*` becomes SWQL's `%`. The other LIKE metacharacters (`%`, `_`, `[`)
//! are passed through as typed, so `_` still matches any single character.
//! Single quotes are doubled to keep the string literal intact.

use orionq_model::FilterValue;
use serde::Serialize;
use std::fmt;

/// User-facing wildcard.
pub const WILDCARD: char = '*';

/// SWQL any-sequence token.
pub const ANY_SEQUENCE: &str = "%";

/// A boolean fragment constraining a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledClause {
    field: String,
    /// Translated LIKE patterns, unquoted.
    patterns: Vec<String>,
}

impl CompiledClause {
    /// The field path this clause constrains.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Translated patterns, in the order supplied.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True when the clause ORs more than one pattern.
    #[must_use]
    pub fn is_disjunction(&self) -> bool {
        self.patterns.len() > 1
    }
}

impl fmt::Display for CompiledClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_disjunction() {
            f.write_str("(")?;
        }
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            write!(f, "{} LIKE {}", self.field, quote_literal(pattern))?;
        }
        if self.is_disjunction() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Replaces every `*` with `%`; nothing else changes.
#[must_use]
pub fn translate_wildcard(pattern: &str) -> String {
    pattern.replace(WILDCARD, ANY_SEQUENCE)
}

fn quote_literal(pattern: &str) -> String {
    format!("'{}'", pattern.replace('\'', "''"))
}

/// Compiles a field's filter value.
///
/// Returns `None` when the value carries no non-empty pattern.
#[must_use]
pub fn compile(field: impl Into<String>, value: &FilterValue) -> Option<CompiledClause> {
    let patterns: Vec<String> = value
        .patterns()
        .into_iter()
        .map(translate_wildcard)
        .collect();
    if patterns.is_empty() {
        return None;
    }
    Some(CompiledClause {
        field: field.into(),
        patterns,
    })
}

/// Compiles a single pattern, as used for custom-property filters.
#[must_use]
pub fn compile_pattern(field: impl Into<String>, pattern: &str) -> Option<CompiledClause> {
    compile(field, &FilterValue::from(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_doubles_single_quotes() {
        assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_literal(""), "''");
    }
}
