//! Text matching primitives
//!
//! Two heuristics shared by the documentation checks:
//!
//! - placeholder detection: a comment is a placeholder when it *is* a known
//!   stand-in (`"TODO"`) or *starts with* one followed by a word boundary
//!   (`"TODO: describe"`). A stand-in word appearing later in real prose
//!   (`"This table stores TODO items"`) does not count.
//! - critical-name matching: patterns with at most one wildcard, at the start
//!   (`*_id`) or at the end (`password*`), or none at all (`email`).

use lakeguard_domain::ConfigError;
use regex::{Regex, RegexBuilder};

/// Wildcard marker in critical name patterns
pub const WILDCARD: char = '*';

/// Whether `text` is placeholder content
///
/// Blank or absent text is never a placeholder; presence is checked
/// separately.
pub fn matches_placeholder<S: AsRef<str>>(
    text: Option<&str>,
    patterns: &[S],
    case_sensitive: bool,
) -> bool {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return false;
    };
    let text = normalize(text, case_sensitive);

    patterns
        .iter()
        .map(|p| normalize(p.as_ref().trim(), case_sensitive))
        .filter(|p| !p.is_empty())
        .any(|pattern| starts_with_word(&text, &pattern))
}

fn normalize(value: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    }
}

/// `text == pattern`, or `text` starts with `pattern` and the next char is not
/// alphanumeric
fn starts_with_word(text: &str, pattern: &str) -> bool {
    match text.strip_prefix(pattern) {
        Some(rest) => rest.chars().next().is_none_or(|c| !c.is_alphanumeric()),
        None => false,
    }
}

/// How a critical pattern anchors against a field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// No wildcard: whole-name match
    Exact,
    /// Trailing wildcard (`password*`)
    Prefix,
    /// Leading wildcard (`*_id`)
    Suffix,
}

/// A compiled critical-name pattern
#[derive(Debug, Clone)]
pub struct CriticalPattern {
    source: String,
    kind: PatternKind,
    regex: Regex,
}

impl CriticalPattern {
    /// Parse and compile a pattern
    ///
    /// Rejects empty patterns, a bare `*`, wildcards in the middle and
    /// wildcards on both ends.
    pub fn parse(pattern: &str, case_sensitive: bool) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidPattern {
            key: "critical_column_patterns",
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(invalid("pattern is blank"));
        }

        let literal = trimmed.trim_matches(WILDCARD);
        if literal.is_empty() {
            return Err(invalid("pattern has no literal part"));
        }
        if literal.contains(WILDCARD) {
            return Err(invalid("wildcard is only allowed at the start or the end"));
        }
        if trimmed.matches(WILDCARD).count() > 1 {
            return Err(invalid("only one wildcard is allowed"));
        }
        let leading = trimmed.starts_with(WILDCARD);
        let trailing = trimmed.ends_with(WILDCARD);

        let kind = if leading {
            PatternKind::Suffix
        } else if trailing {
            PatternKind::Prefix
        } else {
            PatternKind::Exact
        };

        let escaped = regex::escape(literal);
        let expression = match kind {
            PatternKind::Exact => format!("^{escaped}$"),
            PatternKind::Prefix => format!("^{escaped}"),
            PatternKind::Suffix => format!("{escaped}$"),
        };
        let regex = RegexBuilder::new(&expression)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            source: trimmed.to_string(),
            kind,
            regex,
        })
    }

    /// Pattern text as configured
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Anchoring mode
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Whether a field name matches
    pub fn matches(&self, field_name: &str) -> bool {
        self.regex.is_match(field_name.trim())
    }
}

/// Compile every configured critical pattern, failing on the first bad one
pub fn compile_critical_patterns<S: AsRef<str>>(
    patterns: &[S],
    case_sensitive: bool,
) -> Result<Vec<CriticalPattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| CriticalPattern::parse(p.as_ref(), case_sensitive))
        .collect()
}

/// Whether `field_name` matches any critical pattern
///
/// Malformed patterns never match; use [`compile_critical_patterns`] to reject
/// them up front.
pub fn matches_critical_name<S: AsRef<str>>(
    field_name: &str,
    patterns: &[S],
    case_sensitive: bool,
) -> bool {
    patterns
        .iter()
        .filter_map(|p| CriticalPattern::parse(p.as_ref(), case_sensitive).ok())
        .any(|p| p.matches(field_name))
}

/// Whether `field_name` matches any precompiled pattern
pub fn matches_any(field_name: &str, patterns: &[CriticalPattern]) -> bool {
    patterns.iter().any(|p| p.matches(field_name))
}
