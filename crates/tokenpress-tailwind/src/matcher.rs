//! Prefix matching over declaration names.

use regex::Regex;

use crate::error::{Result, TailwindError};

/// How a rule selects declaration names.
#[derive(Debug, Clone)]
pub enum PrefixMatcher {
    /// Name starts with the string. An empty literal matches nothing.
    Literal(String),
    /// Pattern found anywhere in the name; anchor with `^` to pin it.
    Pattern(Regex),
    /// Any of the nested matchers.
    OneOf(Vec<PrefixMatcher>),
}

impl PrefixMatcher {
    /// Literal prefix.
    #[must_use]
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self::Literal(prefix.into())
    }

    /// Compile a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TailwindError::Pattern`] when the pattern is invalid.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| TailwindError::Pattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Match when any of `matchers` matches.
    #[must_use]
    pub fn one_of(matchers: impl IntoIterator<Item = Self>) -> Self {
        Self::OneOf(matchers.into_iter().collect())
    }

    /// Whether `name` is selected.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(prefix) => !prefix.is_empty() && name.starts_with(prefix.as_str()),
            Self::Pattern(pattern) => pattern.is_match(name),
            Self::OneOf(matchers) => matchers.iter().any(|matcher| matcher.matches(name)),
        }
    }

    /// Byte length of the match anchored at the start of `name`.
    #[must_use]
    pub fn leading_match_len(&self, name: &str) -> Option<usize> {
        match self {
            Self::Literal(prefix) => {
                (!prefix.is_empty() && name.starts_with(prefix.as_str())).then_some(prefix.len())
            }
            Self::Pattern(pattern) => pattern
                .find(name)
                .filter(|found| found.start() == 0)
                .map(|found| found.end()),
            Self::OneOf(matchers) => matchers
                .iter()
                .find_map(|matcher| matcher.leading_match_len(name)),
        }
    }

    /// `name` without its leading match; unchanged when nothing matches there.
    #[must_use]
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        self.leading_match_len(name).map_or(name, |len| &name[len..])
    }
}

impl From<&str> for PrefixMatcher {
    fn from(prefix: &str) -> Self {
        Self::literal(prefix)
    }
}
