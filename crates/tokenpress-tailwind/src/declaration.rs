//! A single custom-property declaration.
//!
//! # Design
//! - Names are always normalized to exactly two leading dashes with no
//!   surrounding whitespace; values are trimmed and carry no trailing `;`.
//! - Prefix edits never fail: removing an absent prefix leaves the name as is.

use std::fmt::{self, Display, Formatter};

use crate::error::{Result, TailwindError};
use crate::matcher::PrefixMatcher;

/// `--name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    value: String,
}

fn normalize_name(name: &str) -> String {
    format!("--{}", name.trim().trim_start_matches('-').trim())
}

fn normalize_value(value: &str) -> String {
    let value = value.trim();
    value.strip_suffix(';').unwrap_or(value).trim().to_string()
}

impl Declaration {
    /// Build from a name and a value.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: normalize_name(name),
            value: normalize_value(value),
        }
    }

    /// Parse `--name: value[;]`.
    ///
    /// # Errors
    ///
    /// Returns [`TailwindError::MalformedDeclaration`] unless the text holds
    /// exactly one `:`.
    pub fn parse(text: &str) -> Result<Self> {
        let colons = text.matches(':').count();
        match text.split_once(':') {
            Some((name, value)) if colons == 1 => Ok(Self::new(name, value)),
            _ => Err(TailwindError::MalformedDeclaration {
                text: text.trim().to_string(),
                colons,
            }),
        }
    }

    /// Normalized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: &str) {
        self.value = normalize_value(value);
    }

    /// Point the value at another property: `var(--other)`.
    pub fn set_value_as_reference(&mut self, other: &str) {
        self.value = format!("var({})", normalize_name(other));
    }

    /// Replace the name.
    pub fn rename(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    /// Whether the name is selected by `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &PrefixMatcher) -> bool {
        prefix.matches(&self.name)
    }

    /// Prepend `prefix` joined by a dash: `--b` + `--a` → `--a-b`.
    pub fn add_prefix(&mut self, prefix: &str) {
        if prefix.trim().is_empty() {
            return;
        }
        let rest = self.name.trim_start_matches('-');
        self.name = if rest.is_empty() {
            normalize_name(prefix)
        } else {
            normalize_name(&format!("{prefix}-{rest}"))
        };
    }

    /// Drop the leading match of `prefix`; a no-op when it is absent.
    pub fn remove_prefix(&mut self, prefix: &PrefixMatcher) {
        let stripped = prefix.strip(&self.name);
        if stripped.len() != self.name.len() {
            self.name = normalize_name(stripped);
        }
    }

    /// Remove `old` then add `new`. `new` is added even when `old` is absent.
    pub fn replace_prefix(&mut self, old: &PrefixMatcher, new: &str) {
        self.remove_prefix(old);
        self.add_prefix(new);
    }
}

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {};", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_name_and_value() -> Result<()> {
        let declaration = Declaration::parse("  ---brand-primary : rgb(0 0 255);  ")?;
        assert_eq!(declaration.name(), "--brand-primary");
        assert_eq!(declaration.value(), "rgb(0 0 255)");
        assert_eq!(declaration.to_string(), "--brand-primary: rgb(0 0 255);");

        let bare = Declaration::parse("gap:4")?;
        assert_eq!(bare.to_string(), "--gap: 4;");
        Ok(())
    }

    #[test]
    fn parse_requires_exactly_one_colon() {
        assert!(matches!(
            Declaration::parse("--a 1"),
            Err(TailwindError::MalformedDeclaration { colons: 0, .. })
        ));
        assert!(matches!(
            Declaration::parse("--font: 'a:b'"),
            Err(TailwindError::MalformedDeclaration { colons: 2, .. })
        ));
    }

    #[test]
    fn replace_prefix_rewrites_leading_segment() {
        let mut declaration = Declaration::new("--a-b-c", "1");
        declaration.replace_prefix(&"--a-b".into(), "--x");
        assert_eq!(declaration.name(), "--x-c");
    }

    #[test]
    fn remove_absent_prefix_is_noop() {
        let mut declaration = Declaration::new("--a-b-c", "1");
        declaration.remove_prefix(&"--z".into());
        assert_eq!(declaration.name(), "--a-b-c");

        declaration.replace_prefix(&"--z".into(), "--x");
        assert_eq!(declaration.name(), "--x-a-b-c");
    }

    #[test]
    fn removing_whole_name_then_adding_keeps_prefix_only() {
        let mut declaration = Declaration::new("--color", "red");
        declaration.replace_prefix(&"--color".into(), "--text");
        assert_eq!(declaration.name(), "--text");
    }

    #[test]
    fn references_and_renames() {
        let mut declaration = Declaration::new("--border-color-subtle", "red");
        declaration.set_value_as_reference("--semantic-color-border-subtle");
        assert_eq!(declaration.value(), "var(--semantic-color-border-subtle)");

        declaration.rename("ring-color-subtle");
        assert_eq!(declaration.name(), "--ring-color-subtle");
        assert!(declaration.has_prefix(&"--ring".into()));

        declaration.set_value(" 2px; ");
        assert_eq!(declaration.value(), "2px");
    }

    #[test]
    fn clones_are_independent() {
        let original = Declaration::new("--a", "1");
        let mut copy = original.clone();
        copy.rename("--b");
        copy.set_value("2");
        assert_eq!(original.to_string(), "--a: 1;");
        assert_eq!(copy.to_string(), "--b: 2;");
    }
}
