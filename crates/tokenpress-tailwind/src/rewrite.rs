//! Prefix-rewrite engine.
//!
//! # Design
//! - Extraction is an ownership transfer: the pool is split into the selected
//!   declarations and a remainder; nothing is copied back.
//! - Mapping clones each extracted declaration once per target namespace, so one
//!   source may fan out into several outputs.
//! - Value modifiers run in order over every produced declaration.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::collection::DeclarationCollection;
use crate::declaration::Declaration;
use crate::error::Result;
use crate::matcher::PrefixMatcher;
use crate::namespace::Namespace;

/// Pixel to rem factor for a 16px root font size.
pub const PX_TO_REM: f64 = 1.0 / 16.0;

/// Result of splitting a pool by a matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Declarations selected by the matcher, in pool order.
    pub extracted: Vec<Declaration>,
    /// Everything else, in pool order.
    pub remainder: Vec<Declaration>,
}

/// Split `pool` into the declarations `matcher` selects and the rest.
#[must_use]
pub fn extract_by_prefix(matcher: &PrefixMatcher, pool: Vec<Declaration>) -> Extraction {
    let (extracted, remainder) = pool
        .into_iter()
        .partition(|declaration| declaration.has_prefix(matcher));
    Extraction {
        extracted,
        remainder,
    }
}

/// Declarations not yet claimed by any rule.
#[derive(Debug, Clone, Default)]
pub struct DeclarationPool {
    declarations: Vec<Declaration>,
}

impl DeclarationPool {
    /// Pool holding `declarations`.
    #[must_use]
    pub const fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Move every declaration selected by `matcher` out of the pool.
    pub fn take(&mut self, matcher: &PrefixMatcher) -> Vec<Declaration> {
        let Extraction {
            extracted,
            remainder,
        } = extract_by_prefix(matcher, std::mem::take(&mut self.declarations));
        self.declarations = remainder;
        extracted
    }

    /// Drop every declaration selected by `matcher`; returns how many.
    pub fn discard(&mut self, matcher: &PrefixMatcher) -> usize {
        self.take(matcher).len()
    }

    /// Number of unclaimed declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether every declaration has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Unclaimed declarations.
    #[must_use]
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }
}

/// Unit suffix appended by [`ValueModifier::NumericToUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssUnit {
    /// Unitless.
    None,
    /// `px`
    Px,
    /// `rem`
    Rem,
    /// `em`
    Em,
    /// `%`
    Percent,
}

impl CssUnit {
    /// Suffix text.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
        }
    }
}

/// Transformation applied to mapped declaration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueModifier {
    /// Scale a leading number and append a unit; non-numeric values are kept.
    NumericToUnit {
        /// Unit to append.
        unit: CssUnit,
        /// Factor applied before the unit.
        multiplier: f64,
    },
}

impl ValueModifier {
    /// Numeric-to-unit modifier.
    #[must_use]
    pub const fn numeric_to_unit(unit: CssUnit, multiplier: f64) -> Self {
        Self::NumericToUnit { unit, multiplier }
    }

    /// Apply to one declaration.
    pub fn apply(&self, declaration: &mut Declaration) {
        match *self {
            Self::NumericToUnit { unit, multiplier } => {
                if let Some(number) = leading_number(declaration.value()) {
                    declaration.set_value(&format!("{}{}", number * multiplier, unit.suffix()));
                }
            }
        }
    }
}

static LEADING_NUMBER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").ok());

/// Parse the longest numeric prefix of `text` (`"16px"` → 16).
fn leading_number(text: &str) -> Option<f64> {
    let pattern = LEADING_NUMBER.as_ref()?;
    pattern.find(text.trim_start())?.as_str().parse().ok()
}

/// One selection rule of a namespace mapping.
#[derive(Debug, Clone)]
pub struct MappingRule {
    /// Which declarations the rule claims.
    pub select: PrefixMatcher,
    /// Leading part of the name replaced by the target namespace.
    pub strip: PrefixMatcher,
}

impl MappingRule {
    /// Claim and strip the same literal prefix.
    #[must_use]
    pub fn prefix(prefix: &str) -> Self {
        Self {
            select: PrefixMatcher::literal(prefix),
            strip: PrefixMatcher::literal(prefix),
        }
    }

    /// Claim by `pattern`, strip the literal `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TailwindError::Pattern`] when the pattern is invalid.
    pub fn keyed(key: &str, pattern: &str) -> Result<Self> {
        Ok(Self {
            select: PrefixMatcher::pattern(pattern)?,
            strip: PrefixMatcher::literal(key),
        })
    }
}

/// Rules, targets, and modifiers producing one named collection.
#[derive(Debug, Clone)]
pub struct NamespaceMapping {
    /// Name of the produced collection.
    pub collection_name: String,
    /// Rules applied in order.
    pub rules: Vec<MappingRule>,
    /// Namespaces each claimed declaration is cloned into.
    pub targets: Vec<Namespace>,
    /// Modifiers applied to every produced declaration.
    pub modifiers: Vec<ValueModifier>,
}

impl NamespaceMapping {
    /// Mapping with no modifiers.
    #[must_use]
    pub fn new(collection_name: &str, rules: Vec<MappingRule>, targets: Vec<Namespace>) -> Self {
        Self {
            collection_name: collection_name.to_string(),
            rules,
            targets,
            modifiers: Vec::new(),
        }
    }

    /// Append a value modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: ValueModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// Claim declarations from `pool` and rewrite them into the mapping's namespaces.
pub fn map_by_prefix(
    mapping: &NamespaceMapping,
    pool: &mut DeclarationPool,
) -> DeclarationCollection {
    let mut produced = Vec::new();
    for rule in &mapping.rules {
        for declaration in pool.take(&rule.select) {
            for target in &mapping.targets {
                let mut mapped = declaration.clone();
                mapped.replace_prefix(&rule.strip, target.prefix());
                for modifier in &mapping.modifiers {
                    modifier.apply(&mut mapped);
                }
                produced.push(mapped);
            }
        }
    }
    debug!(
        collection = %mapping.collection_name,
        count = produced.len(),
        "mapped declarations"
    );
    DeclarationCollection::with_declarations(mapping.collection_name.clone(), produced)
}

/// Clones of `declarations` renamed into each of `targets` whose values point
/// back at the source via `var(...)`.
#[must_use]
pub fn pointers(
    declarations: &[Declaration],
    strip: &PrefixMatcher,
    targets: &[Namespace],
) -> Vec<Declaration> {
    declarations
        .iter()
        .flat_map(|source| {
            targets.iter().map(move |target| {
                let mut pointer = source.clone();
                pointer.replace_prefix(strip, target.prefix());
                pointer.set_value_as_reference(source.name());
                pointer
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<Declaration> {
        names
            .iter()
            .map(|name| Declaration::new(name, "1"))
            .collect()
    }

    #[test]
    fn extraction_is_exhaustive_and_exactly_once() {
        let before = pool(&["--a-1", "--b-1", "--a-2", "--c", "--a-3"]);
        let total = before.len();
        let Extraction {
            extracted,
            remainder,
        } = extract_by_prefix(&"--a".into(), before);

        assert_eq!(extracted.len() + remainder.len(), total);
        assert!(extracted.iter().all(|d| !remainder.contains(d)));
        assert_eq!(
            extracted.iter().map(Declaration::name).collect::<Vec<_>>(),
            ["--a-1", "--a-2", "--a-3"]
        );
        assert_eq!(
            remainder.iter().map(Declaration::name).collect::<Vec<_>>(),
            ["--b-1", "--c"]
        );
    }

    #[test]
    fn pool_take_moves_out() {
        let mut pool = DeclarationPool::new(pool(&["--unit-base", "--x", "--unit-half"]));
        assert_eq!(pool.discard(&"--unit".into()), 2);
        assert_eq!(pool.len(), 1);
        assert!(pool.take(&"--unit".into()).is_empty());
        assert_eq!(pool.into_declarations()[0].name(), "--x");
    }

    #[test]
    fn numeric_to_unit_scales_numbers_only() {
        let modifier = ValueModifier::numeric_to_unit(CssUnit::Rem, PX_TO_REM);
        let mut size = Declaration::new("--text-base", "16");
        modifier.apply(&mut size);
        assert_eq!(size.value(), "1rem");

        let mut auto = Declaration::new("--text-auto", "auto");
        modifier.apply(&mut auto);
        assert_eq!(auto.value(), "auto");

        let mut suffixed = Declaration::new("--w", "12.5px");
        ValueModifier::numeric_to_unit(CssUnit::Px, 2.0).apply(&mut suffixed);
        assert_eq!(suffixed.value(), "25px");

        let mut unitless = Declaration::new("--leading", "24");
        ValueModifier::numeric_to_unit(CssUnit::None, PX_TO_REM).apply(&mut unitless);
        assert_eq!(unitless.value(), "1.5");
    }

    #[test]
    fn leading_number_follows_float_prefix_rules() {
        assert_eq!(leading_number(" -3.5e2px"), Some(-350.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("7e"), Some(7.0));
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("rgb(0 0 0)"), None);
        assert_eq!(leading_number("'Inter'"), None);
        assert_eq!(leading_number("+4"), Some(4.0));
        assert_eq!(leading_number("12.px"), Some(12.0));
        assert_eq!(leading_number("1e3rem"), Some(1000.0));
        assert!(LEADING_NUMBER.is_some());
    }

    #[test]
    fn mapping_fans_out_to_every_target() {
        let mut source = DeclarationPool::new(vec![
            Declaration::new("--border-width-thin", "1"),
            Declaration::new("--other", "2"),
        ]);
        let mapping = NamespaceMapping::new(
            "Widths",
            vec![MappingRule::prefix("--border-width")],
            vec![Namespace::BorderWidth, Namespace::RingWidth],
        )
        .with_modifier(ValueModifier::numeric_to_unit(CssUnit::Px, 1.0));

        let collection = map_by_prefix(&mapping, &mut source);
        assert_eq!(
            collection.to_string(),
            "--border-width-thin: 1px;\n--ring-width-thin: 1px;"
        );
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn border_pointer_fans_out_to_two_namespaces() {
        let scoped = vec![Declaration::new("--semantic-color-border-subtle", "rgb(1 1 1)")];
        let produced = pointers(
            &scoped,
            &"--semantic-color-border".into(),
            &[Namespace::BorderColor, Namespace::RingColor],
        );
        assert_eq!(produced.len(), 2);
        assert_eq!(produced[0].name(), "--border-color-subtle");
        assert_eq!(produced[1].name(), "--ring-color-subtle");
        assert!(
            produced
                .iter()
                .all(|p| p.value() == "var(--semantic-color-border-subtle)")
        );
    }
}
