//! Static rule tables for the theme assembler.
//!
//! # Design
//! - Color groups run per theme variant and in table order; earlier groups
//!   claim declarations before later, broader ones see them.
//! - Static groups run once, after the color groups, over what is left.

use crate::error::Result;
use crate::matcher::PrefixMatcher;
use crate::namespace::Namespace;
use crate::rewrite::{CssUnit, MappingRule, NamespaceMapping, PX_TO_REM, ValueModifier};

/// Color theme variants, first one is the reference.
pub const COLOR_THEMES: [&str; 2] = ["light", "dark"];

/// Namespaces removed before any group runs.
///
/// # Errors
///
/// Returns [`crate::TailwindError::Pattern`] if a built-in pattern fails to
/// compile.
pub fn ignored_namespaces() -> Result<Vec<PrefixMatcher>> {
    Ok(vec![
        PrefixMatcher::literal("--unit"),
        PrefixMatcher::pattern(r"^--spacing-[\w]+-[\d]+")?,
    ])
}

/// One semantic color group for a single variant.
#[derive(Debug, Clone)]
pub struct ColorGroup {
    /// Declarations claimed for this variant.
    pub select: PrefixMatcher,
    /// Variant-specific leading part removed from claimed names.
    pub strip: PrefixMatcher,
    /// Variant-free prefix written in its place.
    pub scoped_prefix: String,
    /// Leading part of scoped names replaced by the pointer namespaces.
    pub pointer_strip: PrefixMatcher,
    /// Namespaces receiving `var(...)` pointers.
    pub pointer_targets: Vec<Namespace>,
}

/// Background, text/icon, border, then generic colors for `theme`.
///
/// # Errors
///
/// Returns [`crate::TailwindError::Pattern`] if a generated pattern fails to
/// compile.
pub fn color_groups(theme: &str) -> Result<Vec<ColorGroup>> {
    let variant = format!("--semantic-color-{theme}");
    let background = format!("{variant}-background");
    let border = format!("{variant}-border");

    Ok(vec![
        ColorGroup {
            select: PrefixMatcher::literal(background.as_str()),
            strip: PrefixMatcher::literal(background.as_str()),
            scoped_prefix: "--semantic-color-background".into(),
            pointer_strip: PrefixMatcher::literal("--semantic-color-background"),
            pointer_targets: vec![Namespace::BackgroundColor],
        },
        ColorGroup {
            select: PrefixMatcher::one_of([
                PrefixMatcher::literal(format!("{variant}-text")),
                PrefixMatcher::literal(format!("{variant}-icon")),
            ]),
            strip: PrefixMatcher::pattern(&format!(
                "^--semantic-color-{}-(text)?",
                regex::escape(theme)
            ))?,
            scoped_prefix: "--semantic-color-text".into(),
            pointer_strip: PrefixMatcher::pattern("^--semantic-color-(text)?")?,
            pointer_targets: vec![Namespace::TextColor],
        },
        ColorGroup {
            select: PrefixMatcher::literal(border.as_str()),
            strip: PrefixMatcher::literal(border.as_str()),
            scoped_prefix: "--semantic-color-border".into(),
            pointer_strip: PrefixMatcher::literal("--semantic-color-border"),
            pointer_targets: vec![Namespace::BorderColor, Namespace::RingColor],
        },
        ColorGroup {
            select: PrefixMatcher::literal(format!("{variant}-")),
            strip: PrefixMatcher::literal(variant),
            scoped_prefix: "--semantic-color".into(),
            pointer_strip: PrefixMatcher::literal("--semantic-color"),
            pointer_targets: vec![Namespace::Color],
        },
    ])
}

/// How one static `@theme` group is produced.
#[derive(Debug, Clone)]
pub enum GroupSpec {
    /// Claim declarations from the pool.
    Mapped(NamespaceMapping),
    /// Copy an already built group into another namespace.
    Mirror {
        /// Name of the produced group.
        collection_name: String,
        /// Name of the group copied.
        source: String,
        /// Namespace replaced in the copies.
        from: Namespace,
        /// Namespace written instead.
        to: Namespace,
    },
}

impl GroupSpec {
    /// Name of the produced group.
    #[must_use]
    pub fn collection_name(&self) -> &str {
        match self {
            Self::Mapped(mapping) => &mapping.collection_name,
            Self::Mirror {
                collection_name, ..
            } => collection_name,
        }
    }
}

fn type_scale(name: &str, suffix: &str, target: Namespace) -> Result<NamespaceMapping> {
    let primitive = format!("--primitive-type-{suffix}");
    Ok(NamespaceMapping::new(
        name,
        vec![
            MappingRule::keyed(&primitive, &primitive)?,
            MappingRule::keyed(
                "--semantic-type",
                &format!(r"--semantic-type-body-[\w-]+-{suffix}"),
            )?,
            MappingRule::keyed(
                "--semantic-type",
                &format!(r"--semantic-type-heading-[\w-]+-{suffix}"),
            )?,
        ],
        vec![target],
    ))
}

/// The static groups, in emission order.
///
/// # Errors
///
/// Returns [`crate::TailwindError::Pattern`] if a built-in pattern fails to
/// compile.
pub fn static_groups() -> Result<Vec<GroupSpec>> {
    let px = ValueModifier::numeric_to_unit(CssUnit::Px, 1.0);

    Ok(vec![
        GroupSpec::Mapped(NamespaceMapping::new(
            "Primitive Colors",
            vec![MappingRule::prefix("--primitive-color-")],
            vec![Namespace::Color],
        )),
        GroupSpec::Mapped(
            NamespaceMapping::new(
                "Breakpoints",
                vec![MappingRule::prefix("--layout-breakpoint")],
                vec![Namespace::Breakpoint],
            )
            .with_modifier(px),
        ),
        GroupSpec::Mapped(
            type_scale("Font Sizes", "size", Namespace::Text)?
                .with_modifier(ValueModifier::numeric_to_unit(CssUnit::Rem, PX_TO_REM)),
        ),
        GroupSpec::Mapped(type_scale("Font Weights", "weight", Namespace::FontWeight)?),
        GroupSpec::Mapped(
            type_scale("Line Heights", "line-height", Namespace::Leading)?
                .with_modifier(ValueModifier::numeric_to_unit(CssUnit::None, PX_TO_REM)),
        ),
        GroupSpec::Mapped(NamespaceMapping::new(
            "Font Families",
            vec![MappingRule::prefix("--primitive-type-family")],
            vec![Namespace::Font],
        )),
        GroupSpec::Mapped(
            NamespaceMapping::new(
                "Border Radii",
                vec![MappingRule::prefix("--border-radius")],
                vec![Namespace::Radius],
            )
            .with_modifier(px),
        ),
        GroupSpec::Mapped(
            NamespaceMapping::new(
                "Border Widths",
                vec![MappingRule::prefix("--border-width")],
                vec![Namespace::BorderWidth],
            )
            .with_modifier(px),
        ),
        GroupSpec::Mirror {
            collection_name: "Ring Widths".into(),
            source: "Border Widths".into(),
            from: Namespace::BorderWidth,
            to: Namespace::RingWidth,
        },
        GroupSpec::Mapped(
            NamespaceMapping::new(
                "Spacing",
                vec![MappingRule::prefix("--spacing-desktop-space")],
                vec![Namespace::Spacing],
            )
            .with_modifier(px),
        ),
    ])
}
