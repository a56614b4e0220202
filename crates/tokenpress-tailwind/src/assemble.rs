//! Theme assembly.
//!
//! # Design
//! - One [`DeclarationPool`] is shared by every stage; a declaration is claimed
//!   at most once and whatever is left at the end is reported as unbound.
//! - Pointers are built from the first variant only; the variant check makes
//!   that choice irrelevant.
//! - Mirrored groups copy a group built earlier in the same run.

use std::path::Path;

use tokenpress_fsops::{Artifact, Syntax};
use tracing::{debug, info};

use crate::collection::DeclarationCollection;
use crate::declaration::Declaration;
use crate::error::{Result, TailwindError};
use crate::matcher::PrefixMatcher;
use crate::namespace::Namespace;
use crate::rewrite::{DeclarationPool, map_by_prefix, pointers};
use crate::stylesheet::{data_theme_block, wrap_in_root};
use crate::tables::{self, ColorGroup, GroupSpec};
use crate::theme::{TailwindTheme, Theme, ensure_uniform_variants};

/// Theme file name.
pub const THEME_FILE: &str = "theme.css";
/// Variant stylesheet file name.
pub const VARIABLES_FILE: &str = "variables.css";
/// Unbound declarations file name.
pub const MISSING_FILE: &str = "missing-variables.css";

/// Color groups for one theme variant.
#[derive(Debug, Clone)]
pub struct ThemeVariant {
    /// Variant name.
    pub name: String,
    /// Groups in claim order.
    pub groups: Vec<ColorGroup>,
}

/// Everything the assembler needs to know about the token naming scheme.
#[derive(Debug, Clone)]
pub struct ThemeLayout {
    /// Variants; the first is the reference for pointers and validation.
    pub variants: Vec<ThemeVariant>,
    /// Prefixes dropped before anything else runs.
    pub ignored: Vec<PrefixMatcher>,
    /// Static groups in emission order.
    pub groups: Vec<GroupSpec>,
    /// Namespaces reset at the top of the theme block.
    pub resets: Vec<Namespace>,
}

impl ThemeLayout {
    /// Light/dark semantic colors plus the built-in static groups.
    ///
    /// # Errors
    ///
    /// Returns [`TailwindError::Pattern`] if a built-in pattern fails to compile.
    pub fn standard() -> Result<Self> {
        let variants = tables::COLOR_THEMES
            .iter()
            .map(|name| {
                Ok(ThemeVariant {
                    name: (*name).to_string(),
                    groups: tables::color_groups(name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            variants,
            ignored: tables::ignored_namespaces()?,
            groups: tables::static_groups()?,
            resets: Namespace::ALL.to_vec(),
        })
    }
}

/// Rendered stylesheets produced by [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindOutput {
    /// `@theme inline { … }` block.
    pub theme_css: String,
    /// One `[data-theme='…']` block per variant.
    pub variables_css: String,
    /// Unbound declarations, when there are any.
    pub missing_css: Option<String>,
    /// Number of unbound declarations.
    pub unbound: usize,
}

impl TailwindOutput {
    /// Artifacts rooted at `dir`.
    #[must_use]
    pub fn into_artifacts(self, dir: &Path) -> Vec<Artifact> {
        let mut artifacts = vec![
            Artifact::new(dir.join(THEME_FILE), Syntax::Css, self.theme_css),
            Artifact::new(dir.join(VARIABLES_FILE), Syntax::Css, self.variables_css),
        ];
        if let Some(missing) = self.missing_css {
            artifacts.push(Artifact::new(dir.join(MISSING_FILE), Syntax::Css, missing));
        }
        artifacts
    }
}

fn join_lines(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn scope_variant(
    variant: &ThemeVariant,
    pool: &mut DeclarationPool,
    mut pointer_sink: Option<&mut Vec<Declaration>>,
) -> Theme {
    let mut scoped = Vec::new();
    for group in &variant.groups {
        let mut claimed = pool.take(&group.select);
        for declaration in &mut claimed {
            declaration.replace_prefix(&group.strip, &group.scoped_prefix);
        }
        if let Some(sink) = pointer_sink.as_deref_mut() {
            sink.extend(pointers(
                &claimed,
                &group.pointer_strip,
                &group.pointer_targets,
            ));
        }
        scoped.extend(claimed);
    }
    debug!(
        variant = %variant.name,
        count = scoped.len(),
        "scoped theme variant"
    );
    Theme::new(&variant.name, scoped)
}

fn mirror(
    built: &[DeclarationCollection],
    collection_name: &str,
    source: &str,
    from: Namespace,
    to: Namespace,
) -> Result<DeclarationCollection> {
    let original = built
        .iter()
        .find(|collection| collection.name() == source)
        .ok_or_else(|| TailwindError::UnknownGroup {
            name: source.to_string(),
        })?;
    let from = PrefixMatcher::literal(from.prefix());
    let copies = original
        .iter()
        .map(|declaration| {
            let mut copy = declaration.clone();
            copy.replace_prefix(&from, to.prefix());
            copy
        })
        .collect();
    Ok(DeclarationCollection::with_declarations(
        collection_name,
        copies,
    ))
}

/// Rewrite flat declarations into the theme, variant, and unbound stylesheets.
///
/// # Errors
///
/// Returns [`TailwindError::VariantMismatch`] when the variants disagree on
/// their variable names and [`TailwindError::UnknownGroup`] when a mirrored
/// group names a group that was not built before it.
pub fn assemble(layout: &ThemeLayout, declarations: Vec<Declaration>) -> Result<TailwindOutput> {
    let mut pool = DeclarationPool::new(declarations);
    let total = pool.len();

    let ignored: usize = layout
        .ignored
        .iter()
        .map(|matcher| pool.discard(matcher))
        .sum();
    debug!(ignored, "removed ignored namespaces");

    let mut theme_pointers = Vec::new();
    let mut themes = Vec::with_capacity(layout.variants.len());
    for (index, variant) in layout.variants.iter().enumerate() {
        let sink = if index == 0 {
            Some(&mut theme_pointers)
        } else {
            None
        };
        themes.push(scope_variant(variant, &mut pool, sink));
    }
    ensure_uniform_variants(&themes)?;

    let variables_css = themes
        .iter()
        .map(|theme| wrap_in_root(&data_theme_block(&theme.name, &theme.declarations)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut theme = TailwindTheme::new(
        layout
            .resets
            .iter()
            .map(|namespace| namespace.reset_directive())
            .collect(),
    );
    theme.add_declarations(theme_pointers);
    for spec in &layout.groups {
        let collection = match spec {
            GroupSpec::Mapped(mapping) => map_by_prefix(mapping, &mut pool),
            GroupSpec::Mirror {
                collection_name,
                source,
                from,
                to,
            } => mirror(theme.collections(), collection_name, source, *from, *to)?,
        };
        theme.add_collection(collection);
    }

    let leftovers = pool.into_declarations();
    let unbound = leftovers.len();
    let missing_css = if leftovers.is_empty() {
        None
    } else {
        info!(unbound, "declarations not bound to any theme group");
        Some(wrap_in_root(&join_lines(&leftovers)))
    };

    info!(
        total,
        ignored,
        variants = themes.len(),
        groups = theme.collections().len(),
        unbound,
        "tailwind theme assembled"
    );

    Ok(TailwindOutput {
        theme_css: theme.to_string(),
        variables_css,
        missing_css,
        unbound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_requires_earlier_group() {
        let built = [DeclarationCollection::with_declarations(
            "Border Widths",
            vec![Declaration::new("--border-width-thin", "1px")],
        )];
        let ring = mirror(
            &built,
            "Ring Widths",
            "Border Widths",
            Namespace::BorderWidth,
            Namespace::RingWidth,
        );
        assert_eq!(
            ring.ok().as_ref().map(ToString::to_string),
            Some("--ring-width-thin: 1px;".to_string())
        );

        let missing = mirror(
            &[],
            "Ring Widths",
            "Border Widths",
            Namespace::BorderWidth,
            Namespace::RingWidth,
        );
        assert!(matches!(
            missing,
            Err(TailwindError::UnknownGroup { ref name }) if name == "Border Widths"
        ));
    }

    #[test]
    fn output_without_leftovers_has_two_artifacts() {
        let output = TailwindOutput {
            theme_css: "@theme inline {\n}".into(),
            variables_css: String::new(),
            missing_css: None,
            unbound: 0,
        };
        let artifacts = output.into_artifacts(Path::new("out"));
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].path(), Path::new("out/theme.css"));
        assert_eq!(artifacts[1].path(), Path::new("out/variables.css"));
    }
}
