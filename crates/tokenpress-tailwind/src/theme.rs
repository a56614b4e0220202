//! Theme variants and the `@theme` block.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use crate::collection::DeclarationCollection;
use crate::declaration::Declaration;
use crate::error::{Result, TailwindError};

/// Declarations of one color theme with the variant segment stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Variant name, e.g. `light`.
    pub name: String,
    /// Scoped declarations.
    pub declarations: Vec<Declaration>,
}

impl Theme {
    /// Theme called `name`.
    #[must_use]
    pub fn new(name: &str, declarations: Vec<Declaration>) -> Self {
        Self {
            name: name.to_string(),
            declarations,
        }
    }

    fn names(&self) -> HashSet<&str> {
        self.declarations.iter().map(Declaration::name).collect()
    }
}

/// Check that every theme defines exactly the variables of the first one.
///
/// # Errors
///
/// Returns [`TailwindError::VariantMismatch`] listing every missing and every
/// extra variable, per theme.
pub fn ensure_uniform_variants(themes: &[Theme]) -> Result<()> {
    let Some((reference, rest)) = themes.split_first() else {
        return Ok(());
    };
    let expected = reference.names();
    let mut issues = Vec::new();

    for theme in rest {
        let actual = theme.names();
        for declaration in &reference.declarations {
            if !actual.contains(declaration.name()) {
                issues.push(format!(
                    "Variable \"{}\" is missing in theme \"{}\".",
                    declaration.name(),
                    theme.name
                ));
            }
        }
        for declaration in &theme.declarations {
            if !expected.contains(declaration.name()) {
                issues.push(format!(
                    "Variable \"{}\" in theme \"{}\" is not present in all themes.",
                    declaration.name(),
                    theme.name
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(TailwindError::VariantMismatch { issues })
    }
}

/// Contents of the `@theme inline { … }` block.
#[derive(Debug, Clone, Default)]
pub struct TailwindTheme {
    resets: Vec<String>,
    declarations: Vec<Declaration>,
    collections: Vec<DeclarationCollection>,
}

impl TailwindTheme {
    /// Theme opening with the given reset directives.
    #[must_use]
    pub const fn new(resets: Vec<String>) -> Self {
        Self {
            resets,
            declarations: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Append ungrouped declarations, emitted right after the resets.
    pub fn add_declarations(&mut self, declarations: impl IntoIterator<Item = Declaration>) {
        self.declarations.extend(declarations);
    }

    /// Append a titled group.
    pub fn add_collection(&mut self, collection: DeclarationCollection) {
        self.collections.push(collection);
    }

    /// Groups added so far.
    #[must_use]
    pub fn collections(&self) -> &[DeclarationCollection] {
        &self.collections
    }
}

impl Display for TailwindTheme {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "@theme inline {{")?;
        for reset in &self.resets {
            writeln!(formatter, "{reset}")?;
        }
        for declaration in &self.declarations {
            writeln!(formatter, "{declaration}")?;
        }
        for collection in &self.collections {
            writeln!(formatter)?;
            writeln!(formatter, "/*## {} ##*/", collection.name())?;
            for declaration in collection {
                writeln!(formatter, "{declaration}")?;
            }
        }
        write!(formatter, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str, names: &[&str]) -> Theme {
        Theme::new(
            name,
            names.iter().map(|n| Declaration::new(n, "1")).collect(),
        )
    }

    #[test]
    fn equal_name_sets_pass_regardless_of_order() {
        let themes = [
            theme("light", &["--a", "--b"]),
            theme("dark", &["--b", "--a"]),
        ];
        assert!(ensure_uniform_variants(&themes).is_ok());
        assert!(ensure_uniform_variants(&[]).is_ok());
    }

    #[test]
    fn reports_missing_and_extra_per_theme() {
        let themes = [
            theme("light", &["--a", "--b"]),
            theme("dark", &["--a", "--c"]),
        ];
        let Err(TailwindError::VariantMismatch { issues }) = ensure_uniform_variants(&themes)
        else {
            panic!("expected a variant mismatch");
        };
        assert_eq!(
            issues,
            [
                "Variable \"--b\" is missing in theme \"dark\".",
                "Variable \"--c\" in theme \"dark\" is not present in all themes.",
            ]
        );
    }

    #[test]
    fn renders_resets_pointers_then_groups() {
        let mut theme = TailwindTheme::new(vec!["--color-*: initial;".into()]);
        theme.add_declarations([Declaration::new("--color-accent", "var(--a)")]);
        theme.add_collection(DeclarationCollection::with_declarations(
            "Radii",
            vec![Declaration::new("--radius-md", "8px")],
        ));
        assert_eq!(
            theme.to_string(),
            "@theme inline {\n\
             --color-*: initial;\n\
             --color-accent: var(--a);\n\
             \n\
             /*## Radii ##*/\n\
             --radius-md: 8px;\n\
             }"
        );
        assert_eq!(theme.collections().len(), 1);
    }
}
