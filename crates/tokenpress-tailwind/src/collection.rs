//! Ordered, named group of declarations.

use std::fmt::{self, Display, Formatter};

use crate::declaration::Declaration;

/// Named list of declarations. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationCollection {
    name: String,
    declarations: Vec<Declaration>,
}

impl DeclarationCollection {
    /// Empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    /// Collection holding `declarations`.
    #[must_use]
    pub fn with_declarations(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }

    /// Collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append one declaration.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Remove every declaration called `name`; returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.declarations.len();
        self.declarations
            .retain(|declaration| declaration.name() != name);
        before - self.declarations.len()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.declarations.clear();
    }

    /// Declarations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Extend<Declaration> for DeclarationCollection {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        self.declarations.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DeclarationCollection {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for DeclarationCollection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, declaration) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str("\n")?;
            }
            write!(formatter, "{declaration}")?;
        }
        Ok(())
    }
}
