//! Utility namespaces understood by the theme consumer.

/// Target prefix family for rewritten declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `--color`
    Color,
    /// `--breakpoint`
    Breakpoint,
    /// `--text`
    Text,
    /// `--font`
    Font,
    /// `--font-weight`
    FontWeight,
    /// `--leading`
    Leading,
    /// `--radius`
    Radius,
    /// `--border-width`
    BorderWidth,
    /// `--spacing`
    Spacing,
    /// `--inset-shadow`
    InsetShadow,
    /// `--background-color`
    BackgroundColor,
    /// `--text-color`
    TextColor,
    /// `--border-color`
    BorderColor,
    /// `--ring-color`
    RingColor,
    /// `--ring-width`
    RingWidth,
}

impl Namespace {
    /// Every namespace, in reset order.
    pub const ALL: [Self; 15] = [
        Self::Color,
        Self::Breakpoint,
        Self::Text,
        Self::Font,
        Self::FontWeight,
        Self::Leading,
        Self::Radius,
        Self::BorderWidth,
        Self::Spacing,
        Self::InsetShadow,
        Self::BackgroundColor,
        Self::TextColor,
        Self::BorderColor,
        Self::RingColor,
        Self::RingWidth,
    ];

    /// Property prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Color => "--color",
            Self::Breakpoint => "--breakpoint",
            Self::Text => "--text",
            Self::Font => "--font",
            Self::FontWeight => "--font-weight",
            Self::Leading => "--leading",
            Self::Radius => "--radius",
            Self::BorderWidth => "--border-width",
            Self::Spacing => "--spacing",
            Self::InsetShadow => "--inset-shadow",
            Self::BackgroundColor => "--background-color",
            Self::TextColor => "--text-color",
            Self::BorderColor => "--border-color",
            Self::RingColor => "--ring-color",
            Self::RingWidth => "--ring-width",
        }
    }

    /// `--<namespace>-*: initial;`, clearing the consumer's defaults.
    #[must_use]
    pub fn reset_directive(self) -> String {
        format!("{}-*: initial;", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique() {
        let prefixes: HashSet<&str> = Namespace::ALL.iter().map(|ns| ns.prefix()).collect();
        assert_eq!(prefixes.len(), Namespace::ALL.len());
    }

    #[test]
    fn reset_directive_uses_wildcard() {
        assert_eq!(
            Namespace::BorderColor.reset_directive(),
            "--border-color-*: initial;"
        );
    }
}
