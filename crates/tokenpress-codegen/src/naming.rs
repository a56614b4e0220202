//! Identifier case helpers.
//!
//! Words are the maximal runs of ASCII letters and digits; everything else
//! (spaces, `/`, `-`, `_`, punctuation, non-ASCII) separates them.

fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// `Color/Primary 500` → `color-primary-500`.
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    words(input)
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `Color/Primary 500` → `colorPrimary500`.
///
/// Only the first word is lowercased; later words keep their tail as written.
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    words(input)
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_ascii_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Uppercase the first character.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Whether a token name reads as a number and therefore cannot name an SCSS
/// variable. Blank names count as numeric.
#[must_use]
pub fn is_numeric_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_splits_on_separators() {
        assert_eq!(to_kebab_case("Brand"), "brand");
        assert_eq!(to_kebab_case("Color/Primary 500"), "color-primary-500");
        assert_eq!(to_kebab_case("font_size--LG"), "font-size-lg");
        assert_eq!(to_kebab_case("/leading/"), "leading");
    }

    #[test]
    fn camel_case_keeps_tail_of_later_words() {
        assert_eq!(to_camel_case("Semantic Color"), "semanticColor");
        assert_eq!(to_camel_case("color/blue/500"), "colorBlue500");
        assert_eq!(to_camel_case("SPACE/xLarge"), "spaceXLarge");
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("dark"), "Dark");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn numeric_names() {
        assert!(is_numeric_name("100"));
        assert!(is_numeric_name(" 1.5 "));
        assert!(is_numeric_name(""));
        assert!(!is_numeric_name("NaN"));
        assert!(!is_numeric_name("100/tint"));
        assert!(!is_numeric_name("primary"));
    }
}
