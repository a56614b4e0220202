//! Concrete value → literal text for a target stylesheet syntax.
//!
//! # Design
//! - Channels are scaled to 0–255 and rounded half away from zero (`f64::round`).
//! - Alpha is emitted as the raw fraction.
//! - Numbers use the shortest round-trip decimal; magnitudes of `1e21` and
//!   above, or below `1e-6`, switch to exponent form with an explicit sign
//!   (`1e+21`, `1e-7`).
//! - Unsupported shapes yield `None`; the generator chooses how to degrade.

use tokenpress_graph::{Color, ConcreteValue};

/// Stylesheet dialect a literal is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSyntax {
    /// Custom properties in plain CSS.
    Css,
    /// SCSS variables.
    Scss,
}

/// Render `value` as a literal in `syntax`.
#[must_use]
pub fn to_literal(value: &ConcreteValue, syntax: TargetSyntax) -> Option<String> {
    match value {
        ConcreteValue::String(text) => Some(match syntax {
            TargetSyntax::Css => format!("'{text}'"),
            TargetSyntax::Scss => format!("\"{text}\""),
        }),
        ConcreteValue::Number(number) => Some(number_literal(*number)),
        ConcreteValue::Boolean(flag) => Some(flag.to_string()),
        ConcreteValue::Color(color) => Some(match syntax {
            TargetSyntax::Css => css_color(*color),
            TargetSyntax::Scss => scss_color(*color),
        }),
        ConcreteValue::Unsupported(_) => None,
    }
}

fn number_literal(number: f64) -> String {
    if number == 0.0 {
        return "0".to_string();
    }
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = number.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return number.to_string();
    }
    let exponent = format!("{number:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

fn channel(fraction: f64) -> f64 {
    (fraction * 255.0).round()
}

fn css_color(color: Color) -> String {
    let rgb = format!(
        "{} {} {}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    );
    color.a.map_or_else(
        || format!("rgb({rgb})"),
        |alpha| format!("rgb({rgb} / {alpha})"),
    )
}

fn scss_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        color.a.unwrap_or(1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    #[test]
    fn css_colors() {
        assert_eq!(
            to_literal(&ConcreteValue::Color(red()), TargetSyntax::Css).as_deref(),
            Some("rgb(255 0 0)")
        );
        assert_eq!(
            to_literal(
                &ConcreteValue::Color(Color::rgba(1.0, 0.0, 0.0, 0.5)),
                TargetSyntax::Css
            )
            .as_deref(),
            Some("rgb(255 0 0 / 0.5)")
        );
    }

    #[test]
    fn scss_colors_default_alpha_to_one() {
        assert_eq!(
            to_literal(
                &ConcreteValue::Color(Color::rgba(1.0, 0.0, 0.0, 0.5)),
                TargetSyntax::Scss
            )
            .as_deref(),
            Some("rgba(255, 0, 0, 0.5)")
        );
        assert_eq!(
            to_literal(&ConcreteValue::Color(red()), TargetSyntax::Scss).as_deref(),
            Some("rgba(255, 0, 0, 1)")
        );
    }

    #[test]
    fn channels_round_to_nearest() {
        let color = ConcreteValue::Color(Color::rgb(0.5, 0.1, 0.999));
        assert_eq!(
            to_literal(&color, TargetSyntax::Css).as_deref(),
            Some("rgb(128 26 255)")
        );
    }

    #[test]
    fn scalars_per_syntax() {
        let text = ConcreteValue::String("Inter".into());
        assert_eq!(to_literal(&text, TargetSyntax::Css).as_deref(), Some("'Inter'"));
        assert_eq!(
            to_literal(&text, TargetSyntax::Scss).as_deref(),
            Some("\"Inter\"")
        );
        assert_eq!(
            to_literal(&ConcreteValue::Number(16.0), TargetSyntax::Css).as_deref(),
            Some("16")
        );
        assert_eq!(
            to_literal(&ConcreteValue::Number(0.125), TargetSyntax::Scss).as_deref(),
            Some("0.125")
        );
        assert_eq!(
            to_literal(&ConcreteValue::Boolean(false), TargetSyntax::Css).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn extreme_numbers_use_exponent_form() {
        let cases = [
            (1e21, "1e+21"),
            (-2.5e22, "-2.5e+22"),
            (1e-7, "1e-7"),
            (1.5e-7, "1.5e-7"),
            (1e20, "100000000000000000000"),
            (0.000_001, "0.000001"),
            (-0.0, "0"),
        ];
        for (number, expected) in cases {
            assert_eq!(
                to_literal(&ConcreteValue::Number(number), TargetSyntax::Css).as_deref(),
                Some(expected),
                "{number}"
            );
        }
    }

    #[test]
    fn unsupported_shapes_fail() {
        let value = ConcreteValue::Unsupported(json!({"expression": "1 + 1"}));
        assert!(to_literal(&value, TargetSyntax::Css).is_none());
        assert!(to_literal(&value, TargetSyntax::Scss).is_none());
    }
}
