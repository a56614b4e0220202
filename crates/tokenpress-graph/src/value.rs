//! Tagged variable values.
//!
//! # Design
//! - The export encodes aliases and colors as plain JSON objects; they are
//!   classified once at decode time into explicit variants.
//! - Shapes the pipeline cannot render are kept as `Unsupported` so the graph
//!   still round-trips and the generators decide how to degrade.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Discriminator the export uses for alias objects.
pub const ALIAS_TYPE: &str = "VARIABLE_ALIAS";

/// Value stored for a variable in one mode.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    /// A terminal value.
    Concrete(ConcreteValue),
    /// A reference to another variable.
    Alias(VariableAlias),
}

/// Reference to another variable by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAlias {
    /// Identifier of the referenced variable.
    pub id: String,
}

/// Terminal variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConcreteValue {
    /// Free-form text.
    String(String),
    /// Numeric value, kept at full precision.
    Number(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Color with channels in `[0, 1]`.
    Color(Color),
    /// Any other JSON shape.
    Unsupported(Value),
}

/// Color with fractional channels; alpha is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel in `[0, 1]`.
    pub r: f64,
    /// Green channel in `[0, 1]`.
    pub g: f64,
    /// Blue channel in `[0, 1]`.
    pub b: f64,
    /// Alpha fraction, present for RGBA colors.
    pub a: Option<f64>,
}

impl Color {
    /// Opaque RGB color.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// RGBA color with an explicit alpha.
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let channel = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_f64)
                .filter(|value| (0.0..=1.0).contains(value))
        };
        let alpha = match object.get("a") {
            None => None,
            Some(value) => Some(value.as_f64()?),
        };
        Some(Self {
            r: channel("r")?,
            g: channel("g")?,
            b: channel("b")?,
            a: alpha,
        })
    }

    fn to_json(self) -> Value {
        let mut object = Map::new();
        object.insert("r".into(), json!(self.r));
        object.insert("g".into(), json!(self.g));
        object.insert("b".into(), json!(self.b));
        if let Some(alpha) = self.a {
            object.insert("a".into(), json!(alpha));
        }
        Value::Object(object)
    }
}

impl ConcreteValue {
    /// Short label of the value shape, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Color(_) => "color",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl VariableValue {
    /// Classify a raw JSON value.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Concrete(ConcreteValue::String(text)),
            Value::Bool(flag) => Self::Concrete(ConcreteValue::Boolean(flag)),
            Value::Number(number) => number.as_f64().map_or_else(
                || Self::Concrete(ConcreteValue::Unsupported(Value::Number(number.clone()))),
                |n| Self::Concrete(ConcreteValue::Number(n)),
            ),
            Value::Object(object) => {
                if let Some(alias) = alias_from_object(&object) {
                    return Self::Alias(alias);
                }
                Color::from_object(&object).map_or_else(
                    || Self::Concrete(ConcreteValue::Unsupported(Value::Object(object.clone()))),
                    |color| Self::Concrete(ConcreteValue::Color(color)),
                )
            }
            other => Self::Concrete(ConcreteValue::Unsupported(other)),
        }
    }

    /// Render back into the export's JSON shape.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Alias(alias) => json!({ "type": ALIAS_TYPE, "id": alias.id }),
            Self::Concrete(ConcreteValue::String(text)) => Value::String(text.clone()),
            Self::Concrete(ConcreteValue::Number(number)) => json!(number),
            Self::Concrete(ConcreteValue::Boolean(flag)) => Value::Bool(*flag),
            Self::Concrete(ConcreteValue::Color(color)) => color.to_json(),
            Self::Concrete(ConcreteValue::Unsupported(raw)) => raw.clone(),
        }
    }

    /// Alias pointing at `id`.
    #[must_use]
    pub fn alias(id: impl Into<String>) -> Self {
        Self::Alias(VariableAlias { id: id.into() })
    }
}

fn alias_from_object(object: &Map<String, Value>) -> Option<VariableAlias> {
    if object.get("type").and_then(Value::as_str) != Some(ALIAS_TYPE) {
        return None;
    }
    let id = object.get("id").and_then(Value::as_str)?;
    Some(VariableAlias { id: id.to_string() })
}

impl<'de> Deserialize<'de> for VariableValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl Serialize for VariableValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
