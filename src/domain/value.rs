// Typed values carried from the caller through to rendering

use std::fmt;

/// A single runtime value bound in a context.
///
/// Every kind has a total conversion to text through [`fmt::Display`].
/// Numbers inferred from text keep that text as `source` and render it
/// verbatim, so `02134` or `1.10` come back exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer { value: i64, source: Option<String> },
    Float { value: f64, source: Option<String> },
    Boolean(bool),
}

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Boolean,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn integer(value: i64) -> Self {
        Value::Integer {
            value,
            source: None,
        }
    }

    pub fn float(value: f64) -> Self {
        Value::Float {
            value,
            source: None,
        }
    }

    /// Infer a kind from raw text. Never fails: anything that is not a
    /// boolean or a number stays text.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => return Value::Boolean(true),
            "false" => return Value::Boolean(false),
            _ => {}
        }

        if let Ok(value) = raw.parse::<i64>() {
            return Value::Integer {
                value,
                source: Some(raw.to_string()),
            };
        }

        // f64 parsing also accepts "inf", "NaN" and friends
        if raw.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(value) = raw.parse::<f64>() {
                if value.is_finite() {
                    return Value::Float {
                        value,
                        source: Some(raw.to_string()),
                    };
                }
            }
        }

        Value::Text(raw.to_string())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer { .. } => ValueKind::Integer,
            Value::Float { .. } => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Free-function form of [`Value::infer`].
pub fn make_value(raw: &str) -> Value {
    Value::infer(raw)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer {
                source: Some(raw), ..
            }
            | Value::Float {
                source: Some(raw), ..
            } => f.write_str(raw),
            Value::Integer { value, .. } => write!(f, "{value}"),
            Value::Float { value, .. } => {
                // Display never uses exponent form; it only drops the fraction
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_text() {
        assert_eq!(Value::infer("world"), Value::Text("world".to_string()));
        assert_eq!(Value::infer(""), Value::Text(String::new()));
        assert_eq!(Value::infer("True"), Value::Text("True".to_string()));
    }

    #[test]
    fn test_infer_integer() {
        assert_eq!(Value::infer("42").as_integer(), Some(42));
        assert_eq!(Value::infer("-7").as_integer(), Some(-7));
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(Value::infer("2.5").as_float(), Some(2.5));
        assert_eq!(Value::infer("1e3").as_float(), Some(1000.0));
    }

    #[test]
    fn test_infer_rejects_non_finite_floats() {
        assert_eq!(Value::infer("inf").kind(), ValueKind::Text);
        assert_eq!(Value::infer("NaN").kind(), ValueKind::Text);
        assert_eq!(Value::infer("infinity").kind(), ValueKind::Text);
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(Value::infer("true").as_bool(), Some(true));
        assert_eq!(Value::infer("false").as_bool(), Some(false));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let value = Value::infer("99999999999999999999");
        assert_eq!(value.kind(), ValueKind::Float);
        assert_eq!(value.to_text(), "99999999999999999999");
    }

    #[test]
    fn test_inferred_numbers_render_as_written() {
        for raw in ["02134", "+15551234567", "1.10", "1e3", "1e16", "0.00001", "-0"] {
            let value = make_value(raw);
            assert_ne!(value.kind(), ValueKind::Text, "{raw} should be numeric");
            assert_eq!(value.to_text(), raw);
        }
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Text("doe".to_string()).to_text(), "doe");
        assert_eq!(Value::integer(-3).to_text(), "-3");
        assert_eq!(Value::float(2.0).to_text(), "2.0");
        assert_eq!(Value::float(2.5).to_text(), "2.5");
        assert_eq!(Value::Boolean(false).to_text(), "false");
    }

    #[test]
    fn test_float_text_never_uses_exponent() {
        assert_eq!(Value::float(1e20).to_text(), "100000000000000000000.0");
        assert_eq!(Value::float(1e16).to_text(), "10000000000000000.0");
        assert_eq!(Value::float(1e-5).to_text(), "0.00001");
        assert_eq!(Value::float(-1e20).to_text(), "-100000000000000000000.0");
    }

    #[test]
    fn test_non_finite_float_text() {
        assert_eq!(Value::float(f64::INFINITY).to_text(), "inf");
        assert_eq!(Value::float(f64::NAN).to_text(), "NaN");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from(1i64).kind().name(), "integer");
        assert_eq!(Value::from("x").kind().to_string(), "text");
        assert_eq!(make_value("0.5").kind(), ValueKind::Float);
    }
}
