use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::template::is_name_char;
use crate::domain::{Context, ParseOpts, Template, Value};
use crate::error::ContextError;

/// Bindings and parse settings read from a YAML document:
///
/// ```yaml
/// default: world
/// values:
///   first: john
///   count: 3
/// strict: true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InterpolationSettings {
    pub default: ScalarValue,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, ScalarValue>,
    /// Reject undeclared names at parse time
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

/// A YAML scalar. Quoted and plain strings both go through kind inference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&ScalarValue> for Value {
    fn from(scalar: &ScalarValue) -> Self {
        match scalar {
            ScalarValue::Bool(b) => Value::Boolean(*b),
            ScalarValue::Integer(i) => Value::integer(*i),
            ScalarValue::Float(x) => Value::float(*x),
            ScalarValue::Text(s) => Value::infer(s),
        }
    }
}

impl InterpolationSettings {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Self =
            serde_yaml::from_str(yaml).context("Failed to parse interpolation settings")?;

        for name in settings.values.keys() {
            if name.is_empty() || !name.chars().all(is_name_char) {
                bail!("Invalid variable name '{}' in interpolation settings", name);
            }
        }

        Ok(settings)
    }

    pub fn parse_opts(&self) -> ParseOpts {
        if self.strict {
            ParseOpts::new().with_globals(self.values.keys().cloned())
        } else {
            ParseOpts::new()
        }
    }

    pub fn context(&self) -> Result<Context, ContextError> {
        let mut builder = Context::builder();
        builder.use_default(Value::from(&self.default))?;
        for (name, scalar) in &self.values {
            builder.with(name.as_str(), Value::from(scalar))?;
        }
        builder.build()
    }

    /// Parse, bind and render in one step.
    pub fn interpolate(&self, template: &str) -> Result<String> {
        let template = Template::parse(template, &self.parse_opts()).context("parse error")?;
        let context = self.context().context("context error")?;
        let text = template
            .construct_with(&context)
            .context("execution error")?;
        Ok(text)
    }
}
