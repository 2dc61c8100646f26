// Binding environment for rendering

use std::collections::HashMap;
use tracing::debug;

use super::value::Value;
use crate::error::ContextError;

/// Immutable name → value bindings plus exactly one default value.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    bindings: HashMap<String, Value>,
    default: Value,
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Value substituted for `{.}`
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of named bindings (the default is not counted)
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Single-owner accumulator for a [`Context`].
///
/// ```
/// use siplus::{Context, Value};
///
/// let mut builder = Context::builder();
/// builder
///     .use_default(Value::from("world"))?
///     .with("first", Value::from("john"))?;
/// let context = builder.build()?;
/// assert_eq!(context.len(), 1);
/// # Ok::<(), siplus::ContextError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    bindings: HashMap<String, Value>,
    default: Option<Value>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default value. Fails if one was already set.
    pub fn use_default(&mut self, value: impl Into<Value>) -> Result<&mut Self, ContextError> {
        if self.default.is_some() {
            return Err(ContextError::DefaultAlreadySet);
        }
        self.default = Some(value.into());
        Ok(self)
    }

    /// Bind `name`. Fails if it is already bound.
    pub fn with(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, ContextError> {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return Err(ContextError::DuplicateBinding { name });
        }
        self.bindings.insert(name, value.into());
        Ok(self)
    }

    /// Produce an immutable context; the builder stays usable.
    pub fn build(&self) -> Result<Context, ContextError> {
        let default = self.default.clone().ok_or(ContextError::MissingDefault)?;
        debug!(bindings = self.bindings.len(), "built context");
        Ok(Context {
            bindings: self.bindings.clone(),
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_default() {
        let mut builder = Context::builder();
        builder.with("a", "x").unwrap();
        assert_eq!(builder.build().unwrap_err(), ContextError::MissingDefault);
    }

    #[test]
    fn test_duplicate_binding_fails() {
        let mut builder = Context::builder();
        builder.with("a", "x").unwrap();
        let err = builder.with("a", "y").unwrap_err();
        assert_eq!(
            err,
            ContextError::DuplicateBinding {
                name: "a".to_string()
            }
        );

        // The first binding survives the failed call
        builder.use_default("d").unwrap();
        let ctx = builder.build().unwrap();
        assert_eq!(ctx.get("a"), Some(&Value::from("x")));
    }

    #[test]
    fn test_default_twice_fails() {
        let mut builder = Context::builder();
        builder.use_default("first").unwrap();
        assert_eq!(
            builder.use_default("second").unwrap_err(),
            ContextError::DefaultAlreadySet
        );
        let ctx = builder.build().unwrap();
        assert_eq!(ctx.default_value(), &Value::from("first"));
    }

    #[test]
    fn test_chained_building() {
        let mut builder = Context::builder();
        builder
            .use_default(Value::integer(0))
            .unwrap()
            .with("a", 1i64)
            .unwrap()
            .with("b", true)
            .unwrap();
        let ctx = builder.build().unwrap();
        assert_eq!(ctx.len(), 2);
        assert!(!ctx.is_empty());
        assert!(ctx.contains("b"));
        assert!(!ctx.contains("c"));

        let mut names: Vec<&str> = ctx.names().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_build_leaves_builder_usable() {
        let mut builder = Context::builder();
        builder.use_default("d").unwrap();
        let first = builder.build().unwrap();

        builder.with("late", "v").unwrap();
        let second = builder.build().unwrap();

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }
}
