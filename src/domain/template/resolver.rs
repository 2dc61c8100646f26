// Rendering a compiled template against a context

use tracing::{debug, trace};

use super::ast::{Reference, Template, TemplatePart};
use crate::domain::context::Context;
use crate::error::RenderError;

impl Template {
    /// Render against `context`.
    ///
    /// All or nothing: the first unresolved name aborts the render and no
    /// partial output is returned.
    pub fn construct_with(&self, context: &Context) -> Result<String, RenderError> {
        let mut result = String::new();

        for part in self.parts() {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Placeholder(placeholder) => {
                    let value = match &placeholder.reference {
                        Reference::Named(name) => context.get(name).ok_or_else(|| {
                            RenderError::UnresolvedReference {
                                name: name.clone(),
                                position: placeholder.position,
                            }
                        })?,
                        Reference::Default => context.default_value(),
                    };
                    trace!(reference = ?placeholder.reference, kind = %value.kind(), "resolved placeholder");
                    result.push_str(&value.to_text());
                }
            }
        }

        debug!(bytes = result.len(), "rendered template");
        Ok(result)
    }

    /// Names referenced by the template that `context` does not bind
    pub fn missing_variables(&self, context: &Context) -> Vec<String> {
        self.variables()
            .iter()
            .filter(|name| !context.contains(name))
            .cloned()
            .collect()
    }
}
