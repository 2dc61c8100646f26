// Domain model: values, contexts and templates

pub mod context;
pub mod template;
pub mod value;

pub use context::{Context, ContextBuilder};
pub use template::{ParseOpts, Template, TemplateParser};
pub use value::{make_value, Value, ValueKind};
