//! siplus: string interpolation engine.
//!
//! Templates are compiled once into an immutable [`Template`] and rendered
//! any number of times against a [`Context`] of typed values.
//!
//! - `{$name}` substitutes a named binding
//! - `{.}` substitutes the context's default value
//! - `{{` and `}}` produce literal braces
//!
//! ```
//! use siplus::{make_value, Context, ParseOpts, Template};
//!
//! let opts = ParseOpts::new().with_globals(["first", "last"]);
//! let template = Template::parse("Hello, {$first} {$last}", &opts)?;
//!
//! let mut builder = Context::builder();
//! builder
//!     .use_default(make_value("world"))?
//!     .with("first", make_value("john"))?
//!     .with("last", make_value("doe"))?;
//!
//! assert_eq!(template.construct_with(&builder.build()?)?, "Hello, john doe");
//! # Ok::<(), siplus::InterpolationError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::{InterpolationSettings, ScalarValue};
pub use domain::template::{
    is_name_char, Placeholder, Position, Reference, TemplateMetadata, TemplatePart,
};
pub use domain::{
    make_value, Context, ContextBuilder, ParseOpts, Template, TemplateParser, Value, ValueKind,
};
pub use error::{ContextError, InterpolationError, ParseError, RenderError};
