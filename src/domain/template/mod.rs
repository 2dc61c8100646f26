// Template module for `{$name}` / `{.}` interpolation
//
// This module provides parsing of template text into an immutable compiled
// form and rendering of that form against a context.

mod ast;
mod options;
mod parser;
mod resolver;

pub use ast::{Placeholder, Position, Reference, Template, TemplateMetadata, TemplatePart};
pub use options::ParseOpts;
pub use parser::{is_name_char, TemplateParser};

use crate::error::ParseError;

impl Template {
    /// Parse with `opts`.
    pub fn parse(text: &str, opts: &ParseOpts) -> Result<Template, ParseError> {
        TemplateParser::parse(text, opts)
    }

    /// Parse without validating names against declared globals.
    pub fn compile(text: &str) -> Result<Template, ParseError> {
        TemplateParser::parse(text, &ParseOpts::default())
    }
}
