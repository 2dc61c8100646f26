// Compiled template representation

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A location in template source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the template
    pub offset: usize,
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Parsed template: an immutable sequence of literal runs and placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    parts: Vec<TemplatePart>,
    variables: BTreeSet<String>,
}

impl Template {
    pub(crate) fn new(parts: Vec<TemplatePart>) -> Self {
        let variables = parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Placeholder(p) => p.reference.name(),
                _ => None,
            })
            .map(str::to_string)
            .collect();

        Self { parts, variables }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Distinct variable names referenced, in sorted order
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Placeholder(p) => Some(p),
            _ => None,
        })
    }

    pub fn uses_default(&self) -> bool {
        self.placeholders()
            .any(|p| matches!(p.reference, Reference::Default))
    }

    /// The literal text with every placeholder removed.
    pub fn skeleton(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Literal(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn metadata(&self) -> TemplateMetadata {
        TemplateMetadata::from_template(self)
    }
}

/// A template consists of literal strings and placeholders
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub reference: Reference,
    /// Position of the opening brace
    pub position: Position,
}

/// What a placeholder resolves against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `{$name}`
    Named(String),
    /// `{.}`
    Default,
}

impl Reference {
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Named(name) => Some(name.as_str()),
            Reference::Default => None,
        }
    }
}

/// Summary of a template for tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub variables: Vec<String>,
    pub uses_default: bool,
    pub placeholders: usize,
}

impl TemplateMetadata {
    pub fn from_template(template: &Template) -> Self {
        Self {
            variables: template.variables().iter().cloned().collect(),
            uses_default: template.uses_default(),
            placeholders: template.placeholders().count(),
        }
    }
}
