// Error handling for siplus
//
// Three categories are kept apart so callers can react differently:
// building a context, parsing a template, and rendering one.

use thiserror::Error;

use crate::domain::template::Position;

/// Malformed template text, or a reference to an undeclared variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated placeholder starting at {position}")]
    UnterminatedPlaceholder { position: Position },

    #[error("unexpected closing brace at {position} (use '}}}}' for a literal brace)")]
    UnmatchedClosingBrace { position: Position },

    #[error("empty placeholder at {position}")]
    EmptyPlaceholder { position: Position },

    #[error("expected variable name after '$' at {position}")]
    MissingVariableName { position: Position },

    #[error("unexpected character '{found}' in placeholder at {position}")]
    UnexpectedCharacter { found: char, position: Position },

    #[error("unknown variable '{name}' at {position}")]
    UnknownVariable { name: String, position: Position },
}

impl ParseError {
    /// Location in the template source where the problem was found.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnterminatedPlaceholder { position }
            | ParseError::UnmatchedClosingBrace { position }
            | ParseError::EmptyPlaceholder { position }
            | ParseError::MissingVariableName { position }
            | ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnknownVariable { position, .. } => *position,
        }
    }
}

/// A compiled template referenced a name the context does not bind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unresolved reference to variable '{name}' at {position}")]
    UnresolvedReference { name: String, position: Position },
}

/// Misuse of the context builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("value {name} was already specified")]
    DuplicateBinding { name: String },

    #[error("default value already specified")]
    DefaultAlreadySet,

    #[error("no default value specified")]
    MissingDefault,
}

/// Any failure the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("execution error: {0}")]
    Render(#[from] RenderError),

    #[error("context error: {0}")]
    Context(#[from] ContextError),
}
