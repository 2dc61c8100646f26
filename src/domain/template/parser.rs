// Template parser using recursive descent

use tracing::debug;

use super::ast::{Placeholder, Position, Reference, Template, TemplatePart};
use super::options::ParseOpts;
use crate::error::ParseError;

/// Characters allowed in a variable name after `$`.
pub fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
    // Kept in step with `pos` so positions never require a rescan
    line: usize,
    column: usize,
    opts: &'a ParseOpts,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str, opts: &'a ParseOpts) -> Result<Template, ParseError> {
        let mut parser = Self {
            input: template,
            pos: 0,
            line: 1,
            column: 1,
            opts,
        };
        let template = parser.parse_template()?;
        debug!(
            parts = template.parts().len(),
            variables = template.variables().len(),
            uses_default = template.uses_default(),
            "compiled template"
        );
        Ok(template)
    }

    fn parse_template(&mut self) -> Result<Template, ParseError> {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '{' if self.peek_ahead(1) == Some('{') => {
                    self.bump();
                    self.bump();
                    literal_buf.push('{');
                }
                '{' => {
                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                    }
                    let placeholder = self.parse_placeholder()?;
                    parts.push(TemplatePart::Placeholder(placeholder));
                }
                '}' if self.peek_ahead(1) == Some('}') => {
                    self.bump();
                    self.bump();
                    literal_buf.push('}');
                }
                '}' => {
                    return Err(ParseError::UnmatchedClosingBrace {
                        position: self.here(),
                    });
                }
                _ => {
                    self.bump();
                    literal_buf.push(ch);
                }
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Ok(Template::new(parts))
    }

    fn parse_placeholder(&mut self) -> Result<Placeholder, ParseError> {
        let start = self.here();
        // Opening {
        self.bump();
        self.skip_whitespace();

        let reference = match self.peek_char() {
            Some('.') => {
                self.bump();
                Reference::Default
            }
            Some('$') => {
                self.bump();
                let name = self.parse_variable_name(start)?;
                self.check_declared(&name, start)?;
                Reference::Named(name)
            }
            Some('}') => {
                return Err(ParseError::EmptyPlaceholder { position: start });
            }
            Some(found) => {
                return Err(ParseError::UnexpectedCharacter {
                    found,
                    position: self.here(),
                });
            }
            None => {
                return Err(ParseError::UnterminatedPlaceholder { position: start });
            }
        };

        self.skip_whitespace();
        self.expect_closing(start)?;

        Ok(Placeholder {
            reference,
            position: start,
        })
    }

    fn parse_variable_name(&mut self, start: Position) -> Result<String, ParseError> {
        let name_start = self.pos;

        while let Some(ch) = self.peek_char() {
            if is_name_char(ch) {
                self.bump();
            } else {
                break;
            }
        }

        if self.pos == name_start {
            return Err(match self.peek_char() {
                None => ParseError::UnterminatedPlaceholder { position: start },
                Some(_) => ParseError::MissingVariableName {
                    position: self.here(),
                },
            });
        }

        Ok(self.input[name_start..self.pos].to_string())
    }

    fn check_declared(&self, name: &str, start: Position) -> Result<(), ParseError> {
        match &self.opts.globals {
            Some(globals) if !globals.contains(name) => Err(ParseError::UnknownVariable {
                name: name.to_string(),
                position: start,
            }),
            _ => Ok(()),
        }
    }

    fn expect_closing(&mut self, start: Position) -> Result<(), ParseError> {
        match self.peek_char() {
            Some('}') => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedCharacter {
                found,
                position: self.here(),
            }),
            None => Err(ParseError::UnterminatedPlaceholder { position: start }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// Consume one character, advancing line and column with it.
    fn bump(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn here(&self) -> Position {
        Position::new(self.pos, self.line, self.column)
    }
}
