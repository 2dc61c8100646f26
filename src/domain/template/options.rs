// Options passed by reference into every parse

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parse configuration.
///
/// When `globals` is `Some`, every `{$name}` must name a declared global or
/// the parse fails with [`crate::ParseError::UnknownVariable`]. `None`
/// leaves unknown names to be caught at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<BTreeSet<String>>,
}

impl ParseOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable validation against exactly these names.
    pub fn with_globals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.globals = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Declare one more global, enabling validation if it was off.
    pub fn with_global(mut self, name: impl Into<String>) -> Self {
        self.globals
            .get_or_insert_with(BTreeSet::new)
            .insert(name.into());
        self
    }

    pub fn validates_globals(&self) -> bool {
        self.globals.is_some()
    }
}
