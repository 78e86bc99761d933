//! Placeholder tokens matched literally in template text

use thiserror::Error;

/// Delimiter wrapped around every key to form its token
pub const DELIMITER: char = '@';

/// Reasons a descriptor key cannot become a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    /// Key is the empty string, which would match `@@`
    #[error("key is empty")]
    Empty,

    /// Key contains the delimiter and could overlap a neighbouring token
    #[error("key '{key}' contains the delimiter '{}'", DELIMITER)]
    ContainsDelimiter { key: String },

    /// Key contains a line break and could never match line-framed input
    #[error("key '{}' contains a line break", .key.escape_debug())]
    ContainsLineBreak { key: String },
}

/// A key compiled into its `@key@` token
///
/// Matching is a plain substring search. Characters that would be special in a
/// regex (`.`, `*`, `(`, ...) have no meaning here and match themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    key: String,
    token: String,
}

impl Placeholder {
    /// Compile a key, rejecting keys whose token would be ambiguous
    pub fn new(key: impl Into<String>) -> Result<Self, PlaceholderError> {
        let key = key.into();
        if key.is_empty() {
            return Err(PlaceholderError::Empty);
        }
        if key.contains(DELIMITER) {
            return Err(PlaceholderError::ContainsDelimiter { key });
        }
        if key.contains(['\n', '\r']) {
            return Err(PlaceholderError::ContainsLineBreak { key });
        }

        let token = format!("{DELIMITER}{key}{DELIMITER}");
        Ok(Self { key, token })
    }

    /// The bare key as written in the descriptor
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The delimited token searched for in text
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the token occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        text.contains(&self.token)
    }

    /// Replace every non-overlapping occurrence of the token, left to right
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        text.replace(&self.token, replacement)
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}
