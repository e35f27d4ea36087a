//! Relative ids
//!
//! A relative id is a slash-delimited path rooted at `#` naming where a
//! type sits in the document. Composing with a token that starts with `#`
//! replaces the whole id; any other token is appended after a `/`.

use std::fmt;

/// Document-local id of a schema node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeId(String);

impl RelativeId {
    /// Id of the document root
    pub const ROOT: &'static str = "#";

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Compose a token into this id
    pub fn add_token(&mut self, token: &str) {
        if token.starts_with('#') {
            self.0 = token.to_string();
        } else {
            self.0.push('/');
            self.0.push_str(token);
        }
    }

    /// A copy of this id with a token composed in
    pub fn child(&self, token: &str) -> Self {
        let mut id = self.clone();
        id.add_token(token);
        id
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RelativeId {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RelativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
