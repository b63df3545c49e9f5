//! Global variable naming
//!
//! The configuration is published under `window.__PRODUCTION__{TITLE}__CONF__`,
//! where `TITLE` comes from the application title. Whitespace becomes `_`,
//! letters are uppercased, and anything else that is not valid in a plain
//! identifier also becomes `_`, so the name always matches
//! `__PRODUCTION__[A-Z0-9_]+__CONF__`.

use std::fmt;

const PREFIX: &str = "__PRODUCTION__";
const SUFFIX: &str = "__CONF__";

/// Title token used when the application has no title
pub const DEFAULT_TITLE_TOKEN: &str = "__APP";

/// Name of the global variable that holds the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableName(String);

impl VariableName {
    /// Accept an already-derived name, checking its shape.
    pub fn parse(name: &str) -> Option<Self> {
        let inner = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
        if inner.is_empty() || !inner.chars().all(is_name_char) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Replace every whitespace character with `_`.
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Derive the global variable name from a human-readable title.
pub fn derive_variable_name(title: &str) -> VariableName {
    let normalized = normalize_title(title);
    let token = if normalized.is_empty() {
        DEFAULT_TITLE_TOKEN
    } else {
        normalized.as_str()
    };

    let mut name = String::with_capacity(PREFIX.len() + token.len() + SUFFIX.len());
    name.push_str(PREFIX);
    name.extend(
        token
            .to_uppercase()
            .chars()
            .map(|c| if is_name_char(c) { c } else { '_' }),
    );
    name.push_str(SUFFIX);
    VariableName(name)
}
