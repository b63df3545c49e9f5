//! Reading an emitted configuration asset back
//!
//! Consumers that ship the asset alongside non-browser tooling (smoke tests,
//! deploy checks) can parse it with [`AppConfig::from_asset`] instead of
//! evaluating script.

use appcfg_env::ResolvedConfig;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::naming::VariableName;
use crate::source::freeze_statements;

/// A parsed configuration asset. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    variable: VariableName,
    values: ResolvedConfig,
}

impl AppConfig {
    /// Parse the text of an asset written by the emitter.
    pub fn from_asset(text: &str) -> Result<Self> {
        let rest = text
            .strip_prefix("window.")
            .ok_or_else(|| invalid("missing `window.` assignment"))?;
        let (name, rest) = rest
            .split_once('=')
            .ok_or_else(|| invalid("missing `=` after variable name"))?;
        let variable = VariableName::parse(name)
            .ok_or_else(|| invalid(format!("`{name}` is not a configuration variable")))?;

        let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<ResolvedConfig>();
        let values = match stream.next() {
            Some(Ok(values)) => values,
            Some(Err(e)) => return Err(invalid(format!("configuration is not a JSON object: {e}"))),
            None => return Err(invalid("missing configuration object")),
        };
        let tail = &rest[stream.byte_offset()..];

        let expected = format!(";{}", freeze_statements(&variable));
        if tail != expected {
            return Err(invalid("unexpected statements after the configuration object"));
        }

        Ok(Self { variable, values })
    }

    pub fn variable(&self) -> &VariableName {
        &self.variable
    }

    pub fn values(&self) -> &ResolvedConfig {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidAsset {
        message: message.into(),
    }
}
