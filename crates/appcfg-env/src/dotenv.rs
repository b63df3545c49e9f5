//! `.env` file loader
//!
//! Reads `.env` and then `.env.<mode>` from the project root, later files
//! overriding earlier ones, and publishes every variable whose name starts
//! with the configured prefix. Values are published as JSON strings.

use std::collections::BTreeMap;
use std::io::ErrorKind;

use appcfg_fs::NormalizedPath;
use async_trait::async_trait;
use serde_json::Value;

use crate::env::{EnvironmentLoader, ResolvedConfig};
use crate::error::{Error, Result};

/// Mode used when the host does not name one
pub const DEFAULT_MODE: &str = "production";

/// Only variables with this prefix reach the published configuration
pub const DEFAULT_PREFIX: &str = "VITE_GLOB_";

/// Loads build configuration from dotenv files in a project root.
#[derive(Debug, Clone)]
pub struct DotenvLoader {
    root: NormalizedPath,
    mode: String,
    prefix: String,
}

impl DotenvLoader {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            mode: DEFAULT_MODE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Files read, in override order.
    pub fn env_files(&self) -> Vec<String> {
        let mut files = vec![".env".to_string()];
        let mode_file = format!(".env.{}", self.mode);
        if !self.mode.is_empty() && !files.contains(&mode_file) {
            files.push(mode_file);
        }
        files
    }

    /// Read and merge every variable from the env files, unfiltered.
    ///
    /// Missing files are skipped. A file that exists but cannot be read or
    /// parsed is an error.
    pub async fn read_vars(&self) -> Result<BTreeMap<String, String>> {
        let mut vars = BTreeMap::new();

        for name in self.env_files() {
            let path = self.root.join(&name);
            let content = match tokio::fs::read_to_string(path.to_native()).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(%path, "env file not found, skipping");
                    continue;
                }
                Err(e) => return Err(appcfg_fs::Error::io(path.to_native(), e).into()),
            };

            let before = vars.len();
            let content = quote_unquoted_values(&content);
            for item in dotenvy::from_read_iter(content.as_bytes()) {
                let (key, value) = item.map_err(|e| Error::EnvFile {
                    path: path.to_native(),
                    message: e.to_string(),
                })?;
                vars.insert(key, value);
            }
            tracing::debug!(%path, added = vars.len() - before, "loaded env file");
        }

        Ok(vars)
    }
}

/// Rewrite unquoted values into the double-quoted form dotenvy accepts.
///
/// Unquoted values follow the Node `dotenv` rules vite projects are written
/// against: the text up to `#` or the end of the line, trimmed, with inner
/// whitespace kept. Comments, quoted values and anything that is not an
/// assignment pass through, so dotenvy still rejects malformed lines.
fn quote_unquoted_values(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut open_quote: Option<char> = None;

    for line in content.lines() {
        if let Some(quote) = open_quote {
            // Continuation of a multi-line quoted value
            if find_closing(line, quote).is_some() {
                open_quote = None;
            }
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let trimmed = line.trim_start();
        let assignment = trimmed
            .split_once('=')
            .filter(|_| !trimmed.starts_with('#'));
        let Some((key, value)) = assignment else {
            out.push_str(line);
            out.push('\n');
            continue;
        };

        let key = key.trim_end();
        let value = value.trim_start();
        match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                if find_closing(&value[1..], quote).is_none() {
                    open_quote = Some(quote);
                }
                push_raw(&mut out, key, value);
            }
            Some('`') => match find_closing(&value[1..], '`') {
                Some(end) => push_double_quoted(&mut out, key, &value[1..=end]),
                None => push_raw(&mut out, key, value),
            },
            _ => {
                let unquoted = value.split_once('#').map_or(value, |(v, _)| v).trim();
                if unquoted.chars().all(is_plain_char) {
                    push_raw(&mut out, key, unquoted);
                } else {
                    push_double_quoted(&mut out, key, unquoted);
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Index of the first unescaped `quote` in `text`.
fn find_closing(text: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

fn is_plain_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '"' | '\'' | '`' | '\\')
}

fn push_raw(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
}

fn push_double_quoted(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str("=\"");
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

#[async_trait]
impl EnvironmentLoader for DotenvLoader {
    async fn load(&self) -> Result<ResolvedConfig> {
        let vars = self.read_vars().await?;
        let config: ResolvedConfig = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with(&self.prefix))
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        tracing::debug!(keys = config.len(), prefix = %self.prefix, "resolved build config");
        Ok(config)
    }
}
