//! Entry-document tag injection
//!
//! Hooks describe the tags they want injected; [`HtmlTransform::render`]
//! places them the way a bundler would.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEAD_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<head(\s[^>]*)?>").unwrap());
static HEAD_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</head\s*>").unwrap());
static BODY_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<body(\s[^>]*)?>").unwrap());
static BODY_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</body\s*>").unwrap());

/// Placement of an injected tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjectTo {
    /// Before `</head>`
    Head,
    /// Right after `<head>`
    HeadPrepend,
    /// Before `</body>`, or at the end of the document
    #[default]
    Body,
    /// Right after `<body>`
    BodyPrepend,
}

/// A tag to inject into an entry document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub inject_to: InjectTo,
}

impl HtmlTag {
    /// An external `<script src=...>` tag.
    pub fn script(src: impl Into<String>, inject_to: InjectTo) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("src".to_string(), src.into());
        Self {
            tag: "script".to_string(),
            attrs,
            inject_to,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Serialize as markup, escaping attribute values.
    pub fn to_html(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        out.push_str(&format!("></{}>", self.tag));
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Result of an HTML transform hook: the document plus tags to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTransform {
    pub html: String,
    pub tags: Vec<HtmlTag>,
}

impl HtmlTransform {
    /// Apply every tag to the document.
    pub fn render(&self) -> String {
        self.tags
            .iter()
            .fold(self.html.clone(), |html, tag| inject(&html, tag))
    }
}

fn inject(html: &str, tag: &HtmlTag) -> String {
    let markup = format!("{}\n", tag.to_html());
    let position = match tag.inject_to {
        InjectTo::Head => HEAD_CLOSE.find(html).map(|m| m.start()),
        InjectTo::HeadPrepend => HEAD_OPEN.find(html).map(|m| line_after(html, m.end())),
        InjectTo::Body => BODY_CLOSE.find(html).map(|m| m.start()),
        InjectTo::BodyPrepend => BODY_OPEN.find(html).map(|m| line_after(html, m.end())),
    };

    match (position, tag.inject_to) {
        (Some(pos), _) => {
            let mut out = String::with_capacity(html.len() + markup.len());
            out.push_str(&html[..pos]);
            if pos > 0 && !html[..pos].ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&markup);
            out.push_str(&html[pos..]);
            out
        }
        (None, InjectTo::Head | InjectTo::Body) => {
            let mut out = html.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&markup);
            out
        }
        (None, InjectTo::HeadPrepend | InjectTo::BodyPrepend) => format!("{markup}{html}"),
    }
}

/// Position just past the newline following `pos`, if it directly follows.
fn line_after(html: &str, pos: usize) -> usize {
    if html[pos..].starts_with('\n') {
        pos + 1
    } else {
        pos
    }
}
