//! Minimal selector grammar for locating the trigger and the panel
//!
//! Supported forms:
//! - `.class`
//! - `#id`
//! - `tag`
//! - `[attr]`, `[attr=value]`, `[attr="value"]`, `[attr='value']`
//!
//! Compound and combinator selectors are rejected; the toggle only ever needs
//! a single marker per element.

use std::fmt;
use std::str::FromStr;

use crate::error::{ToggleError, ToggleResult};

/// A single parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
    Tag(String),
    Attribute { name: String, value: Option<String> },
}

/// CSS identifier without escapes: no leading digit, no lone `-`, no `-`
/// followed by a digit.
fn is_ident(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    match body.chars().next() {
        None => false,
        Some(c) if c.is_ascii_digit() => false,
        Some(_) => body
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
    }
}

/// Attribute values are always written back quoted, so anything that would
/// end the quote or the bracket early is refused.
fn is_attribute_value(s: &str) -> bool {
    !s.chars()
        .any(|c| matches!(c, '"' | '\'' | ']' | '\\') || c.is_control())
}

fn unquote(raw: &str) -> &str {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

impl Selector {
    pub fn parse(input: &str) -> ToggleResult<Self> {
        let s = input.trim();
        let invalid = || ToggleError::InvalidSelector(input.to_string());

        if let Some(class) = s.strip_prefix('.') {
            return if is_ident(class) {
                Ok(Selector::Class(class.to_string()))
            } else {
                Err(invalid())
            };
        }

        if let Some(id) = s.strip_prefix('#') {
            return if is_ident(id) {
                Ok(Selector::Id(id.to_string()))
            } else {
                Err(invalid())
            };
        }

        if let Some(body) = s.strip_prefix('[') {
            let body = body.strip_suffix(']').ok_or_else(invalid)?;
            return match body.split_once('=') {
                Some((name, value)) => {
                    let name = name.trim();
                    let value = unquote(value);
                    if !is_ident(name) || !is_attribute_value(value) {
                        return Err(invalid());
                    }
                    Ok(Selector::Attribute {
                        name: name.to_ascii_lowercase(),
                        value: Some(value.to_string()),
                    })
                }
                None => {
                    let name = body.trim();
                    if !is_ident(name) {
                        return Err(invalid());
                    }
                    Ok(Selector::Attribute {
                        name: name.to_ascii_lowercase(),
                        value: None,
                    })
                }
            };
        }

        if is_ident(s) {
            Ok(Selector::Tag(s.to_ascii_lowercase()))
        } else {
            Err(invalid())
        }
    }
}

impl FromStr for Selector {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(class) => write!(f, ".{class}"),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Tag(tag) => write!(f, "{tag}"),
            Selector::Attribute { name, value: None } => write!(f, "[{name}]"),
            Selector::Attribute {
                name,
                value: Some(value),
            } => write!(f, "[{name}=\"{value}\"]"),
        }
    }
}
