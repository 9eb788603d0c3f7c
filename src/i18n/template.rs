//! Strict `{{ }}` template substitution
//!
//! Supported actions are field references (`{{.name}}`, `{{ .user.name }}`,
//! `{{.}}`) and comments (`{{/* ... */}}`). A leading `{{- ` or trailing ` -}}`
//! trims the adjacent whitespace. Referencing a variable that is not supplied
//! is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use super::bundle::TranslationParams;
use crate::utils::errors::{TemplateError, TemplateResult};

pub const LEFT_DELIM: &str = "{{";
pub const RIGHT_DELIM: &str = "}}";

static FIELD_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.(?:[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)?$")
        .expect("field path pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    /// Empty path refers to the whole parameter map
    Field(Vec<String>),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source
    pub fn parse(source: &str) -> TemplateResult<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;
        let mut trim_next = false;

        while let Some(start) = rest.find(LEFT_DELIM) {
            let mut text = &rest[..start];
            if trim_next {
                text = text.trim_start();
            }

            let after_open = &rest[start + LEFT_DELIM.len()..];
            let end = after_open
                .find(RIGHT_DELIM)
                .ok_or(TemplateError::UnclosedAction(offset + start))?;
            let mut body = &after_open[..end];

            if body.len() > 1 && body.starts_with('-') && body[1..].starts_with(char::is_whitespace) {
                body = &body[1..];
                text = text.trim_end();
            }

            trim_next = false;
            if body.len() > 1 && body.ends_with('-') && body[..body.len() - 1].ends_with(char::is_whitespace) {
                body = &body[..body.len() - 1];
                trim_next = true;
            }

            if !text.is_empty() {
                segments.push(Segment::Text(text.to_string()));
            }
            if let Some(segment) = parse_action(body.trim(), offset + start)? {
                segments.push(segment);
            }

            let consumed = start + LEFT_DELIM.len() + end + RIGHT_DELIM.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        let tail = if trim_next { rest.trim_start() } else { rest };
        if !tail.is_empty() {
            segments.push(Segment::Text(tail.to_string()));
        }

        Ok(Self { segments })
    }

    /// Render with the given parameters; every referenced variable must exist
    pub fn render(&self, params: &TranslationParams) -> TemplateResult<String> {
        let mut output = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Field(path) if path.is_empty() => {
                    output.push_str(&Value::Object(params.as_map().clone()).to_string());
                }
                Segment::Field(path) => {
                    let value = lookup(params, path)?;
                    output.push_str(&render_value(value));
                }
            }
        }

        Ok(output)
    }
}

fn parse_action(body: &str, offset: usize) -> TemplateResult<Option<Segment>> {
    if body.is_empty() {
        return Err(TemplateError::EmptyAction(offset));
    }

    if body.starts_with("/*") && body.ends_with("*/") && body.len() >= 4 {
        return Ok(None);
    }

    if !FIELD_PATH.is_match(body) {
        return Err(TemplateError::UnsupportedAction(body.to_string()));
    }

    let path = body[1..]
        .split('.')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    Ok(Some(Segment::Field(path)))
}

fn lookup<'a>(params: &'a TranslationParams, path: &[String]) -> TemplateResult<&'a Value> {
    let missing = |depth: usize| TemplateError::MissingVariable(path[..=depth].join("."));

    let mut current = params.get(&path[0]).ok_or_else(|| missing(0))?;
    for (depth, field) in path.iter().enumerate().skip(1) {
        current = match current {
            Value::Object(map) => map.get(field).ok_or_else(|| missing(depth))?,
            _ => {
                return Err(TemplateError::NotAnObject {
                    path: path[..depth].join("."),
                    field: field.clone(),
                })
            }
        };
    }

    Ok(current)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
