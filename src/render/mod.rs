//! Turns API payloads into JSON, plain text or Markdown.
//!
//! Payloads are treated as opaque JSON: renderers only look up the fields they
//! print and fall back to defaults when a field is missing or has an odd type,
//! so rendering never fails on payload shape. The only errors are write errors.

use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

use crate::api::Endpoint;
use crate::types::OutputFormat;

mod extract;
mod search;
mod site;
mod usage;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    color: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Style {
    Title,
    Section,
    Answer,
    Failure,
    Strong,
    Link,
    Muted,
}

impl Renderer {
    /// `color` only affects text output; JSON and Markdown are never styled.
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Renderer { format, color }
    }

    pub fn render<W: Write>(
        &self,
        endpoint: Endpoint,
        response: &Value,
        out: &mut W,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, response)?;
            return writeln!(out);
        }
        match endpoint {
            Endpoint::Search => search::render(self, response, out),
            Endpoint::Extract => extract::render(self, response, out),
            Endpoint::Crawl => site::render_crawl(self, response, out),
            Endpoint::Map => site::render_map(self, response, out),
            Endpoint::Usage => usage::render(self, response, out),
        }
    }

    pub(crate) fn markdown(&self) -> bool {
        self.format == OutputFormat::Markdown
    }

    pub(crate) fn paint(&self, text: &str, style: Style) -> String {
        if !self.color || self.markdown() {
            return text.to_string();
        }
        match style {
            Style::Title => text.blue().bold(),
            Style::Section => text.yellow().bold(),
            Style::Answer => text.green().bold(),
            Style::Failure => text.red().bold(),
            Style::Strong => text.bold(),
            Style::Link => text.blue(),
            Style::Muted => text.bright_black(),
        }
        .to_string()
    }

    /// Trailing timing line shared by every command.
    pub(crate) fn write_response_time<W: Write>(
        &self,
        response: &Value,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(seconds) = response.get("response_time").and_then(as_number) else {
            return Ok(());
        };
        if self.markdown() {
            writeln!(out, "\n*Response time: {seconds:.2}s*")
        } else {
            let line = format!("Response time: {seconds:.2}s");
            writeln!(out, "\n{}", self.paint(&line, Style::Muted))
        }
    }
}

/// String field or `default` when absent or not a string.
pub(crate) fn text_or<'a>(value: &'a Value, key: &str, default: &'a str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or(default)
}

pub(crate) fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    text_or(value, key, "")
}

pub(crate) fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Printable form of a scalar; `None` for null.
pub(crate) fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Looks up `key` and prints it, or `default` when missing or null.
pub(crate) fn scalar_or(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(scalar)
        .unwrap_or_else(|| default.to_string())
}

/// Numeric field value, accepting numeric strings as well.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First `max_chars` characters of `s`, and whether anything was cut.
pub(crate) fn truncate(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("héllo", 2), ("hé", true));
        assert_eq!(truncate("héllo", 5), ("héllo", false));
        assert_eq!(truncate("", 3), ("", false));
    }

    #[test]
    fn test_scalar_or_defaults_on_null_and_missing() {
        let value = json!({"a": null, "b": 3, "c": "x"});
        assert_eq!(scalar_or(&value, "a", "0"), "0");
        assert_eq!(scalar_or(&value, "missing", "0"), "0");
        assert_eq!(scalar_or(&value, "b", "0"), "3");
        assert_eq!(scalar_or(&value, "c", "0"), "x");
    }

    #[test]
    fn test_as_number_accepts_numeric_strings() {
        assert_eq!(as_number(&json!(1.5)), Some(1.5));
        assert_eq!(as_number(&json!("0.25")), Some(0.25));
        assert_eq!(as_number(&json!(true)), None);
    }

    #[test]
    fn test_paint_is_plain_without_color() {
        let renderer = Renderer::new(OutputFormat::Text, false);
        assert_eq!(renderer.paint("Results", Style::Section), "Results");
    }
}
