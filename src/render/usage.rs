use serde_json::Value;
use std::io::{self, Write};

use super::{Renderer, Style, scalar_or};

pub(super) fn render<W: Write>(r: &Renderer, response: &Value, out: &mut W) -> io::Result<()> {
    let empty = Value::Null;
    let key = response.get("key").unwrap_or(&empty);
    let account = response.get("account").unwrap_or(&empty);

    let usage = scalar_or(key, "usage", "0");
    let limit = limit(key);
    let plan = scalar_or(account, "current_plan", "Unknown");
    let plan_usage = scalar_or(account, "plan_usage", "0");
    let plan_limit = scalar_or(account, "plan_limit", "0");
    let paygo_usage = scalar_or(account, "paygo_usage", "0");
    let paygo_limit = scalar_or(account, "paygo_limit", "0");

    if r.markdown() {
        writeln!(out, "# API Usage\n")?;
        writeln!(out, "## API Key")?;
        writeln!(out, "- **Usage:** {usage}")?;
        writeln!(out, "- **Limit:** {limit}\n")?;
        writeln!(out, "## Account")?;
        writeln!(out, "- **Plan:** {plan}")?;
        writeln!(out, "- **Plan Usage:** {plan_usage} / {plan_limit}")?;
        writeln!(out, "- **PayGo Usage:** {paygo_usage} / {paygo_limit}")?;
    } else {
        writeln!(out, "{}\n", r.paint("API Usage", Style::Title))?;
        writeln!(out, "{}", r.paint("API Key:", Style::Section))?;
        writeln!(out, "  Usage: {usage}")?;
        writeln!(out, "  Limit: {limit}\n")?;
        writeln!(out, "{}", r.paint("Account:", Style::Section))?;
        writeln!(out, "  Plan: {plan}")?;
        writeln!(out, "  Plan Usage: {plan_usage} / {plan_limit}")?;
        writeln!(out, "  PayGo Usage: {paygo_usage} / {paygo_limit}")?;
    }
    r.write_response_time(response, out)
}

/// A missing, null, zero or blank limit means the key is uncapped.
fn limit(key: &Value) -> String {
    match key.get("limit") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => "Unlimited".to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => "Unlimited".to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => "Unlimited".to_string(),
        Some(_) => scalar_or(key, "limit", "Unlimited"),
    }
}
