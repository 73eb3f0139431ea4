use serde_json::Value;
use std::io::{self, Write};

use super::{Renderer, Style, items, scalar, text, truncate};

const TEXT_PREVIEW_CHARS: usize = 300;
const MARKDOWN_PREVIEW_CHARS: usize = 500;

pub(super) fn render_crawl<W: Write>(
    r: &Renderer,
    response: &Value,
    out: &mut W,
) -> io::Result<()> {
    let base_url = text(response, "base_url");
    let results = items(response, "results");
    let md = r.markdown();

    if md {
        writeln!(out, "# Crawl Results: {base_url}\n")?;
        writeln!(out, "## Pages Crawled ({})\n", results.len())?;
    } else {
        let title = format!("Crawl Results: {base_url}");
        writeln!(out, "{}\n", r.paint(&title, Style::Title))?;
        let heading = format!("Pages Crawled ({}):", results.len());
        writeln!(out, "{}\n", r.paint(&heading, Style::Section))?;
    }

    for (i, result) in results.iter().enumerate() {
        let n = i + 1;
        let url = text(result, "url");
        let content = text(result, "raw_content");

        if md {
            writeln!(out, "### {n}. {url}\n")?;
            let (preview, cut) = truncate(content, MARKDOWN_PREVIEW_CHARS);
            writeln!(out, "{preview}{}\n", ellipsis(cut))?;
        } else {
            writeln!(out, "{}", r.paint(&format!("{n}. {url}"), Style::Strong))?;
            let (preview, cut) = truncate(content, TEXT_PREVIEW_CHARS);
            writeln!(out, "   {preview}{}\n", ellipsis(cut))?;
        }
    }

    r.write_response_time(response, out)
}

pub(super) fn render_map<W: Write>(r: &Renderer, response: &Value, out: &mut W) -> io::Result<()> {
    let base_url = text(response, "base_url");
    let results = items(response, "results");

    if r.markdown() {
        writeln!(out, "# Site Map: {base_url}\n")?;
        writeln!(out, "## URLs Found ({})\n", results.len())?;
        for url in results.iter().map(url_of) {
            writeln!(out, "- {url}")?;
        }
    } else {
        let title = format!("Site Map: {base_url}");
        writeln!(out, "{}\n", r.paint(&title, Style::Title))?;
        let heading = format!("URLs Found ({}):", results.len());
        writeln!(out, "{}\n", r.paint(&heading, Style::Section))?;
        for url in results.iter().map(url_of) {
            writeln!(out, "  {url}")?;
        }
    }

    r.write_response_time(response, out)
}

/// Map results are bare URL strings; objects carrying a `url` are accepted too.
fn url_of(item: &Value) -> String {
    match item {
        Value::Object(_) => text(item, "url").to_string(),
        other => scalar(other).unwrap_or_default(),
    }
}

fn ellipsis(cut: bool) -> &'static str {
    if cut { "..." } else { "" }
}
