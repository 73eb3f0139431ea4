use serde_json::Value;
use std::io::{self, Write};

use super::{Renderer, Style, items, text, text_or, truncate};

const PREVIEW_CHARS: usize = 2000;

pub(super) fn render<W: Write>(r: &Renderer, response: &Value, out: &mut W) -> io::Result<()> {
    let md = r.markdown();

    if md {
        writeln!(out, "# Extracted Content\n")?;
    } else {
        writeln!(out, "{}\n", r.paint("Extracted Content", Style::Title))?;
    }

    for (i, result) in items(response, "results").iter().enumerate() {
        let n = i + 1;
        let url = text(result, "url");
        let content = text(result, "raw_content");

        if md {
            writeln!(out, "## {n}. {url}\n")?;
            writeln!(out, "{content}\n")?;
            writeln!(out, "---\n")?;
        } else {
            writeln!(out, "{}\n", r.paint(&format!("{n}. {url}"), Style::Strong))?;
            let (preview, cut) = truncate(content, PREVIEW_CHARS);
            writeln!(out, "{preview}")?;
            if cut {
                let remaining = content.chars().count() - PREVIEW_CHARS;
                writeln!(out, "\n... ({remaining} more characters)")?;
            }
            writeln!(out, "\n{}\n", "-".repeat(60))?;
        }
    }

    let failed = items(response, "failed_results");
    if !failed.is_empty() {
        if md {
            writeln!(out, "## Failed URLs\n")?;
        } else {
            writeln!(out, "{}", r.paint("Failed URLs:", Style::Failure))?;
        }
        let bullet = if md { "-" } else { "  -" };
        for failure in failed {
            let url = text(failure, "url");
            let error = text_or(failure, "error", "Unknown error");
            writeln!(out, "{bullet} {url}: {error}")?;
        }
    }

    r.write_response_time(response, out)
}
