use serde_json::Value;
use std::io::{self, Write};

use super::{Renderer, Style, as_number, items, scalar, text, text_or, truncate};

const SNIPPET_CHARS: usize = 200;

pub(super) fn render<W: Write>(r: &Renderer, response: &Value, out: &mut W) -> io::Result<()> {
    let query = text(response, "query");
    let answer = response
        .get("answer")
        .and_then(scalar)
        .filter(|a| !a.is_empty());
    let results = items(response, "results");
    let md = r.markdown();

    if md {
        writeln!(out, "# Search: {query}\n")?;
    } else {
        writeln!(out, "{}\n", r.paint(&format!("Search: {query}"), Style::Title))?;
    }

    if let Some(answer) = answer {
        if md {
            writeln!(out, "## Answer\n\n{answer}\n")?;
        } else {
            writeln!(out, "{}", r.paint("Answer:", Style::Answer))?;
            writeln!(out, "{answer}\n")?;
        }
    }

    if md {
        writeln!(out, "## Results ({})\n", results.len())?;
    } else {
        let heading = format!("Results ({}):", results.len());
        writeln!(out, "{}\n", r.paint(&heading, Style::Section))?;
    }

    for (i, result) in results.iter().enumerate() {
        let n = i + 1;
        let title = text_or(result, "title", "No title");
        let url = text(result, "url");
        let content = text(result, "content");
        let score = result.get("score").and_then(as_number).unwrap_or(0.0);

        if md {
            writeln!(out, "### {n}. [{title}]({url})")?;
            writeln!(out, "*Score: {score:.2}*\n")?;
            writeln!(out, "{content}\n")?;
        } else {
            writeln!(out, "{}", r.paint(&format!("{n}. {title}"), Style::Strong))?;
            writeln!(out, "{}", r.paint(&format!("   {url}"), Style::Link))?;
            writeln!(out, "   Score: {score:.2}")?;
            let (snippet, cut) = truncate(content, SNIPPET_CHARS);
            writeln!(out, "   {snippet}{}\n", if cut { "..." } else { "" })?;
        }
    }

    write_images(r, items(response, "images"), out)?;
    r.write_response_time(response, out)
}

fn write_images<W: Write>(r: &Renderer, images: &[Value], out: &mut W) -> io::Result<()> {
    if images.is_empty() {
        return Ok(());
    }
    if r.markdown() {
        writeln!(out, "## Images ({})\n", images.len())?;
    } else {
        let heading = format!("Images ({}):", images.len());
        writeln!(out, "{}", r.paint(&heading, Style::Section))?;
    }

    for image in images {
        match image {
            Value::Object(_) => {
                let url = text(image, "url");
                let description = text(image, "description");
                if r.markdown() {
                    writeln!(out, "- ![{description}]({url})")?;
                } else {
                    writeln!(out, "  - {url} - {description}")?;
                }
            }
            other => {
                let image = scalar(other).unwrap_or_default();
                if r.markdown() {
                    writeln!(out, "- {image}")?;
                } else {
                    writeln!(out, "  - {image}")?;
                }
            }
        }
    }
    Ok(())
}
