//! Splits a line of raw text into typed [`Span`]s.
//!
//! Each stage only re-splits `Plain` spans, so formatting never nests.
//! Stages run in a fixed order: bold, italic, code, images, links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::block::Span;
use crate::error::{Error, Result};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// Same shape as an image without the `!`; the `!` check is done by hand
// since the regex crate has no lookbehind.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Convert one line of markdown into spans.
pub fn convert_line_to_spans(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::Plain(text.to_string())];
    let spans = split_nodes_delimiter(spans, "**", Span::Bold)?;
    let spans = split_nodes_delimiter(spans, "_", Span::Italic)?;
    let spans = split_nodes_delimiter(spans, "`", Span::Code)?;
    let spans = split_nodes_image(spans);
    let spans = split_nodes_link(spans);
    Ok(spans)
}

/// Split every `Plain` span on matched pairs of `delimiter`.
///
/// Text between a pair becomes a span built by `wrap`; the text around it
/// stays `Plain`, even when empty. An unmatched delimiter is an error.
pub fn split_nodes_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    wrap: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = text.as_str();
        while let Some((before, after)) = rest.split_once(delimiter) {
            let Some((inner, tail)) = after.split_once(delimiter) else {
                return Err(Error::DelimiterSyntax {
                    delimiter,
                    text: text.clone(),
                });
            };
            out.push(Span::Plain(before.to_string()));
            out.push(wrap(inner.to_string()));
            rest = tail;
        }
        out.push(Span::Plain(rest.to_string()));
    }
    Ok(out)
}

/// All `![alt](url)` occurrences in `text`, as `(alt, url)` pairs.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` occurrences in `text` that are not images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Split `Plain` spans around inline images.
pub fn split_nodes_image(spans: Vec<Span>) -> Vec<Span> {
    split_nodes_pattern(spans, |text| IMAGE_RE.captures_iter(text).collect(), |caps| {
        Span::Image {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
        }
    })
}

/// Split `Plain` spans around links, leaving images alone.
pub fn split_nodes_link(spans: Vec<Span>) -> Vec<Span> {
    split_nodes_pattern(spans, |text| link_captures(text).collect(), |caps| {
        Span::Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        }
    })
}

// Unlike the delimiter stages, empty `Plain` text is dropped here, so the
// boundary spans left by `**bold**` never reach the output.
fn split_nodes_pattern(
    spans: Vec<Span>,
    find: impl for<'h> Fn(&'h str) -> Vec<Captures<'h>>,
    build: impl Fn(&Captures<'_>) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut cursor = 0;
        for caps in find(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > cursor {
                out.push(Span::Plain(text[cursor..whole.start()].to_string()));
            }
            out.push(build(&caps));
            cursor = whole.end();
        }
        if cursor == 0 {
            if !text.is_empty() {
                out.push(Span::Plain(text));
            }
        } else if cursor < text.len() {
            out.push(Span::Plain(text[cursor..].to_string()));
        }
    }
    out
}

/// Link matches whose opening `[` is not directly preceded by `!`.
///
/// A rejected candidate resumes the scan one byte later, so a link nested
/// after a rejected position is still found.
fn link_captures(text: &str) -> impl Iterator<Item = Captures<'_>> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos <= text.len() {
            let caps = LINK_RE.captures_at(text, pos)?;
            let whole = caps.get(0)?;
            if text[..whole.start()].ends_with('!') {
                pos = whole.start() + 1;
                continue;
            }
            pos = whole.end();
            return Some(caps);
        }
        None
    })
}
