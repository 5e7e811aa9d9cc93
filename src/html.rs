use std::sync::LazyLock;

use regex::Regex;

use crate::block::{BlockType, Span};
use crate::error::Result;
use crate::inline::convert_line_to_spans;
use crate::node::HtmlNode;
use crate::parser::CODE_FENCE;

static QUOTE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*(.*)$").unwrap());

/// Convert a classified block into its HTML subtree.
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading => heading_to_node(block),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::Quote => Ok(quote_to_node(block)),
        BlockType::UnorderedList => list_to_node(block, "ul"),
        BlockType::OrderedList => list_to_node(block, "ol"),
    }
}

pub fn span_to_node(span: Span) -> HtmlNode {
    match span {
        Span::Plain(text) => HtmlNode::text(text),
        Span::Bold(text) => HtmlNode::leaf("b", text),
        Span::Italic(text) => HtmlNode::leaf("i", text),
        Span::Code(text) => HtmlNode::leaf("code", text),
        Span::Link { text, url } => HtmlNode::leaf("a", text).with_attribute("href", url),
        Span::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(convert_line_to_spans(text)?
        .into_iter()
        .map(span_to_node)
        .collect())
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

/// Heading level (1-6) of a block already classified as a heading.
pub(crate) fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}

fn heading_to_node(block: &str) -> Result<HtmlNode> {
    let level = heading_level(block);
    let rest = &block[level..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let text = rest.replace('\n', " ");
    let tag = format!("h{level}");
    Ok(HtmlNode::parent(&tag, text_to_children(&text)?))
}

// Fence contents are kept literal: no inline spans are parsed.
fn code_to_node(block: &str) -> HtmlNode {
    let end = block.len().saturating_sub(CODE_FENCE.len());
    let inner = block.get(CODE_FENCE.len()..end).unwrap_or("");
    let mut text = inner
        .split('\n')
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", text)])
}

fn quote_to_node(block: &str) -> HtmlNode {
    let text = block
        .split('\n')
        .map(|line| match QUOTE_LINE_RE.captures(line) {
            Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
            None => line,
        })
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::parent("pre", vec![HtmlNode::leaf("blockquote", text)])
}

fn list_to_node(block: &str, tag: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let content = line
                .split_once(char::is_whitespace)
                .map_or("", |(_marker, rest)| rest);
            Ok(HtmlNode::parent("li", text_to_children(content)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn render(block: &str, block_type: BlockType) -> String {
        block_to_node(block, block_type).unwrap().to_html().unwrap()
    }

    #[test]
    fn paragraph_joins_lines_with_spaces() {
        assert_eq!(
            render(
                "This is **bolded** paragraph\ntext in a p\ntag here",
                BlockType::Paragraph
            ),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            render("# This is a heading", BlockType::Heading),
            "<h1>This is a heading</h1>"
        );
        assert_eq!(
            render("## This is a heading with **bold** text", BlockType::Heading),
            "<h2>This is a heading with <b>bold</b> text</h2>"
        );
        assert_eq!(
            render("### This is a heading\nacross multiple lines", BlockType::Heading),
            "<h3>This is a heading across multiple lines</h3>"
        );
    }

    #[test]
    fn code_block_is_literal() {
        assert_eq!(
            render(
                "```\nThis is text that _should_ remain\nthe **same** even with `inline` stuff\n```",
                BlockType::Code
            ),
            "<pre><code>This is text that _should_ remain\nthe **same** even with `inline` stuff\n</code></pre>"
        );
    }

    #[test]
    fn code_block_keeps_info_string_as_text() {
        assert_eq!(
            render("```rust\nlet x = 1;\n```", BlockType::Code),
            "<pre><code>rust\nlet x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn bare_fence_compiles_to_empty_body() {
        assert_eq!(render("```", BlockType::Code), "<pre><code>\n</code></pre>");
        assert_eq!(render("````", BlockType::Code), "<pre><code>\n</code></pre>");
    }

    #[test]
    fn quote_strips_markers_and_leading_whitespace() {
        assert_eq!(
            render(
                ">One morning.\n> He lay on his back.\n>   His many legs.\n>\tHis room.",
                BlockType::Quote
            ),
            "<pre><blockquote>One morning. He lay on his back. His many legs. His room.</blockquote></pre>"
        );
    }

    #[test]
    fn quote_content_is_not_span_split() {
        assert_eq!(
            render("> It was the **best** of times\n>It was the _worst", BlockType::Quote),
            "<pre><blockquote>It was the **best** of times It was the _worst</blockquote></pre>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render(
                "- unordered list item with **bold**\n- unordered _italic_ list item",
                BlockType::UnorderedList
            ),
            "<ul><li>unordered list item with <b>bold</b></li><li>unordered <i>italic</i> list item</li></ul>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render(
                "1. ordered list item 1\n2. ordered list item 2",
                BlockType::OrderedList
            ),
            "<ol><li>ordered list item 1</li><li>ordered list item 2</li></ol>"
        );
    }

    #[test]
    fn ordered_list_strips_first_token_of_unnumbered_lines() {
        assert_eq!(
            render("1. first\nsecond item", BlockType::OrderedList),
            "<ol><li>first</li><li>item</li></ol>"
        );
    }

    #[test]
    fn list_line_with_nothing_after_marker_cannot_serialize() {
        let node = block_to_node("1. a\nb", BlockType::OrderedList).unwrap();
        assert!(matches!(node.to_html(), Err(Error::Structural(_))));
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            render(
                "A [link](https://boot.dev) and ![alt text](/img.png)",
                BlockType::Paragraph
            ),
            r#"<p>A <a href="https://boot.dev">link</a> and <img src="/img.png" alt="alt text"></img></p>"#
        );
    }

    #[test]
    fn span_conversion() {
        assert_eq!(span_to_node(Span::Plain("x".into())), HtmlNode::text("x"));
        assert_eq!(span_to_node(Span::Italic("x".into())), HtmlNode::leaf("i", "x"));
        assert_eq!(
            span_to_node(Span::Image {
                alt: "a".into(),
                url: "u".into()
            }),
            HtmlNode::leaf("img", "")
                .with_attribute("src", "u")
                .with_attribute("alt", "a")
        );
    }

    #[test]
    fn delimiter_error_propagates_from_list_item() {
        let err = block_to_node("- fine\n- **broken", BlockType::UnorderedList).unwrap_err();
        assert!(matches!(err, Error::DelimiterSyntax { .. }));
    }
}
