mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod page;
mod parser;
pub mod site;

pub use block::{BlockType, Span};
pub use config::{Config, ConfigError, PageConfig, SiteConfig};
pub use error::{Error, Result};
pub use html::{block_to_node, span_to_node};
pub use inline::{
    convert_line_to_spans, extract_markdown_images, extract_markdown_links, split_nodes_delimiter,
    split_nodes_image, split_nodes_link,
};
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use page::render_page;
pub use parser::{classify_block, markdown_to_blocks};

/// Parse markdown into a `<div>` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block, classify_block(block)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Convert markdown straight to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Plain text of the document's leading `# ` heading.
///
/// Fails with [`Error::MissingTitle`] unless the first block is a level-1
/// heading.
pub fn extract_title(markdown: &str) -> Result<String> {
    let blocks = markdown_to_blocks(markdown);
    let first = blocks.first().ok_or(Error::MissingTitle)?;
    if classify_block(first) != BlockType::Heading || html::heading_level(first) != 1 {
        return Err(Error::MissingTitle);
    }
    Ok(block_to_node(first, BlockType::Heading)?.to_raw_text())
}
