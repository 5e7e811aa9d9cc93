use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::block::BlockType;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} .+").unwrap());
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. ").unwrap());

pub(crate) const CODE_FENCE: &str = "```";

/// Split a document into blocks separated by blank lines.
///
/// Every line is trimmed and blank lines are dropped, so no returned block
/// is empty.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let blocks: Vec<String> = markdown
        .split("\n\n")
        .map(clean_block)
        .filter(|block| !block.is_empty())
        .collect();
    debug!("segmented document into {} blocks", blocks.len());
    blocks
}

fn clean_block(block: &str) -> String {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Classify a block. The first matching rule wins; anything unmatched is a
/// paragraph.
pub fn classify_block(block: &str) -> BlockType {
    let block_type = if HEADING_RE.is_match(block) {
        BlockType::Heading
    } else if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        BlockType::Code
    } else if block.split('\n').all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if block.split('\n').all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };
    debug!("classified block as {:?}", block_type);
    block_type
}

// Only the start of the block is checked: later lines may carry any
// numbering (or none) and the block still counts as an ordered list.
fn is_ordered_list(block: &str) -> bool {
    block.split('\n').all(|_| ORDERED_ITEM_RE.is_match(block))
}
