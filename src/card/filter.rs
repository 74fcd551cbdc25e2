//! Classification and extraction helpers over block sequences.
//!
//! The conversion rules use these to split a mixed block collection into its
//! textual portion (one concatenated string) and everything else.

use super::block::Block;

pub fn is_text_block(block: &Block) -> bool {
    matches!(block, Block::TextBlock(_))
}

pub fn is_image(block: &Block) -> bool {
    matches!(block, Block::Image(_))
}

pub fn is_container(block: &Block) -> bool {
    matches!(block, Block::Container(_))
}

/// Concatenate the content of every text block, in original order.
///
/// No separator is inserted between fragments: spacing between adjacent runs
/// comes from the source text itself, which the whitespace collapse pass has
/// already normalized.
pub fn get_text_blocks_as_string(blocks: &[Block]) -> String {
    let mut text = String::new();
    for block in blocks {
        if let Block::TextBlock(tb) = block {
            text.push_str(&tb.text);
        }
    }
    text
}

/// Take every non-text block out of the collection, preserving order.
pub fn get_non_text_blocks(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .filter(|block| !is_text_block(block))
        .collect()
}
