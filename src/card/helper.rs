//! Block constructors and the container envelope.

use super::block::{
    Block, CARD_SCHEMA, CARD_VERSION, Card, Container, Image, TextBlock, TextSize, TextWeight,
};

/// Normalize a block sequence into the card document's container envelope.
///
/// `unwrap` is the exact inverse: `unwrap(wrap(xs)) == xs` for any sequence.
pub fn wrap(blocks: Vec<Block>) -> Block {
    Block::Container(Container { items: blocks })
}

/// Expose the raw child sequence of a wrapped container.
///
/// A non-container block degrades to a single-element sequence rather than
/// an error; callers that require a genuine container check `is_container`
/// first and treat this case as a reported anomaly.
pub fn unwrap(block: Block) -> Vec<Block> {
    match block {
        Block::Container(container) => container.items,
        other => vec![other],
    }
}

pub fn create_text_block(text: impl Into<String>) -> Block {
    Block::TextBlock(TextBlock {
        text: text.into(),
        wrap: true,
        size: None,
        weight: None,
    })
}

/// Build a heading-styled text block for a heading level in `1..=6`.
///
/// Levels outside the range clamp to the nearest styled level.
pub fn create_heading_text_block(text: impl Into<String>, level: u8) -> Block {
    let size = match level {
        0 | 1 => TextSize::ExtraLarge,
        2 => TextSize::Large,
        3 | 4 => TextSize::Medium,
        5 => TextSize::Default,
        _ => TextSize::Small,
    };
    Block::TextBlock(TextBlock {
        text: text.into(),
        wrap: true,
        size: Some(size),
        weight: Some(TextWeight::Bolder),
    })
}

pub fn create_image(url: impl Into<String>, alt_text: impl Into<String>) -> Block {
    Block::Image(Image {
        url: url.into(),
        alt_text: alt_text.into(),
    })
}

/// Assemble the final card envelope around a top-level block sequence.
pub fn create_card(body: Vec<Block>) -> Card {
    Card {
        card_type: "AdaptiveCard",
        schema: CARD_SCHEMA,
        version: CARD_VERSION,
        body,
        actions: Vec::new(),
    }
}
