//! The flat card block model and its schema helpers.
//!
//! Unlike HTML, the card format has very limited block-within-block nesting:
//! a card body is a sequence of text blocks, images, and containers, and a
//! container holds another flat sequence. Everything deeper than that must be
//! flattened into annotated text runs by the conversion rules.

pub mod block;
pub mod filter;
pub mod helper;

pub use block::{Block, Card, CardType, Container, Image, TextBlock, TextSize, TextWeight};
pub use filter::{
    get_non_text_blocks, get_text_blocks_as_string, is_container, is_image, is_text_block,
};
pub use helper::{
    create_card, create_heading_text_block, create_image, create_text_block, unwrap, wrap,
};
