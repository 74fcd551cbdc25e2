//! Convert HTML documents into Adaptive Card JSON.
//!
//! The card format is flat: a body of text blocks, images, and containers,
//! with none of HTML's arbitrary nesting. This crate parses HTML with
//! `html5ever` and flattens it through a table of per-element merge rules:
//! inline formatting becomes delimiter-annotated text runs, headings become
//! styled text blocks, and nested lists fold into marker conventions inside
//! a single text block.
//!
//! # Usage
//!
//! ```rust
//! use cardconv::{CardConverter, LinkStyle};
//!
//! let html = r#"<ul><li>First <a href="http://example.com">link</a></li><li>Second</li></ul>"#;
//! let conversion = CardConverter::new()
//!     .with_link_style(LinkStyle::Inlined)
//!     .convert_sync(html)?;
//!
//! assert!(conversion.diagnostics.is_empty());
//! let json = conversion.card.to_json()?;
//! assert!(json.contains("- First")); // unordered items get dash markers
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod card;
pub mod converter;

pub use card::{Block, Card, CardType, Container, Image, TextBlock, TextSize, TextWeight};
pub use converter::{
    CardConverter, Conversion, ConvertError, Diagnostic, LinkStyle, Options, convert_html,
    convert_html_sync,
};
