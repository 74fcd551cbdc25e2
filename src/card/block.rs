use serde::Serialize;

/// Schema URL embedded in every produced card.
pub const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

/// Card format version the converter targets.
pub const CARD_VERSION: &str = "1.0";

/// A unit of the flat card document format.
///
/// The variant name doubles as the wire-level `type` tag, so serialization
/// produces `{"type": "TextBlock", ...}` and friends directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    TextBlock(TextBlock),
    Image(Image),
    Container(Container),
}

/// Block-kind tag, a pure function of the variant.
///
/// Classification never inspects a block's contents; an empty container is
/// still a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    TextBlock,
    Image,
    Container,
}

impl Block {
    pub fn card_type(&self) -> CardType {
        match self {
            Block::TextBlock(_) => CardType::TextBlock,
            Block::Image(_) => CardType::Image,
            Block::Container(_) => CardType::Container,
        }
    }
}

/// A run of text, optionally styled for headings.
///
/// `wrap` is always on: paragraph separators inside `text` only render as
/// line breaks when the host wraps the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    pub wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alt_text: String,
}

/// An ordered sequence of child blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub items: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Small,
    Default,
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWeight {
    Lighter,
    Default,
    Bolder,
}

/// The card envelope wrapping the converted top-level block sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub version: &'static str,
    pub body: Vec<Block>,
    pub actions: Vec<serde_json::Value>,
}

impl Card {
    /// Serialize the card to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize the card to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
