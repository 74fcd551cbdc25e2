//! HTML to card conversion pipeline.
//!
//! The pipeline has three stages:
//!
//! 1. **Parse**: `html5ever` builds an `RcDom` from the input.
//! 2. **Collapse**: a whitespace pre-pass normalizes the DOM in place so
//!    source indentation never surfaces as phantom blocks.
//! 3. **Walk**: the rule table converts the tree bottom-up into the flat
//!    card block sequence.
//!
//! The walk itself is total: malformed subtrees degrade to best-effort
//! output plus a recorded [`Diagnostic`], never an error. The only fallible
//! step is reading the input HTML.
//!
//! # Usage
//!
//! ```rust
//! let html = "<h2>Title</h2><p>Some <em>emphasized</em> prose.</p>";
//! let conversion = cardconv::convert_html_sync(html, &cardconv::Options::default())?;
//! let json = conversion.card.to_json()?;
//! assert!(json.contains("AdaptiveCard"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod diagnostics;
pub mod options;

mod dom_walker;
mod node_util;
mod rule;
mod whitespace;

use std::sync::Arc;

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::RcDom;

use crate::card::Card;
use crate::card::helper::create_card;

pub use diagnostics::Diagnostic;
pub use options::{LinkStyle, Options};

use diagnostics::Diagnostics;
use rule::{RuleContext, Rules};

/// Conversion failure at the input boundary.
///
/// Rule-level anomalies never surface here; they are absorbed into
/// [`Conversion::diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read html input: {0}")]
    Parse(#[from] std::io::Error),
}

/// A finished card plus everything the rules could not honor verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub card: Card,
    pub diagnostics: Vec<Diagnostic>,
}

/// HTML to card converter with configurable options.
#[derive(Debug, Clone, Default)]
pub struct CardConverter {
    options: Options,
}

impl CardConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.options.link_style = link_style;
        self
    }

    #[must_use]
    pub fn with_em_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.em_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_strong_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.strong_delimiter = delimiter.into();
        self
    }

    /// Convert HTML to a card synchronously.
    pub fn convert_sync(&self, html: &str) -> Result<Conversion, ConvertError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        whitespace::collapse_whitespace(&dom.document);

        let rules = Rules::new();
        let mut diagnostics = Diagnostics::default();
        let body = {
            let mut ctx = RuleContext {
                options: &self.options,
                diagnostics: &mut diagnostics,
            };
            dom_walker::walk(&dom.document, &rules, &mut ctx)
        };

        Ok(Conversion {
            card: create_card(body),
            diagnostics: diagnostics.into_entries(),
        })
    }

    /// Convert HTML to a card on a blocking thread.
    ///
    /// The conversion is CPU-bound and never suspends; this wrapper exists
    /// so async callers do not stall their runtime on large documents.
    pub async fn convert(&self, html: &str) -> anyhow::Result<Conversion> {
        let html: Arc<str> = Arc::from(html);
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || {
            let converter = CardConverter { options };
            converter.convert_sync(&html).map_err(anyhow::Error::from)
        })
        .await
        .map_err(|e| anyhow::anyhow!("CardConverter task panicked: {e}"))?
    }
}

/// Convert HTML with the given options, synchronously.
pub fn convert_html_sync(html: &str, options: &Options) -> Result<Conversion, ConvertError> {
    CardConverter::new()
        .with_options(options.clone())
        .convert_sync(html)
}

/// Convert HTML with the given options on a blocking thread.
pub async fn convert_html(html: &str, options: &Options) -> anyhow::Result<Conversion> {
    CardConverter::new()
        .with_options(options.clone())
        .convert(html)
        .await
}
