//! Bottom-up DOM traversal and rule dispatch.
//!
//! The walker resolves every child of a node before the node itself, merges
//! adjacent text fragments, and hands the matching rule its content in the
//! declared [`RuleInput`] shape. Elements with no matching rule merge their
//! children through the text-effect combinator; block-level ones additionally
//! terminate the merged text with a paragraph separator so sibling paragraphs
//! stay distinct. At the document root the accumulated text run is split back
//! into one text block per paragraph.

use std::rc::Rc;

use markup5ever_rcdom::{Node, NodeData};
use phf::phf_set;

use crate::card::Block;
use crate::card::helper::create_text_block;

use super::rule::{
    MergeResult, PARAGRAPH_SEPARATOR, RuleContext, RuleInput, RuleOutput, Rules,
    handle_text_effects,
};

/// Elements whose entire subtree contributes nothing to a card.
const DISCARDED_ELEMENTS: &[&str] = &["head", "script", "style", "template", "noscript"];

/// Walk a parsed document and return the finished top-level block sequence.
pub(crate) fn walk(root: &Rc<Node>, rules: &Rules, ctx: &mut RuleContext<'_>) -> Vec<Block> {
    let blocks = match resolve_node(root, rules, ctx) {
        Some(RuleOutput::Finished(blocks)) => blocks,
        Some(RuleOutput::Fragment(fragment)) => materialize(fragment),
        None => Vec::new(),
    };
    assemble_root(blocks)
}

fn resolve_node(
    node: &Rc<Node>,
    rules: &Rules,
    ctx: &mut RuleContext<'_>,
) -> Option<RuleOutput> {
    match &node.data {
        NodeData::Document => Some(RuleOutput::Finished(resolve_children(node, rules, ctx))),

        NodeData::Text { .. } => {
            let input = gather_input(node, rules, ctx);
            let handler = rules.resolve(node, ctx.options)?;
            Some(handler.replace(input, node, ctx))
        }

        NodeData::Element { name, .. } => {
            let tag = &*name.local;
            if DISCARDED_ELEMENTS.contains(&tag) {
                return None;
            }
            // Structural envelope: the document body is accumulated, never
            // merged into a single text run.
            if tag == "html" || tag == "body" {
                return Some(RuleOutput::Finished(resolve_children(node, rules, ctx)));
            }
            let input = gather_input(node, rules, ctx);
            match rules.resolve(node, ctx.options) {
                Some(handler) => Some(handler.replace(input, node, ctx)),
                None => Some(default_replacement(tag, input)),
            }
        }

        // Comments, doctypes, processing instructions.
        _ => None,
    }
}

/// Supply the rule input shape the registry contract promises: `Empty` for
/// childless nodes, resolved blocks otherwise.
fn gather_input(node: &Rc<Node>, rules: &Rules, ctx: &mut RuleContext<'_>) -> RuleInput {
    if node.children.borrow().is_empty() {
        RuleInput::Empty
    } else {
        RuleInput::Blocks(resolve_children(node, rules, ctx))
    }
}

fn resolve_children(node: &Rc<Node>, rules: &Rules, ctx: &mut RuleContext<'_>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = MergeResult {
        text: String::new(),
        non_text: Vec::new(),
    };

    for child in node.children.borrow().iter() {
        match resolve_node(child, rules, ctx) {
            Some(RuleOutput::Fragment(fragment)) => {
                // Adjacent fragments merge into one text run; their non-text
                // blocks queue up behind it.
                pending.text.push_str(&fragment.text);
                pending.non_text.extend(fragment.non_text);
            }
            Some(RuleOutput::Finished(finished)) => {
                flush_pending(&mut pending, &mut blocks);
                blocks.extend(finished);
            }
            None => {}
        }
    }
    flush_pending(&mut pending, &mut blocks);
    blocks
}

fn flush_pending(pending: &mut MergeResult, blocks: &mut Vec<Block>) {
    if !pending.text.is_empty() {
        blocks.push(create_text_block(std::mem::take(&mut pending.text)));
    }
    blocks.append(&mut pending.non_text);
}

fn materialize(mut fragment: MergeResult) -> Vec<Block> {
    let mut blocks = Vec::new();
    flush_pending(&mut fragment, &mut blocks);
    blocks
}

/// Handling for elements with no rule of their own: merge the children, and
/// for block-level elements terminate the text run with a paragraph
/// separator.
fn default_replacement(tag: &str, input: RuleInput) -> RuleOutput {
    let mut merged = handle_text_effects(input.into_blocks(), |text| text);
    if is_block_element(tag) {
        let trimmed = merged.text.trim();
        merged.text = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}{PARAGRAPH_SEPARATOR}")
        };
    }
    RuleOutput::Fragment(merged)
}

/// Split the accumulated top-level text run into one trimmed text block per
/// paragraph; finished blocks pass through unchanged.
fn assemble_root(blocks: Vec<Block>) -> Vec<Block> {
    let mut body = Vec::new();
    for block in blocks {
        match block {
            Block::TextBlock(tb) => {
                for paragraph in tb.text.split(PARAGRAPH_SEPARATOR) {
                    let paragraph = paragraph.trim();
                    if !paragraph.is_empty() {
                        body.push(create_text_block(paragraph));
                    }
                }
            }
            other => body.push(other),
        }
    }
    body
}

// This is taken from the [CommonMark
// spec](https://spec.commonmark.org/0.31.2/#html-blocks).
static BLOCK_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "pre",
    "script",
    "search",
    "section",
    "style",
    "summary",
    "table",
    "tbody",
    "td",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
};

pub(crate) fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(tag)
}
