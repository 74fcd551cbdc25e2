//! Document-order whitespace collapse, run over the DOM before any rule.
//!
//! HTML source indentation is noise to the card model: without this pass,
//! the newline-and-spaces text nodes between `<li>` elements would surface
//! as phantom text blocks inside list containers. The pass rewrites text
//! nodes in place (runs of whitespace become a single space, spaces that
//! duplicate a neighbor's or sit at a block boundary are trimmed) and drops
//! text nodes that end up empty.

use std::borrow::Cow;
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use markup5ever_rcdom::{Node, NodeData};

use super::dom_walker::is_block_element;
use super::node_util::get_node_tag_name;

pub(crate) fn collapse_whitespace(root: &Rc<Node>) {
    // Document start behaves like a block boundary: leading whitespace in
    // the very first text run has nothing to separate.
    let mut prev_ends_with_space = true;
    collapse_node(root, false, &mut prev_ends_with_space);
}

fn collapse_node(node: &Rc<Node>, in_pre: bool, prev_ends_with_space: &mut bool) {
    let tag = get_node_tag_name(node);
    let in_pre = in_pre || tag.is_some_and(|t| t == "pre" || t == "code" || t == "textarea");
    let is_block = tag.is_some_and(is_block_element);

    if is_block {
        *prev_ends_with_space = true;
    }

    let mut children = node.children.borrow_mut();
    let mut kept = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match &child.data {
            NodeData::Text { contents } => {
                if in_pre {
                    *prev_ends_with_space = false;
                    kept.push(child);
                    continue;
                }
                let collapsed = {
                    let text = contents.borrow();
                    let collapsed = compress_whitespace(&text);
                    if *prev_ends_with_space {
                        collapsed.trim_start_matches(' ').to_string()
                    } else {
                        collapsed.into_owned()
                    }
                };
                if collapsed.is_empty() {
                    // Whitespace-only between blocks: remove the node.
                    continue;
                }
                *prev_ends_with_space = collapsed.ends_with(' ');
                *contents.borrow_mut() = StrTendril::from_slice(&collapsed);
                kept.push(child);
            }
            NodeData::Element { .. } => {
                collapse_node(&child, in_pre, prev_ends_with_space);
                kept.push(child);
            }
            _ => kept.push(child),
        }
    }
    *children = kept;

    if is_block {
        *prev_ends_with_space = true;
    }
}

/// Collapse runs of ASCII whitespace to a single space.
///
/// Borrows when the text is already collapsed; allocates only on change.
fn compress_whitespace(text: &str) -> Cow<'_, str> {
    let mut needs_work = false;
    let mut prev_space = false;
    for b in text.bytes() {
        let is_space = b.is_ascii_whitespace();
        if is_space && (prev_space || b != b' ') {
            needs_work = true;
            break;
        }
        prev_space = is_space;
    }
    if !needs_work {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(out)
}
