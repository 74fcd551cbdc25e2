use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{RuleContext, RuleInput, RuleOutput};
use crate::card::filter::{get_non_text_blocks, get_text_blocks_as_string};
use crate::card::helper::{create_heading_text_block, wrap};
use crate::converter::node_util::get_node_tag_name;

/// `h1`–`h6`: one heading-styled text block followed by the non-text child
/// blocks, in original order.
///
/// Non-text content never nests inside the heading block itself: an image
/// inside a heading becomes its sibling in the wrapped result.
pub(super) fn heading_rule(
    input: RuleInput,
    node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    // Level is the digit after the 'h', e.g. "h2" -> 2.
    let level = get_node_tag_name(node)
        .and_then(|tag| tag.chars().nth(1))
        .and_then(|c| c.to_digit(10))
        .unwrap_or(1) as u8;

    let content = input.into_blocks();
    let text = get_text_blocks_as_string(&content);
    let non_text = get_non_text_blocks(content);

    let mut blocks = vec![create_heading_text_block(text.trim(), level)];
    blocks.extend(non_text);
    RuleOutput::Finished(vec![wrap(blocks)])
}
