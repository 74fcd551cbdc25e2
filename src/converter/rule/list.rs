use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{RuleContext, RuleInput, RuleOutput};
use crate::card::Block;
use crate::card::filter::is_container;
use crate::card::helper::{unwrap, wrap};
use crate::converter::node_util::{get_attr, get_node_tag_name};

/// `ul`/`ol`: content is one wrapped container per `<li>` child. Each item
/// is unwrapped, its first block gets the list marker prepended when that
/// block is a text block, and the per-item sequences are flattened into one
/// wrapped container.
///
/// An item whose first block is not a text block (an image, a nested list)
/// simply gets no marker.
pub(super) fn list_rule(
    input: RuleInput,
    node: &Rc<Node>,
    ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    let is_ordered = get_node_tag_name(node) == Some("ol");
    // Non-numeric, missing, or zero `start` falls back to 1, never an error.
    let start = get_attr(node, "start")
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|&start| start != 0)
        .unwrap_or(1);

    let items = input.into_blocks();
    let mut blocks: Vec<Block> = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if !is_container(&item) {
            // Loose content between list items (malformed source markup).
            // Treat the block itself as the item rather than losing it.
            ctx.diagnostics.report(format!(
                "list item expected a wrapped container, got {:?}",
                item.card_type()
            ));
        }
        let mut item_blocks = unwrap(item);
        if let Some(Block::TextBlock(first)) = item_blocks.first_mut() {
            let prefix = if is_ordered {
                format!("{}. ", start + index as i64)
            } else {
                "- ".to_string()
            };
            first.text.insert_str(0, &prefix);
        }
        blocks.extend(item_blocks);
    }
    RuleOutput::Finished(vec![wrap(blocks)])
}
