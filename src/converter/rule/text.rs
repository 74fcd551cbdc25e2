use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{
    PARAGRAPH_SEPARATOR, RuleContext, RuleInput, RuleOutput, handle_text_effects,
};
use crate::converter::node_util::text_value;

/// Leaf text nodes: the text is the node's literal character data.
///
/// A leaf has no children, but the content still goes through the combinator
/// so the returned shape stays uniform with every other inline rule.
pub(super) fn text_rule(
    input: RuleInput,
    node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    let value = text_value(node).unwrap_or_default();
    RuleOutput::Fragment(handle_text_effects(input.into_blocks(), move |_| value))
}

/// `br` contributes a paragraph separator, whatever its own content was.
pub(super) fn line_break_rule(
    input: RuleInput,
    _node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    RuleOutput::Fragment(handle_text_effects(input.into_blocks(), |_| {
        PARAGRAPH_SEPARATOR.to_string()
    }))
}
