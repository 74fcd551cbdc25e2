use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{RuleContext, RuleInput, RuleOutput, handle_text_effects};
use crate::converter::node_util::{get_attr, get_node_tag_name};
use crate::converter::options::{LinkStyle, Options};

/// Anchors are only claimed by this rule when links are configured inline
/// and a non-empty `href` exists; otherwise the default handling applies
/// and the anchor contributes only its text.
pub(super) fn inline_link_matches(node: &Rc<Node>, options: &Options) -> bool {
    options.link_style == LinkStyle::Inlined
        && get_node_tag_name(node) == Some("a")
        && get_attr(node, "href").is_some()
}

pub(super) fn inline_link_rule(
    input: RuleInput,
    node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    let href = get_attr(node, "href").unwrap_or_default();
    RuleOutput::Fragment(handle_text_effects(input.into_blocks(), move |text| {
        format!("[{text}]({href})")
    }))
}
