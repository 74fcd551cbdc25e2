use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{RuleContext, RuleInput, RuleOutput};
use crate::card::helper::create_image;
use crate::converter::node_util::get_attr;

/// Images have no meaningful children; resolved content is ignored.
/// Missing `src`/`alt` degrade to empty strings, not errors.
pub(super) fn image_rule(
    _input: RuleInput,
    node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    let src = get_attr(node, "src").unwrap_or_default();
    let alt = get_attr(node, "alt").unwrap_or_default();
    RuleOutput::Finished(vec![create_image(src, alt)])
}
