use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{RuleContext, RuleInput, RuleOutput, handle_text_effects};

fn delimit(input: RuleInput, delimiter: &str) -> RuleOutput {
    let delimiter = delimiter.to_string();
    RuleOutput::Fragment(handle_text_effects(input.into_blocks(), move |text| {
        format!("{delimiter}{text}{delimiter}")
    }))
}

pub(super) fn emphasis_rule(
    input: RuleInput,
    _node: &Rc<Node>,
    ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    delimit(input, &ctx.options.em_delimiter)
}

pub(super) fn strong_rule(
    input: RuleInput,
    _node: &Rc<Node>,
    ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    delimit(input, &ctx.options.strong_delimiter)
}
