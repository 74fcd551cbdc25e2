//! The rule table: how each class of HTML node becomes card blocks.
//!
//! A rule is a matcher plus a merge function. The table is plain data, an
//! ordered list of `(Matcher, handler)` pairs resolved by first match, not a
//! dispatch hierarchy. The walker resolves a node's children bottom-up, hands
//! the resolved content to the matching rule, and the rule decides how text
//! fragments and structural blocks recombine.

mod anchor;
mod emphasis;
mod headings;
mod img;
mod li;
mod list;
mod text;

use std::rc::Rc;

use markup5ever_rcdom::Node;

use crate::card::{Block, filter};

use super::diagnostics::Diagnostics;
use super::node_util::{get_node_tag_name, is_text_node};
use super::options::Options;

/// Two-character separator marking a paragraph break inside one text run.
pub(crate) const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Marker introducing a nested list line folded into a parent list item.
pub(crate) const NESTED_LINE_MARKER: &str = "\r\t";

/// The resolved content handed to a rule, always in one explicit shape.
///
/// The walker supplies the shape; rules pattern-match the variant they
/// expect and never see the loose string-or-array ambiguity of the DOM.
pub(crate) enum RuleInput {
    /// The node has no resolved children (leaf text, `br`, `img`).
    Empty,
    /// Resolved child blocks in document order.
    Blocks(Vec<Block>),
}

impl RuleInput {
    pub(crate) fn into_blocks(self) -> Vec<Block> {
        match self {
            RuleInput::Empty => Vec::new(),
            RuleInput::Blocks(blocks) => blocks,
        }
    }
}

/// What a rule hands back to the walker.
pub(crate) enum RuleOutput {
    /// A partial merge result, to be combined with sibling content by the
    /// parent node's rule.
    Fragment(MergeResult),
    /// Fully assembled blocks; no further text merging applies to them.
    Finished(Vec<Block>),
}

/// Intermediate text/non-text pair produced by combining a node's resolved
/// children.
///
/// `text` holds only inline-textual content; `non_text` holds resolved
/// blocks that could not be folded into the text run. Both fields must
/// survive every hand-off; a rule never silently drops either.
pub(crate) struct MergeResult {
    pub(crate) text: String,
    pub(crate) non_text: Vec<Block>,
}

/// Extract the textual portion of resolved content, transform it, and carry
/// the non-text blocks through untouched.
///
/// This is the single primitive behind every inline rule: it guarantees
/// formatting markers wrap only the text, while sibling images and
/// containers stay structurally intact and in their original relative
/// order. Absent input degrades to an empty string and empty sequence.
pub(crate) fn handle_text_effects(
    content: Vec<Block>,
    text_fn: impl FnOnce(String) -> String,
) -> MergeResult {
    let text = filter::get_text_blocks_as_string(&content);
    let non_text = filter::get_non_text_blocks(content);
    MergeResult {
        text: text_fn(text),
        non_text,
    }
}

/// Per-conversion state threaded through rule invocations.
pub(crate) struct RuleContext<'a> {
    pub(crate) options: &'a Options,
    pub(crate) diagnostics: &'a mut Diagnostics,
}

/// Selects the nodes a rule applies to.
pub(crate) enum Matcher {
    ByName(&'static [&'static str]),
    ByPredicate(fn(&Rc<Node>, &Options) -> bool),
}

impl Matcher {
    fn matches(&self, node: &Rc<Node>, options: &Options) -> bool {
        match self {
            Matcher::ByName(names) => {
                get_node_tag_name(node).is_some_and(|tag| names.contains(&tag))
            }
            Matcher::ByPredicate(predicate) => predicate(node, options),
        }
    }
}

pub(crate) trait RuleHandler {
    fn replace(&self, input: RuleInput, node: &Rc<Node>, ctx: &mut RuleContext<'_>) -> RuleOutput;
}

impl<F> RuleHandler for F
where
    F: Fn(RuleInput, &Rc<Node>, &mut RuleContext<'_>) -> RuleOutput,
{
    fn replace(&self, input: RuleInput, node: &Rc<Node>, ctx: &mut RuleContext<'_>) -> RuleOutput {
        self(input, node, ctx)
    }
}

struct Rule {
    matcher: Matcher,
    handler: Box<dyn RuleHandler>,
}

/// The ordered rule table. First match wins.
pub(crate) struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    pub(crate) fn new() -> Self {
        let mut rules = Self { rules: Vec::new() };

        rules.add(
            Matcher::ByPredicate(|node, _| is_text_node(node)),
            text::text_rule,
        );
        rules.add(Matcher::ByName(&["br"]), text::line_break_rule);
        rules.add(
            Matcher::ByName(&["h1", "h2", "h3", "h4", "h5", "h6"]),
            headings::heading_rule,
        );
        rules.add(Matcher::ByName(&["ul", "ol"]), list::list_rule);
        rules.add(Matcher::ByName(&["li"]), li::list_item_rule);
        rules.add(
            Matcher::ByPredicate(anchor::inline_link_matches),
            anchor::inline_link_rule,
        );
        rules.add(Matcher::ByName(&["em", "i"]), emphasis::emphasis_rule);
        rules.add(Matcher::ByName(&["strong", "b"]), emphasis::strong_rule);
        rules.add(Matcher::ByName(&["img"]), img::image_rule);

        rules
    }

    fn add<Handler>(&mut self, matcher: Matcher, handler: Handler)
    where
        Handler: RuleHandler + 'static,
    {
        self.rules.push(Rule {
            matcher,
            handler: Box::new(handler),
        });
    }

    pub(crate) fn resolve(&self, node: &Rc<Node>, options: &Options) -> Option<&dyn RuleHandler> {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(node, options))
            .map(|rule| rule.handler.as_ref())
    }
}
