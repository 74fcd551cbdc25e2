use std::rc::Rc;

use markup5ever_rcdom::Node;

use super::{NESTED_LINE_MARKER, PARAGRAPH_SEPARATOR, RuleContext, RuleInput, RuleOutput};
use crate::card::Block;
use crate::card::helper::{create_text_block, wrap};

/// `li`: the most intricate merge. A list item may mix prose, images, and
/// nested lists, but the card format has no indented-paragraph or
/// nested-bullet primitive, so nesting is encoded as whitespace and marker
/// conventions inside one text block, while true independent blocks stay
/// card-native siblings.
///
/// Folding conventions, applied exactly once per item:
/// - consecutive text fragments are space-joined;
/// - paragraph separators inside an item become `"\n\n\t"` so continued
///   paragraphs indent under the item marker;
/// - each nested-list line is introduced by `"\r\t"`, and pre-existing
///   `"\r\t"` in nested text escapes to `"\r\t\t"` to keep three-deep
///   nesting unambiguous.
pub(super) fn list_item_rule(
    input: RuleInput,
    _node: &Rc<Node>,
    _ctx: &mut RuleContext<'_>,
) -> RuleOutput {
    let content = input.into_blocks();
    let mut curr_text = String::new();
    let mut blocks: Vec<Block> = Vec::new();

    for block in content {
        match block {
            Block::TextBlock(tb) => {
                curr_text.push(' ');
                curr_text.push_str(tb.text.replace(PARAGRAPH_SEPARATOR, "\n\n\t").trim());
            }
            Block::Container(container) => {
                // Typically a nested list: fold its text lines into this
                // item's text run; anything non-text bubbles up unchanged.
                for nested in container.items {
                    match nested {
                        Block::TextBlock(tb) => {
                            curr_text.push_str(NESTED_LINE_MARKER);
                            let folded = tb
                                .text
                                .replace(NESTED_LINE_MARKER, "\r\t\t")
                                .replace(PARAGRAPH_SEPARATOR, "\n\n\t");
                            curr_text.push_str(&folded);
                        }
                        other => blocks.push(other),
                    }
                }
            }
            Block::Image(_) => blocks.push(block),
        }
    }

    let trimmed = curr_text.trim();
    if !trimmed.is_empty() {
        blocks.insert(0, create_text_block(trimmed));
    }
    RuleOutput::Finished(vec![wrap(blocks)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::helper::{create_image, unwrap};
    use crate::converter::diagnostics::Diagnostics;
    use crate::converter::options::Options;

    fn run(content: Vec<Block>) -> Vec<Block> {
        let options = Options::default();
        let mut diagnostics = Diagnostics::default();
        let mut ctx = RuleContext {
            options: &options,
            diagnostics: &mut diagnostics,
        };
        // Node::new already hands back an Rc.
        let node = markup5ever_rcdom::Node::new(markup5ever_rcdom::NodeData::Document);
        match list_item_rule(RuleInput::Blocks(content), &node, &mut ctx) {
            RuleOutput::Finished(mut blocks) => unwrap(blocks.remove(0)),
            RuleOutput::Fragment(_) => panic!("list item must return finished blocks"),
        }
    }

    #[test]
    fn text_fragments_are_space_joined_and_trimmed() {
        let blocks = run(vec![create_text_block("one"), create_text_block("two ")]);
        assert_eq!(blocks, vec![create_text_block("one two")]);
    }

    #[test]
    fn paragraph_separators_indent_inside_the_item() {
        let blocks = run(vec![create_text_block("first\n\nsecond")]);
        assert_eq!(blocks, vec![create_text_block("first\n\n\tsecond")]);
    }

    #[test]
    fn nested_list_text_folds_with_the_nested_line_marker() {
        let nested = wrap(vec![create_text_block("- child")]);
        let blocks = run(vec![create_text_block("parent"), nested]);
        assert_eq!(blocks, vec![create_text_block("parent\r\t- child")]);
    }

    #[test]
    fn deep_nesting_escapes_existing_markers() {
        // A nested item that already folded one level in: its "\r\t" must
        // escape to "\r\t\t" when folded a second time.
        let nested = wrap(vec![create_text_block("- mid\r\t- leaf")]);
        let blocks = run(vec![create_text_block("top"), nested]);
        assert_eq!(
            blocks,
            vec![create_text_block("top\r\t- mid\r\t\t- leaf")]
        );
    }

    #[test]
    fn image_only_item_synthesizes_no_text_block() {
        let image = create_image("u", "alt");
        let blocks = run(vec![image.clone()]);
        assert_eq!(blocks, vec![image]);
    }

    #[test]
    fn non_text_nested_content_bubbles_up_after_the_text() {
        let image = create_image("u", "");
        let nested = wrap(vec![create_text_block("- child"), image.clone()]);
        let blocks = run(vec![create_text_block("parent"), nested]);
        assert_eq!(
            blocks,
            vec![create_text_block("parent\r\t- child"), image]
        );
    }
}
