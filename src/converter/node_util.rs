use std::rc::Rc;

use markup5ever_rcdom::{Node, NodeData};

pub(crate) fn get_node_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Document => Some("html"),
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

pub(crate) fn is_text_node(node: &Rc<Node>) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// Literal character data of a text node, post whitespace collapse.
pub(crate) fn text_value(node: &Rc<Node>) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// Attribute lookup, filtering values that are empty after trimming.
///
/// Filtering makes "attribute present but blank" indistinguishable from
/// "attribute absent", which is the contract every rule wants: a blank
/// `href` does not gate the inline link rule on, and a blank `start` falls
/// back to the default index.
pub(crate) fn get_attr(node: &Rc<Node>, name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| attr.value.to_string())
        .filter(|value| !value.trim().is_empty())
}
