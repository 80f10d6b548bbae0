//! Human-oriented views of a text tree.
//!
//! `render()` concatenates without separators; these views are for the
//! terminal only.

use termtree::Tree;

use crate::domain::{NodeKind, TextNode};

/// Text with paragraphs on separate lines and single spaces between
/// sentences and lexemes.
pub fn layout(node: &TextNode) -> String {
    let separator = match node.kind() {
        NodeKind::Document => "\n",
        NodeKind::Paragraph | NodeKind::Sentence => " ",
        NodeKind::Lexeme | NodeKind::Word | NodeKind::Sign | NodeKind::Letter => {
            return node.render()
        }
    };
    node.children()
        .map(|child| layout(child))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Conversion to a printable `termtree` structure.
pub trait TreeView {
    /// Tree of node labels; `max_depth` truncates below that level
    /// (the receiver is depth 0).
    fn to_tree(&self, max_depth: Option<usize>) -> Tree<String>;
}

impl TreeView for TextNode {
    fn to_tree(&self, max_depth: Option<usize>) -> Tree<String> {
        fn build(node: &TextNode, depth: usize, max_depth: Option<usize>) -> Tree<String> {
            let mut tree = Tree::new(label(node));
            if max_depth.map_or(true, |max| depth < max) {
                for child in node.children() {
                    tree.push(build(child, depth + 1, max_depth));
                }
            }
            tree
        }
        build(self, 0, max_depth)
    }
}

fn label(node: &TextNode) -> String {
    match node {
        TextNode::Leaf(leaf) => format!("{} {:?}", leaf.kind(), leaf.symbol()),
        TextNode::Composite { .. } => {
            format!("{} ({}) {:?}", node.kind(), node.child_count(), node.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::{DocumentParser, TextParser};

    #[test]
    fn given_document_when_laying_out_then_spaces_and_newlines_restored() {
        let document = DocumentParser::new().parse("Hi there. Bye!    Next, please.");

        assert_eq!(layout(&document), "Hi there. Bye!\nNext, please.");
    }

    #[test]
    fn given_depth_limit_when_building_tree_then_truncates() {
        let document = DocumentParser::new().parse("Hi there.");

        let shallow = document.to_tree(Some(1)).to_string();
        let full = document.to_tree(None).to_string();

        assert!(shallow.starts_with("document (1) \"Hithere.\""));
        assert!(!shallow.contains("sentence"));
        assert!(full.contains("letter 'H'"));
        assert!(full.contains("sign '.'"));
    }
}
