//! Syntax tree handed from the front end to the reader.
//!
//! The tree is deliberately loose: every node carries a `|`-joined tag
//! naming the grammar rules it matched (`expr|number`, `expr|s_exp|>`, ...),
//! the literal text for leaves, and its children in source order. The
//! reader only looks at tags and contents, so a tree produced by any other
//! tool with the same tagging works just as well.

use serde::{Deserialize, Serialize};

pub mod parser;

pub use parser::{parse, MAX_NESTING_DEPTH};

/// Tag of the root node.
pub const ROOT_TAG: &str = ">";
/// Tag of punctuation leaves such as `(` and `}`.
pub const CHAR_TAG: &str = "char";
/// Tag of zero-width input anchors.
pub const REGEX_TAG: &str = "regex";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub tag: String,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// Children that are expressions rather than punctuation or anchors.
    pub fn expressions(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| !c.is_structural())
    }

    /// True for punctuation and anchor nodes carrying no expression.
    pub fn is_structural(&self) -> bool {
        matches!(self.contents.as_str(), "(" | ")" | "{" | "}") || self.tag == REGEX_TAG
    }

    /// Pretty-prints the tree, one node per line, indented by depth.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.tag);
        if !self.contents.is_empty() {
            out.push_str(": '");
            out.push_str(&self.contents);
            out.push('\'');
        }
        out.push('\n');
        for child in &self.children {
            child.pretty_into(out, depth + 1);
        }
    }
}
