//! Element tree: named nodes with optional text and ordered children.

use std::fmt;

use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::builder::ElementBuilder;

/// Spaces per nesting level in rendered markup.
pub const INDENT_WIDTH: usize = 2;

/// A named node carrying optional text and an ordered list of child elements.
///
/// Children are owned exclusively, so an element is always the root of a
/// proper tree. Children are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Element with the given name and empty text.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Start a builder whose root element is `name` with empty text.
    pub fn builder(name: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends `child` and returns it, so further levels can be nested under it.
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Renders the tree as indented markup, two spaces per level.
    ///
    /// Names and text are emitted verbatim; nothing is escaped. Every line,
    /// including the last closing tag, ends with `\n`.
    #[instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn render(&self) -> String {
        self.render_with_indent(INDENT_WIDTH)
    }

    /// Same layout as [`Element::render`] with a custom indent unit.
    pub fn render_with_indent(&self, width: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0, width);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize, width: usize) {
        let indent = " ".repeat(width * depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        out.push_str(">\n");

        // whitespace-only text is suppressed like empty text
        if !self.text.trim().is_empty() {
            out.push_str(&" ".repeat(width * (depth + 1)));
            out.push_str(&self.text);
            out.push('\n');
        }

        for child in &self.children {
            child.render_into(out, depth + 1, width);
        }

        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }

    /// Number of levels in the tree; a lone element has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    /// Names of all childless elements, in pre-order.
    pub fn leaf_names(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        if self.children.is_empty() {
            leaves.push(self.name.clone());
        } else {
            for child in &self.children {
                child.collect_leaves(leaves);
            }
        }
    }

    /// Box-drawing view of the tree, labelled `name` or `name: text`.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree(&self) -> Tree<String> {
        let label = if self.text.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.text)
        };

        let leaves: Vec<_> = self.children.iter().map(Element::to_tree).collect();

        Tree::new(label).with_leaves(leaves)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_lone_element_when_render_then_two_lines() {
        let element = Element::named("div");
        assert_eq!(element.render(), "<div>\n</div>\n");
    }

    #[test]
    fn given_whitespace_text_when_render_then_text_line_suppressed() {
        let element = Element::new("p", " \t ");
        assert_eq!(element.render(), "<p>\n</p>\n");
    }

    #[test]
    fn given_markup_in_text_when_render_then_emitted_verbatim() {
        let element = Element::new("p", "a < b & c");
        assert_eq!(element.render(), "<p>\n  a < b & c\n</p>\n");
    }

    #[test]
    fn given_custom_indent_when_render_then_uses_width() {
        let mut element = Element::named("ul");
        element.add_child(Element::new("li", "x"));
        assert_eq!(
            element.render_with_indent(4),
            "<ul>\n    <li>\n        x\n    </li>\n</ul>\n"
        );
    }

    #[test]
    fn given_sibling_elements_when_adding_child_then_containers_independent() {
        let mut first = Element::named("a");
        let second = Element::named("b");
        first.add_child(Element::named("c"));
        assert_eq!(first.children().len(), 1);
        assert!(second.children().is_empty());
    }

    #[test]
    fn given_nested_tree_when_inspecting_then_depth_and_leaves_match() {
        let mut root = Element::named("html");
        let body = root.add_child(Element::named("body"));
        body.add_child(Element::new("h1", "title"));
        body.add_child(Element::new("p", "text"));
        root.add_child(Element::named("footer"));

        assert_eq!(root.depth(), 3);
        assert_eq!(root.leaf_names(), vec!["h1", "p", "footer"]);
    }

    #[test]
    fn given_element_when_to_tree_then_labels_include_text() {
        let mut root = Element::named("ul");
        root.add_child(Element::new("li", "hello"));

        let rendered = root.to_tree().to_string();
        assert!(rendered.starts_with("ul\n"));
        assert!(rendered.contains("li: hello"));
    }

    #[test]
    fn given_renamed_element_when_render_then_uses_new_name() {
        let mut element = Element::named("old");
        element.set_name("new");
        assert_eq!(element.to_string(), "<new>\n</new>\n");
    }
}
