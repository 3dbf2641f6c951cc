//! Typed view trees.
//!
//! Builders return [`Node`] values instead of markup strings. Text and
//! attribute values are escaped when rendered, and interactive elements
//! carry a typed [`Action`] instead of an inline handler.

pub mod action;

pub use action::{Action, ModalKind};

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
    action: Option<Action>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every element in document order (this node included) matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(e) = self {
            if pred(e) {
                found.push(e);
            }
            for child in &e.children {
                child.walk(pred, found);
            }
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|e| e.tag == tag)
    }

    /// Actions of every interactive element in document order.
    pub fn actions(&self) -> Vec<&Action> {
        self.find_all(&|e| e.action.is_some())
            .into_iter()
            .filter_map(|e| e.action.as_ref())
            .collect()
    }

    /// Serialize to HTML with escaped text and attribute values.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(t) => escape_into(t, false, out),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for (name, value) in &e.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                if let Some(action) = &e.action {
                    out.push_str(" data-action=\"");
                    out.push_str(action.name());
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&e.tag) {
                    return;
                }
                for child in &e.children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(e.tag);
                out.push('>');
            }
        }
    }
}

/// Render a sequence of sibling nodes.
pub fn render_all(nodes: &[Node]) -> String {
    nodes.iter().map(Node::render).collect()
}

fn escape_into(raw: &str, attribute: bool, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\'' if attribute => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node: Node = Element::new("div")
            .class("card")
            .child(Element::new("h3").text("Dr. Who"))
            .into();
        assert_eq!(node.render(), r#"<div class="card"><h3>Dr. Who</h3></div>"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node: Node = Element::new("p")
            .attr("title", r#"a "quoted" <value>"#)
            .text("<script>alert('x')</script> & more")
            .into();
        assert_eq!(
            node.render(),
            "<p title=\"a &quot;quoted&quot; &lt;value&gt;\">&lt;script&gt;alert('x')&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = Element::new("img").attr("src", "logo.png").into();
        assert_eq!(node.render(), r#"<img src="logo.png">"#);
    }

    #[test]
    fn action_renders_as_data_attribute() {
        let node: Node = Element::new("button").on_click(Action::Logout).text("Logout").into();
        assert_eq!(node.render(), r#"<button data-action="logout">Logout</button>"#);
    }

    #[test]
    fn attr_replaces_previous_value() {
        let element = Element::new("div").class("a").class("b");
        assert_eq!(element.get_attr("class"), Some("b"));
    }

    #[test]
    fn queries_walk_in_document_order() {
        let node: Node = Element::new("ul")
            .child(Element::new("li").class("item").text("one"))
            .child(
                Element::new("li")
                    .class("item special")
                    .child(Element::new("button").on_click(Action::PromptPatientLogin)),
            )
            .into();

        assert_eq!(node.find_by_class("item").len(), 2);
        assert_eq!(node.find_by_class("special").len(), 1);
        assert_eq!(node.find_by_tag("li").len(), 2);
        assert_eq!(node.actions(), vec![&Action::PromptPatientLogin]);
        assert_eq!(node.text_content(), "one");
    }
}
