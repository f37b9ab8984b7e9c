//! A small document tree.
//!
//! Just enough of a DOM for the renderers: elements with ordered attributes,
//! text nodes, lookup by id and HTML serialization.

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape(text, false)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn retain_children<F>(&mut self, f: F)
    where
        F: FnMut(&Node) -> bool,
    {
        self.children.retain(f);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of this element and everything below it.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(t) => out.push_str(t),
            }
        }
    }

    /// First element in document order (self included) matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child
                && let Some(found) = el.find_mut(pred)
            {
                return Some(found);
            }
        }
        None
    }

    /// Every element in document order (self included) matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(pred, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for el in self.child_elements() {
            el.collect_matching(pred, out);
        }
    }

    /// Apply `f` to every element in document order (self included).
    pub fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.for_each_mut(f);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value, true));
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        // Stylesheets are raw text.
        if self.tag == "style" {
            for child in &self.children {
                if let Node::Text(css) = child {
                    out.push_str(css);
                }
            }
        } else {
            for child in &self.children {
                child.write_html(out);
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// A page: a head and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub head: Element,
    pub body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            head: Element::new("head").with_child(Element::new("meta").with_attr("charset", "utf-8")),
            body: Element::new("body"),
        }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find(&|el| el.id() == Some(id))
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_mut(&|el| el.id() == Some(id))
    }

    /// Whether some `<label for="...">` targets `field`.
    pub fn has_label_for(&self, field: &str) -> bool {
        self.body
            .find(&|el| el.tag == "label" && el.attr("for") == Some(field))
            .is_some()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"es\">");
        self.head.write_html(&mut out);
        self.body.write_html(&mut out);
        out.push_str("</html>\n");
        out
    }
}

fn escape(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_elements() {
        let ul = Element::new("ul")
            .with_attr("id", "lista")
            .with_child(Element::new("li").with_text("uno"));
        assert_eq!(ul.to_html(), r#"<ul id="lista"><li>uno</li></ul>"#);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let el = Element::new("p")
            .with_attr("title", "a \"b\" & c")
            .with_text("<script>alert(1)</script>");
        assert_eq!(
            el.to_html(),
            r#"<p title="a &quot;b&quot; &amp; c">&lt;script&gt;alert(1)&lt;/script&gt;</p>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let input = Element::new("input").with_attr("name", "email");
        assert_eq!(input.to_html(), r#"<input name="email">"#);
    }

    #[test]
    fn test_lookup_by_id_finds_nested_elements() {
        let mut doc = Document::new();
        doc.body.push(
            Element::new("main").with_child(Element::new("ul").with_attr("id", "eventos-registrados")),
        );

        let ul = doc.get_element_by_id_mut("eventos-registrados").unwrap();
        ul.push(Element::new("li").with_text("Kickoff"));

        let ul = doc.get_element_by_id("eventos-registrados").unwrap();
        assert_eq!(ul.text_content(), "Kickoff");
        assert!(doc.get_element_by_id("tabla-eventos").is_none());
    }

    #[test]
    fn test_set_attr_replaces_existing_value() {
        let mut el = Element::new("input").with_attr("value", "a");
        el.set_attr("value", "b");
        assert_eq!(el.attr("value"), Some("b"));
        assert_eq!(el.to_html(), r#"<input value="b">"#);
    }
}
