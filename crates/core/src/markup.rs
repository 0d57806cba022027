//! HTML/SVG serialization of layer descriptions.
//!
//! [`Element`] is a tiny tree builder; attribute values and text are escaped,
//! tag and attribute names are trusted (they are all literals in this crate).

/// A rendered decoration that can be pasted into a page.
///
/// This trait is object-safe so the CLI and WASM front ends can hold
/// `Box<dyn Decoration>` regardless of which generator produced it.
pub trait Decoration {
    /// Short name of the generator ("blob", "grid").
    fn kind(&self) -> &'static str;

    /// The element tree for this decoration.
    fn to_element(&self) -> Element;

    /// Serialized markup.
    fn to_html(&self) -> String {
        self.to_element().render()
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute. Empty values are kept (`class=""` is valid).
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of the first attribute called `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serializes the tree. Every element gets an explicit closing tag.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
