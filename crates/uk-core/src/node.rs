//! Host-agnostic render tree.
//!
//! Components are pure functions from a config record to an [`Element`]. A
//! host (the Leptos binding, the dev server gallery, tests) walks the tree;
//! nothing in it is retained between renders.

use std::borrow::Cow;
use std::fmt::{self, Display, Write as _};
use std::rc::Rc;

/// Named region inside a component's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Header,
    Body,
    Footer,
}

impl RegionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Header => "header",
            RegionKind::Body => "body",
            RegionKind::Footer => "footer",
        }
    }
}

/// Whether an optional region is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region<T> {
    Present(T),
    Absent,
}

impl<T> Region<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Region::Present(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Region::Present(v) => Some(v),
            Region::Absent => None,
        }
    }
}

/// Content that may be present yet carry nothing worth a region.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<C> Blank for Vec<Node<C>> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Synchronous activation callback, invoked by the host on user activation.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<F: Fn() + 'static> From<F> for Handler {
    fn from(f: F) -> Self {
        Handler::new(f)
    }
}

#[derive(Debug, Clone)]
pub enum Node<C = String> {
    Element(Element<C>),
    Content(C),
}

impl<C> Node<C> {
    pub fn as_element(&self) -> Option<&Element<C>> {
        match self {
            Node::Element(el) => Some(el),
            Node::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&C> {
        match self {
            Node::Content(c) => Some(c),
            Node::Element(_) => None,
        }
    }
}

impl<C> From<Element<C>> for Node<C> {
    fn from(el: Element<C>) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone)]
pub struct Element<C = String> {
    pub tag: &'static str,
    pub class: String,
    /// Stable identity key for list reconciliation.
    pub key: Option<usize>,
    pub region: Option<RegionKind>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node<C>>,
    on_activate: Option<Handler>,
}

impl<C> Element<C> {
    pub fn new(tag: &'static str, class: impl Into<String>) -> Self {
        Self {
            tag,
            class: class.into(),
            key: None,
            region: None,
            attrs: Vec::new(),
            children: Vec::new(),
            on_activate: None,
        }
    }

    pub fn with_key(mut self, key: usize) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_region(mut self, region: RegionKind) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node<C>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node<C>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.on_activate = Some(handler);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_activatable(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Deliver a user-activation event. Returns `true` if a handler ran.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }

    /// Child elements, skipping bare content.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element<C>> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Regions of the direct children, in render order.
    pub fn regions(&self) -> Vec<RegionKind> {
        self.child_elements().filter_map(|el| el.region).collect()
    }

    pub fn find_region(&self, kind: RegionKind) -> Option<&Element<C>> {
        self.child_elements().find(|el| el.region == Some(kind))
    }

    /// Identity keys of the direct children, in render order.
    pub fn keys(&self) -> Vec<usize> {
        self.child_elements().filter_map(|el| el.key).collect()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class.split_whitespace().any(|t| t == token)
    }
}

impl<C: Display> Element<C> {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.class.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class));
        }
        if let Some(key) = self.key {
            let _ = write!(out, " data-key=\"{key}\"");
        }
        if let Some(region) = self.region {
            let _ = write!(out, " data-region=\"{}\"", region.as_str());
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl<C: Display> Node<C> {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Content(c) => out.push_str(&escape(&c.to_string())),
        }
    }
}

fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
