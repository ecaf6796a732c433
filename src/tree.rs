//! Mutable HTML document tree
//!
//! A thin layer over `kuchiki` exposing what the collector and the mutator
//! need: selector queries, sibling navigation, identity sets of nodes,
//! detaching, insertion and body serialization.

use kuchiki::traits::TendrilSink;
use kuchiki::Node;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub use kuchiki::NodeRef;

/// Elements that are empty by nature and survive the cleanup pass
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const DISCLOSURE_TEMPLATE: &str =
    r#"<details class="quoted-content"><summary></summary></details>"#;

/// A parsed HTML document
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse `html` permissively; malformed markup is repaired, never rejected
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// Elements matching `selector`, or `None` if the selector does not compile
    #[must_use]
    pub fn select(&self, selector: &str) -> Option<Vec<NodeRef>> {
        self.root
            .select(selector)
            .ok()
            .map(|matches| matches.map(|m| m.as_node().clone()).collect())
    }

    /// The `<body>` element, or the document node for body-less trees
    #[must_use]
    pub fn body(&self) -> NodeRef {
        self.root
            .select_first("body")
            .map_or_else(|()| self.root.clone(), |body| body.as_node().clone())
    }

    /// Snapshot of every element below `<body>`, in document order
    #[must_use]
    pub fn body_elements(&self) -> Vec<NodeRef> {
        self.body()
            .descendants()
            .filter(|node| node.as_element().is_some())
            .collect()
    }

    /// Serialize the children of `<body>`
    #[must_use]
    pub fn serialize_body(&self) -> String {
        self.body().children().map(|child| child.to_string()).collect()
    }

    fn document_order(&self) -> HashMap<*const Node, usize> {
        self.root
            .inclusive_descendants()
            .enumerate()
            .map(|(index, node)| (key(&node), index))
            .collect()
    }
}

/// Build a detached `<details>` container whose summary reads `label`
#[must_use]
pub fn disclosure(label: &str) -> NodeRef {
    let template = kuchiki::parse_html().one(DISCLOSURE_TEMPLATE);
    let details = template
        .select_first("details")
        .expect("disclosure template has a details element")
        .as_node()
        .clone();
    details.detach();
    if let Ok(summary) = details.select_first("summary") {
        summary.as_node().append(NodeRef::new_text(label));
    }
    details
}

fn key(node: &NodeRef) -> *const Node {
    Rc::as_ptr(&node.0)
}

/// Local tag name of an element node
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.as_element()
        .map(|element| element.name.local.to_ascii_lowercase().to_string())
}

/// Value of attribute `name` on an element node
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|element| element.attributes.borrow().get(name).map(str::to_string))
}

/// Whether the `class` attribute of `node` lists `class`
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attr(node, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

#[must_use]
pub fn is_void(node: &NodeRef) -> bool {
    tag_name(node).is_some_and(|tag| VOID_ELEMENTS.contains(&tag.as_str()))
}

#[must_use]
pub fn has_element_child(node: &NodeRef) -> bool {
    node.children().any(|child| child.as_element().is_some())
}

/// Whether `node` is a `<blockquote type="cite">`
#[must_use]
pub fn is_cite_blockquote(node: &NodeRef) -> bool {
    tag_name(node).as_deref() == Some("blockquote")
        && attr(node, "type").is_some_and(|t| t.eq_ignore_ascii_case("cite"))
}

#[must_use]
pub fn next_element_sibling(node: &NodeRef) -> Option<NodeRef> {
    node.following_siblings()
        .find(|sibling| sibling.as_element().is_some())
}

#[must_use]
pub fn previous_element_sibling(node: &NodeRef) -> Option<NodeRef> {
    node.preceding_siblings()
        .find(|sibling| sibling.as_element().is_some())
}

/// `node` followed by all of its following element siblings
#[must_use]
pub fn with_following_elements(node: &NodeRef) -> Vec<NodeRef> {
    std::iter::once(node.clone())
        .chain(
            node.following_siblings()
                .filter(|sibling| sibling.as_element().is_some()),
        )
        .collect()
}

#[must_use]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Rc::ptr_eq(&a.0, &b.0)
}

/// An identity-keyed set of nodes that remembers insertion order
#[derive(Default)]
pub struct NodeSet {
    nodes: Vec<NodeRef>,
    keys: HashSet<*const Node>,
}

impl NodeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`; returns false if it was already present
    pub fn insert(&mut self, node: NodeRef) -> bool {
        if self.keys.insert(key(&node)) {
            self.nodes.push(node);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, node: &NodeRef) -> bool {
        self.keys.contains(&key(node))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeRef> {
        self.nodes.iter()
    }

    /// Keep only nodes for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&NodeRef) -> bool) {
        let keys = &mut self.keys;
        self.nodes.retain(|node| {
            let kept = keep(node);
            if !kept {
                keys.remove(&key(node));
            }
            kept
        });
    }

    /// Number of ancestors of `node` that are members of this set
    #[must_use]
    pub fn ancestors_within(&self, node: &NodeRef) -> usize {
        node.ancestors()
            .filter(|ancestor| self.contains(ancestor))
            .count()
    }

    /// Reorder members to follow their position in `document`
    pub fn sort_in_document_order(&mut self, document: &Document) {
        let order = document.document_order();
        self.nodes
            .sort_by_key(|node| order.get(&key(node)).copied().unwrap_or(usize::MAX));
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a NodeRef;
    type IntoIter = std::slice::Iter<'a, NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
