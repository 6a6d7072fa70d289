//! Arena-based document tree.
//!
//! Every node lives in one contiguous vector and is addressed by index.
//! Parent/child/sibling links are indices into that vector, so structural
//! edits (insert, detach, reparent, rename) never leave dangling references:
//! a detached node simply becomes unreachable from the document root.

use std::collections::HashMap;

use html5ever::{LocalName, Namespace, QualName, ns};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena.
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaNodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element { name: QualName, attrs: Vec<Attribute> },
    /// Text content.
    Text(String),
    /// Comment (kept so output round-trips, ignored by every consumer).
    Comment(String),
    /// Document type declaration.
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

/// Element attribute. Names are unique within one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Create an attribute in the null namespace.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        }
    }
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub first_child: ArenaNodeId,
    pub last_child: ArenaNodeId,
    pub prev_sibling: ArenaNodeId,
    pub next_sibling: ArenaNodeId,
}

impl ArenaNode {
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            first_child: ArenaNodeId::NONE,
            last_child: ArenaNodeId::NONE,
            prev_sibling: ArenaNodeId::NONE,
            next_sibling: ArenaNodeId::NONE,
        }
    }
}

/// Arena-allocated document tree.
///
/// Equality is structural: two trees are equal when the nodes reachable from
/// their document roots match in kind, tag name, attributes (as a set), text
/// and child order. Arena indices and detached nodes do not participate.
#[derive(Debug, Clone)]
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
    /// Map from id attribute to node ID for fragment lookups.
    id_map: HashMap<String, ArenaNodeId>,
}

impl ArenaDom {
    /// Create a new empty tree holding only a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
            id_map: HashMap::new(),
        };
        dom.document = dom.alloc(ArenaNode::new(ArenaNodeData::Document));
        dom
    }

    fn alloc(&mut self, node: ArenaNode) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of allocated nodes, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the document root.
    pub fn is_empty(&self) -> bool {
        self.get(self.document)
            .is_none_or(|n| n.first_child.is_none())
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        let id_attr = attrs
            .iter()
            .find(|a| a.name.local.as_ref() == "id")
            .map(|a| a.value.clone());

        let node_id = self.alloc(ArenaNode::new(ArenaNodeData::Element { name, attrs }));

        if let Some(id_str) = id_attr {
            self.id_map.entry(id_str).or_insert(node_id);
        }

        node_id
    }

    /// Create an element in the HTML namespace.
    pub fn create_html_element(&mut self, tag: &str, attrs: Vec<Attribute>) -> ArenaNodeId {
        self.create_element(QualName::new(None, ns!(html), LocalName::from(tag)), attrs)
    }

    /// Create an HTML element containing a single text node.
    pub fn create_text_element(&mut self, tag: &str, attrs: Vec<Attribute>, text: &str) -> ArenaNodeId {
        let element = self.create_html_element(tag, attrs);
        if !text.is_empty() {
            let text_node = self.create_text(text.to_string());
            self.append(element, text_node);
        }
        element
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(
        &mut self,
        name: String,
        public_id: String,
        system_id: String,
    ) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Doctype {
            name,
            public_id,
            system_id,
        }))
    }

    // ------------------------------------------------------------------
    // Structural edits
    // ------------------------------------------------------------------

    /// Append a child as the last child of `parent`.
    ///
    /// The child must be detached.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = ArenaNodeId::NONE;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a detached node as the first child of `parent`.
    pub fn prepend(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        if first.is_some() {
            self.insert_before(first, child);
        } else {
            self.append(parent, child);
        }
    }

    /// Insert a detached node immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Unlink a node from its parent. The node keeps its own subtree.
    pub fn detach(&mut self, target: ArenaNodeId) {
        let (parent, prev, next) = match self.get(target) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = ArenaNodeId::NONE;
            node.prev_sibling = ArenaNodeId::NONE;
            node.next_sibling = ArenaNodeId::NONE;
        }
    }

    /// Move every child of `from` to the end of `to`, preserving order.
    pub fn reparent_children(&mut self, from: ArenaNodeId, to: ArenaNodeId) {
        let children: Vec<_> = self.children(from).collect();
        for child in children {
            self.detach(child);
            self.append(to, child);
        }
    }

    /// Replace `target` in its parent with `wrapper`, then move `target` into it.
    pub fn wrap(&mut self, target: ArenaNodeId, wrapper: ArenaNodeId) {
        self.insert_before(target, wrapper);
        self.detach(target);
        self.append(wrapper, target);
    }

    /// Append text to an existing trailing text node, or create a new one.
    pub fn append_text(&mut self, parent: ArenaNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let ArenaNodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Replace all children of an element with a single text node.
    pub fn set_text(&mut self, id: ArenaNodeId, text: &str) {
        let children: Vec<_> = self.children(id).collect();
        for child in children {
            self.detach(child);
        }
        let text_node = self.create_text(text.to_string());
        self.append(id, text_node);
    }

    /// Change an element's local name, keeping namespace and attributes.
    pub fn rename(&mut self, id: ArenaNodeId, tag: &str) {
        if let Some(node) = self.get_mut(id)
            && let ArenaNodeData::Element { name, .. } = &mut node.data
        {
            name.local = LocalName::from(tag);
        }
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, id: ArenaNodeId, attr_name: &str, value: &str) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        let ArenaNodeData::Element { attrs, .. } = &mut node.data else {
            return;
        };

        match attrs.iter_mut().find(|a| a.name.local.as_ref() == attr_name) {
            Some(existing) => existing.value = value.to_string(),
            None => attrs.push(Attribute::new(attr_name, value)),
        }

        if attr_name == "id" {
            self.id_map.entry(value.to_string()).or_insert(id);
        }
    }

    /// Add attributes that the element does not already carry.
    pub fn add_attrs_if_missing(&mut self, id: ArenaNodeId, new_attrs: Vec<Attribute>) {
        if let Some(node) = self.get_mut(id)
            && let ArenaNodeData::Element { attrs, .. } = &mut node.data
        {
            for attr in new_attrs {
                if !attrs.iter().any(|a| a.name == attr.name) {
                    attrs.push(attr);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Iterate over children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    /// Iterate over element children of a node.
    pub fn element_children(&self, parent: ArenaNodeId) -> impl Iterator<Item = ArenaNodeId> + '_ {
        self.children(parent).filter(|&c| self.is_element(c))
    }

    /// Iterate over `root` and all its descendants in document order.
    pub fn descendants(&self, root: ArenaNodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            stack: vec![root],
        }
    }

    /// All HTML elements with the given tag name, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<ArenaNodeId> {
        self.descendants(self.document)
            .filter(|&id| self.has_tag(id, tag))
            .collect()
    }

    /// All elements with the given namespace and local name, in document order.
    pub fn elements_by_name(&self, namespace: &Namespace, local: &str) -> Vec<ArenaNodeId> {
        self.descendants(self.document)
            .filter(|&id| self.has_name(id, namespace, local))
            .collect()
    }

    /// All elements carrying the given attribute, in document order.
    pub fn elements_with_attr(&self, attr_name: &str) -> Vec<ArenaNodeId> {
        self.descendants(self.document)
            .filter(|&id| self.get_attr(id, attr_name).is_some())
            .collect()
    }

    /// Find the first node matching a predicate (DFS, document order).
    pub fn find<F>(&self, predicate: F) -> Option<ArenaNodeId>
    where
        F: Fn(&ArenaNode) -> bool,
    {
        self.descendants(self.document)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// First HTML element with the given tag name.
    pub fn find_by_tag(&self, tag: &str) -> Option<ArenaNodeId> {
        self.descendants(self.document)
            .find(|&id| self.has_tag(id, tag))
    }

    /// Get node by id attribute.
    pub fn get_by_id(&self, id: &str) -> Option<ArenaNodeId> {
        self.id_map
            .get(id)
            .copied()
            .filter(|&node| self.get_attr(node, "id") == Some(id) && self.is_attached(node))
    }

    /// Check whether a node is reachable from the document root.
    pub fn is_attached(&self, id: ArenaNodeId) -> bool {
        let mut current = id;
        while let Some(node) = self.get(current) {
            if current == self.document {
                return true;
            }
            current = node.parent;
        }
        false
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: ArenaNodeId) -> Option<ArenaNodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_some())
    }

    /// The document element (first element child of the document).
    pub fn document_element(&self) -> Option<ArenaNodeId> {
        self.element_children(self.document).next()
    }

    /// The `head` element, wherever it sits.
    pub fn head(&self) -> Option<ArenaNodeId> {
        self.find_by_tag("head")
    }

    /// The `body` element, wherever it sits.
    pub fn body(&self) -> Option<ArenaNodeId> {
        self.find_by_tag("body")
    }

    // ------------------------------------------------------------------
    // Node accessors
    // ------------------------------------------------------------------

    /// Get element's local name (tag).
    pub fn element_name(&self, id: ArenaNodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// Local name of an element in the HTML namespace.
    ///
    /// Foreign content (`<svg><title>`, MathML) yields `None`, so HTML tag
    /// lookups never pick up a same-named SVG or MathML element.
    pub fn html_tag(&self, id: ArenaNodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } if name.ns == ns!(html) => Some(&name.local),
            _ => None,
        })
    }

    /// Check whether a node is an HTML element with the given tag.
    pub fn has_tag(&self, id: ArenaNodeId, tag: &str) -> bool {
        self.html_tag(id).is_some_and(|n| n.as_ref() == tag)
    }

    /// Check whether a node is an element with the given namespace and local name.
    pub fn has_name(&self, id: ArenaNodeId, namespace: &Namespace, local: &str) -> bool {
        self.get(id).is_some_and(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => name.ns == *namespace && name.local.as_ref() == local,
            _ => false,
        })
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: ArenaNodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Check whether an element carries an attribute.
    pub fn has_attr(&self, id: ArenaNodeId, attr_name: &str) -> bool {
        self.get_attr(id, attr_name).is_some()
    }

    /// Get an element's attributes.
    pub fn attrs(&self, id: ArenaNodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: ArenaNodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, ArenaNodeData::Element { .. }))
    }

    /// Check if node is a text node.
    pub fn is_text(&self, id: ArenaNodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, ArenaNodeData::Text(_)))
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: ArenaNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn deep_text(&self, id: ArenaNodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(text) = self.text_content(node) {
                out.push_str(text);
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Structural equality
    // ------------------------------------------------------------------

    fn subtree_eq(&self, a: ArenaNodeId, other: &ArenaDom, b: ArenaNodeId) -> bool {
        let (Some(left), Some(right)) = (self.get(a), other.get(b)) else {
            return false;
        };

        let same_data = match (&left.data, &right.data) {
            (
                ArenaNodeData::Element { name: ln, attrs: la },
                ArenaNodeData::Element { name: rn, attrs: ra },
            ) => {
                ln == rn
                    && la.len() == ra.len()
                    && la.iter().all(|l| ra.iter().any(|r| r == l))
            }
            (l, r) => l == r,
        };
        if !same_data {
            return false;
        }

        let mut left_children = self.children(a);
        let mut right_children = other.children(b);
        loop {
            match (left_children.next(), right_children.next()) {
                (None, None) => return true,
                (Some(l), Some(r)) => {
                    if !self.subtree_eq(l, other, r) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl PartialEq for ArenaDom {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.document, other, other.document)
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a ArenaDom,
    current: ArenaNodeId,
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(ArenaNodeId::NONE);
        Some(id)
    }
}

/// Pre-order depth-first iterator over a subtree.
pub struct Descendants<'a> {
    dom: &'a ArenaDom,
    stack: Vec<ArenaNodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut child = self
            .dom
            .get(current)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);
        while let Some(node) = self.dom.get(child) {
            self.stack.push(child);
            child = node.prev_sibling;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_elements() {
        let mut dom = ArenaDom::new();

        let div = dom.create_html_element("div", vec![Attribute::new("id", "main")]);
        dom.append(dom.document(), div);

        assert_eq!(dom.element_name(div).unwrap().as_ref(), "div");
        assert_eq!(dom.get_attr(div, "id"), Some("main"));
        assert_eq!(dom.get_by_id("main"), Some(div));
    }

    #[test]
    fn test_append_children() {
        let mut dom = ArenaDom::new();

        let parent = dom.create_html_element("div", vec![]);
        let child1 = dom.create_html_element("p", vec![]);
        let child2 = dom.create_html_element("p", vec![]);

        dom.append(dom.document(), parent);
        dom.append(parent, child1);
        dom.append(parent, child2);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![child1, child2]);
    }

    #[test]
    fn test_text_merging() {
        let mut dom = ArenaDom::new();

        let p = dom.create_html_element("p", vec![]);
        dom.append(dom.document(), p);

        dom.append_text(p, "Hello, ");
        dom.append_text(p, "World!");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.text_content(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn test_prepend_and_insert_before() {
        let mut dom = ArenaDom::new();
        let ul = dom.create_html_element("ul", vec![]);
        dom.append(dom.document(), ul);

        let b = dom.create_html_element("b", vec![]);
        dom.append(ul, b);
        let a = dom.create_html_element("a", vec![]);
        dom.prepend(ul, a);
        let c = dom.create_html_element("i", vec![]);
        dom.insert_before(b, c);

        let tags: Vec<_> = dom
            .children(ul)
            .map(|id| dom.element_name(id).unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["a", "i", "b"]);
    }

    #[test]
    fn test_detach_relinks_siblings() {
        let mut dom = ArenaDom::new();
        let div = dom.create_html_element("div", vec![]);
        dom.append(dom.document(), div);
        let first = dom.create_html_element("p", vec![]);
        let middle = dom.create_html_element("span", vec![]);
        let last = dom.create_html_element("p", vec![]);
        dom.append(div, first);
        dom.append(div, middle);
        dom.append(div, last);

        dom.detach(middle);
        assert_eq!(dom.children(div).collect::<Vec<_>>(), vec![first, last]);
        assert!(!dom.is_attached(middle));

        dom.detach(last);
        assert_eq!(dom.children(div).collect::<Vec<_>>(), vec![first]);
        assert_eq!(dom.get(div).unwrap().last_child, first);
    }

    #[test]
    fn test_wrap_keeps_position() {
        let mut dom = ArenaDom::new();
        let ul = dom.create_html_element("ul", vec![]);
        dom.append(dom.document(), ul);
        let li = dom.create_html_element("li", vec![]);
        let div = dom.create_html_element("div", vec![]);
        let tail = dom.create_html_element("li", vec![]);
        dom.append(ul, li);
        dom.append(ul, div);
        dom.append(ul, tail);

        let wrapper = dom.create_html_element("li", vec![]);
        dom.wrap(div, wrapper);

        assert_eq!(dom.children(ul).collect::<Vec<_>>(), vec![li, wrapper, tail]);
        assert_eq!(dom.children(wrapper).collect::<Vec<_>>(), vec![div]);
    }

    #[test]
    fn test_rename_and_set_attr() {
        let mut dom = ArenaDom::new();
        let td = dom.create_text_element("td", vec![], "A");
        dom.append(dom.document(), td);

        dom.rename(td, "th");
        dom.set_attr(td, "scope", "col");
        dom.set_attr(td, "scope", "row");

        assert!(dom.has_tag(td, "th"));
        assert_eq!(dom.attrs(td).len(), 1);
        assert_eq!(dom.get_attr(td, "scope"), Some("row"));
        assert_eq!(dom.deep_text(td), "A");
    }

    #[test]
    fn test_descendants_document_order() {
        let mut dom = ArenaDom::new();
        let div = dom.create_html_element("div", vec![]);
        dom.append(dom.document(), div);
        let h1 = dom.create_text_element("h1", vec![], "T");
        let p = dom.create_text_element("p", vec![], "x");
        dom.append(div, h1);
        dom.append(div, p);

        let tags: Vec<_> = dom
            .descendants(dom.document())
            .filter_map(|id| dom.element_name(id).map(|n| n.to_string()))
            .collect();
        assert_eq!(tags, vec!["div", "h1", "p"]);
    }

    #[test]
    fn test_structural_equality_ignores_arena_layout() {
        let mut left = ArenaDom::new();
        let p = left.create_text_element("p", vec![Attribute::new("a", "1"), Attribute::new("b", "2")], "x");
        left.append(left.document(), p);
        // Orphan node must not matter
        left.create_html_element("div", vec![]);

        let mut right = ArenaDom::new();
        let text = right.create_text("x".to_string());
        let p = right.create_html_element("p", vec![Attribute::new("b", "2"), Attribute::new("a", "1")]);
        right.append(p, text);
        right.append(right.document(), p);

        assert_eq!(left, right);

        right.set_attr(p, "a", "changed");
        assert_ne!(left, right);
    }

    #[test]
    fn test_get_by_id_ignores_detached() {
        let mut dom = ArenaDom::new();
        let note = dom.create_html_element("aside", vec![Attribute::new("id", "fn1")]);
        dom.append(dom.document(), note);
        assert_eq!(dom.get_by_id("fn1"), Some(note));

        dom.detach(note);
        assert_eq!(dom.get_by_id("fn1"), None);
    }
}
