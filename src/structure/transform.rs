//! Transform an ArenaDom into a logical structure tree.

use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId};
use crate::util::{collapse_whitespace, finish_text, is_blank, push_collapsed};

use super::node::{Role, StructureNode};
use super::role_map::{Assignment, Tag, assign};

/// Context for one mapping walk.
struct MapContext<'a> {
    dom: &'a ArenaDom,
    /// Whether the trailing Span of the current grouping node still accepts
    /// inline text. Any new child node or block boundary closes it.
    span_open: bool,
}

impl<'a> MapContext<'a> {
    fn new(dom: &'a ArenaDom) -> Self {
        Self {
            dom,
            span_open: false,
        }
    }

    fn map_children(&mut self, dom_parent: ArenaNodeId, target: &mut StructureNode) {
        let dom = self.dom;
        for child in dom.children(dom_parent) {
            self.map_node(child, target);
        }
    }

    fn map_node(&mut self, dom_id: ArenaNodeId, target: &mut StructureNode) {
        let dom = self.dom;
        let Some(node) = dom.get(dom_id) else {
            return;
        };

        let name = match &node.data {
            ArenaNodeData::Text(text) => {
                self.push_text(target, text);
                return;
            }
            ArenaNodeData::Element { name, .. } => name,
            ArenaNodeData::Document
            | ArenaNodeData::Comment(_)
            | ArenaNodeData::Doctype { .. } => return,
        };

        match assign(Tag::from_name(name.local.as_ref()), target.role) {
            Assignment::Node(role) => {
                let mut child = StructureNode::new(role);
                self.span_open = false;
                self.map_children(dom_id, &mut child);
                self.push_child(target, child);
            }
            Assignment::List => {
                let mut list = StructureNode::new(Role::List);
                self.span_open = false;
                self.map_list_items(dom_id, &mut list);
                self.push_child(target, list);
            }
            Assignment::Image => {
                let alt = dom
                    .get_attr(dom_id, "alt")
                    .map(collapse_whitespace)
                    .unwrap_or_default();
                self.push_child(target, StructureNode::with_text(Role::Figure, alt));
            }
            Assignment::Caption => {
                let caption = collapse_whitespace(&dom.deep_text(dom_id));
                if !caption.is_empty() {
                    if !target.text.is_empty() {
                        target.text.push(' ');
                    }
                    target.text.push_str(&caption);
                }
            }
            Assignment::Inline => self.map_children(dom_id, target),
            Assignment::Block => {
                self.block_boundary(target);
                self.map_children(dom_id, target);
                self.block_boundary(target);
            }
            Assignment::Break => self.push_text(target, " "),
            Assignment::Skip => {}
        }
    }

    /// Map a list's children, wrapping each one in a ListItem.
    fn map_list_items(&mut self, dom_list: ArenaNodeId, list: &mut StructureNode) {
        let dom = self.dom;
        for child in dom.children(dom_list) {
            let Some(node) = dom.get(child) else {
                continue;
            };

            match &node.data {
                ArenaNodeData::Element { name, .. } => {
                    match assign(Tag::from_name(name.local.as_ref()), Role::List) {
                        Assignment::Node(Role::ListItem) => self.map_node(child, list),
                        Assignment::Skip => {}
                        _ => {
                            // Coerce stray content into an item of its own
                            let mut item = StructureNode::new(Role::ListItem);
                            self.span_open = false;
                            self.map_node(child, &mut item);
                            self.push_child(list, item);
                        }
                    }
                }
                ArenaNodeData::Text(text) if !is_blank(text) => {
                    let item = StructureNode::with_text(Role::ListItem, collapse_whitespace(text));
                    self.push_child(list, item);
                }
                _ => {}
            }
        }
    }

    /// Route text to the node that owns it.
    fn push_text(&mut self, target: &mut StructureNode, text: &str) {
        if target.role.holds_text() {
            push_collapsed(&mut target.text, text);
            return;
        }

        if self.span_open
            && let Some(span) = target.children.last_mut()
            && span.role == Role::Span
        {
            push_collapsed(&mut span.text, text);
            return;
        }

        if is_blank(text) {
            return;
        }

        let mut span = StructureNode::new(Role::Span);
        push_collapsed(&mut span.text, text);
        target.children.push(span);
        self.span_open = true;
    }

    fn push_child(&mut self, target: &mut StructureNode, mut child: StructureNode) {
        finish_node(&mut child);
        target.children.push(child);
        self.span_open = false;
    }

    fn block_boundary(&mut self, target: &mut StructureNode) {
        if target.role.holds_text() {
            push_collapsed(&mut target.text, " ");
        } else {
            self.span_open = false;
        }
    }
}

/// Trim text left open by whitespace collapsing.
fn finish_node(node: &mut StructureNode) {
    finish_text(&mut node.text);
    for child in &mut node.children {
        if child.role == Role::Span {
            finish_text(&mut child.text);
        }
    }
}

/// Map the document's primary content container.
///
/// The container is the first `main` element, else `body`, else the document
/// element. The returned root always has role Document.
pub fn map_to_structure(dom: &ArenaDom) -> StructureNode {
    let root = dom
        .find_by_tag("main")
        .or_else(|| dom.body())
        .or_else(|| dom.document_element())
        .unwrap_or(dom.document());
    map_subtree(dom, root)
}

/// Map an arbitrary subtree under a Document root.
pub fn map_subtree(dom: &ArenaDom, root: ArenaNodeId) -> StructureNode {
    let mut ctx = MapContext::new(dom);
    let mut document = StructureNode::new(Role::Document);

    if dom.is_element(root) {
        ctx.map_node(root, &mut document);
    } else {
        ctx.map_children(root, &mut document);
    }

    finish_node(&mut document);
    document
}
