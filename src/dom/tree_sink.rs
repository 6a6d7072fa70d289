//! Builds an [`ArenaDom`] from html5ever tree-construction callbacks.

use std::borrow::Cow;
use std::cell::{Cell, Ref, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{QualName, local_name, ns};
use tracing::{debug, trace};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

/// Name reported for handles that are not elements.
static NO_NAME: QualName = QualName {
    prefix: None,
    ns: ns!(),
    local: local_name!(""),
};

/// Where the tree builder wants a new node to go.
#[derive(Clone, Copy)]
enum Slot {
    LastChildOf(ArenaNodeId),
    Before(ArenaNodeId),
}

/// Tree sink that records every html5ever callback into an arena.
///
/// The tree builder only hands out `&self`, so the arena sits in a
/// `RefCell`. Borrows never outlive a single callback.
pub(crate) struct DocumentBuilder {
    dom: RefCell<ArenaDom>,
    recovered: Cell<usize>,
}

impl DocumentBuilder {
    pub(crate) fn new() -> Self {
        Self {
            dom: RefCell::new(ArenaDom::new()),
            recovered: Cell::new(0),
        }
    }

    /// Number of markup errors the parser recovered from.
    pub(crate) fn recovered_errors(&self) -> usize {
        self.recovered.get()
    }

    pub(crate) fn into_dom(self) -> ArenaDom {
        let recovered = self.recovered_errors();
        if recovered > 0 {
            debug!(recovered, "parsed malformed markup");
        }
        self.dom.into_inner()
    }

    fn place(&self, slot: Slot, child: NodeOrText<ArenaNodeId>) {
        let mut dom = self.dom.borrow_mut();
        match (slot, child) {
            (Slot::LastChildOf(parent), NodeOrText::AppendNode(node)) => dom.append(parent, node),
            (Slot::LastChildOf(parent), NodeOrText::AppendText(text)) => dom.append_text(parent, &text),
            (Slot::Before(sibling), NodeOrText::AppendNode(node)) => dom.insert_before(sibling, node),
            (Slot::Before(sibling), NodeOrText::AppendText(text)) => {
                let node = dom.create_text(text.to_string());
                dom.insert_before(sibling, node);
            }
        }
    }
}

fn into_attributes(attrs: Vec<html5ever::Attribute>) -> Vec<Attribute> {
    attrs
        .into_iter()
        .map(|a| Attribute {
            name: a.name,
            value: a.value.to_string(),
        })
        .collect()
}

impl TreeSink for DocumentBuilder {
    type Handle = ArenaNodeId;
    type Output = Self;
    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        trace!(%msg, "recovered from markup error");
        self.recovered.set(self.recovered.get() + 1);
    }

    fn get_document(&self) -> ArenaNodeId {
        self.dom.borrow().document()
    }

    fn elem_name<'a>(&'a self, target: &'a ArenaNodeId) -> Ref<'a, QualName> {
        Ref::map(self.dom.borrow(), |dom| match dom.get(*target).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => name,
            _ => &NO_NAME,
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<html5ever::Attribute>,
        _flags: ElementFlags,
    ) -> ArenaNodeId {
        self.dom.borrow_mut().create_element(name, into_attributes(attrs))
    }

    fn create_comment(&self, text: StrTendril) -> ArenaNodeId {
        self.dom.borrow_mut().create_comment(text.to_string())
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> ArenaNodeId {
        self.dom.borrow_mut().create_comment(data.to_string())
    }

    fn append(&self, parent: &ArenaNodeId, child: NodeOrText<ArenaNodeId>) {
        self.place(Slot::LastChildOf(*parent), child);
    }

    fn append_before_sibling(&self, sibling: &ArenaNodeId, child: NodeOrText<ArenaNodeId>) {
        self.place(Slot::Before(*sibling), child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &ArenaNodeId,
        prev_element: &ArenaNodeId,
        child: NodeOrText<ArenaNodeId>,
    ) {
        // Foster parenting: content goes before a table that is still attached
        let attached = self.dom.borrow().parent(*element).is_some();
        let slot = if attached {
            Slot::Before(*element)
        } else {
            Slot::LastChildOf(*prev_element)
        };
        self.place(slot, child);
    }

    fn append_doctype_to_document(&self, name: StrTendril, public_id: StrTendril, system_id: StrTendril) {
        let mut dom = self.dom.borrow_mut();
        let doctype = dom.create_doctype(name.to_string(), public_id.to_string(), system_id.to_string());
        let document = dom.document();
        dom.append(document, doctype);
    }

    // Template contents stay inline; the structure mapper hides <template>.
    fn get_template_contents(&self, target: &ArenaNodeId) -> ArenaNodeId {
        *target
    }

    fn same_node(&self, x: &ArenaNodeId, y: &ArenaNodeId) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        if mode != QuirksMode::NoQuirks {
            trace!(?mode, "document parsed in quirks mode");
        }
    }

    fn add_attrs_if_missing(&self, target: &ArenaNodeId, attrs: Vec<html5ever::Attribute>) {
        self.dom.borrow_mut().add_attrs_if_missing(*target, into_attributes(attrs));
    }

    fn remove_from_parent(&self, target: &ArenaNodeId) {
        self.dom.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &ArenaNodeId, new_parent: &ArenaNodeId) {
        self.dom.borrow_mut().reparent_children(*node, *new_parent);
    }
}
