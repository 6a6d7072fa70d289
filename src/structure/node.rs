//! Logical structure tree produced by the mapper.

/// Semantic role of a structure node.
///
/// Serialized (and reported by [`Role::pdf_tag`]) as the standard structure
/// type name used by tagged output documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum Role {
    Document,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    #[cfg_attr(feature = "cli", serde(rename = "P"))]
    Paragraph,
    #[cfg_attr(feature = "cli", serde(rename = "L"))]
    List,
    #[cfg_attr(feature = "cli", serde(rename = "LI"))]
    ListItem,
    Table,
    #[cfg_attr(feature = "cli", serde(rename = "TR"))]
    TableRow,
    #[cfg_attr(feature = "cli", serde(rename = "TH"))]
    TableHeaderCell,
    #[cfg_attr(feature = "cli", serde(rename = "TD"))]
    TableDataCell,
    Figure,
    Link,
    Span,
    Form,
}

impl Role {
    /// Heading role for a level in `1..=6`.
    pub fn heading(level: u8) -> Option<Role> {
        match level {
            1 => Some(Role::H1),
            2 => Some(Role::H2),
            3 => Some(Role::H3),
            4 => Some(Role::H4),
            5 => Some(Role::H5),
            6 => Some(Role::H6),
            _ => None,
        }
    }

    /// Heading level, if this is a heading role.
    pub fn level(self) -> Option<u8> {
        match self {
            Role::H1 => Some(1),
            Role::H2 => Some(2),
            Role::H3 => Some(3),
            Role::H4 => Some(4),
            Role::H5 => Some(5),
            Role::H6 => Some(6),
            _ => None,
        }
    }

    /// Structure type name in tagged output.
    pub fn pdf_tag(self) -> &'static str {
        match self {
            Role::Document => "Document",
            Role::H1 => "H1",
            Role::H2 => "H2",
            Role::H3 => "H3",
            Role::H4 => "H4",
            Role::H5 => "H5",
            Role::H6 => "H6",
            Role::Paragraph => "P",
            Role::List => "L",
            Role::ListItem => "LI",
            Role::Table => "Table",
            Role::TableRow => "TR",
            Role::TableHeaderCell => "TH",
            Role::TableDataCell => "TD",
            Role::Figure => "Figure",
            Role::Link => "Link",
            Role::Span => "Span",
            Role::Form => "Form",
        }
    }

    /// Check if text content is accumulated directly on nodes of this role.
    ///
    /// Grouping roles (Document, List, Table, TableRow, Form) never hold text
    /// themselves; loose text inside them is collected into Span children.
    pub fn holds_text(self) -> bool {
        !matches!(
            self,
            Role::Document | Role::List | Role::Table | Role::TableRow | Role::Form
        )
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pdf_tag())
    }
}

/// A node in the logical structure tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct StructureNode {
    pub role: Role,
    /// Whitespace-collapsed text owned directly by this node.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "String::is_empty"))]
    pub text: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<StructureNode>,
}

impl StructureNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Iterate over this node and all descendants in pre-order.
    pub fn iter(&self) -> StructureIter<'_> {
        StructureIter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// All text in this subtree, in reading order, joined by single spaces.
    pub fn text_content(&self) -> String {
        self.iter()
            .map(|n| n.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Roles of the direct children.
    pub fn child_roles(&self) -> Vec<Role> {
        self.children.iter().map(|c| c.role).collect()
    }
}

/// Pre-order iterator over a structure subtree.
pub struct StructureIter<'a> {
    stack: Vec<&'a StructureNode>,
}

impl<'a> Iterator for StructureIter<'a> {
    type Item = &'a StructureNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
