//! Maps HTML elements to structure roles.
//!
//! Element names are first resolved to a closed [`Tag`] set; the role is then
//! a pure function of that tag and the role already assigned to the nearest
//! mapped ancestor.

use super::node::Role;

/// HTML tags the mapper recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Heading(u8),
    P,
    A,
    Img,
    Figure,
    Ul,
    Ol,
    Li,
    Table,
    Caption,
    /// `thead`, `tbody` or `tfoot`.
    TableSection,
    Tr,
    Th,
    Td,
    Form,
    Br,
    /// Inline formatting whose text merges into the enclosing node.
    Phrase,
    /// Elements that carry no reading-order content.
    Hidden,
    Unknown,
}

impl Tag {
    /// Resolve an element's local name.
    pub fn from_name(local_name: &str) -> Tag {
        match local_name {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),

            "p" => Tag::P,
            "a" => Tag::A,
            "img" => Tag::Img,
            "figure" => Tag::Figure,
            "form" => Tag::Form,
            "br" => Tag::Br,

            // Lists
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,

            // Tables
            "table" => Tag::Table,
            "caption" => Tag::Caption,
            "thead" | "tbody" | "tfoot" => Tag::TableSection,
            "tr" => Tag::Tr,
            "th" => Tag::Th,
            "td" => Tag::Td,

            "span" | "em" | "i" | "cite" | "var" | "dfn" | "strong" | "b" | "code" | "kbd"
            | "samp" | "tt" | "sup" | "sub" | "u" | "ins" | "s" | "strike" | "del" | "small"
            | "big" | "mark" | "abbr" | "time" | "q" | "label" | "output" | "data" | "bdi"
            | "bdo" | "font" | "wbr" => Tag::Phrase,

            "head" | "script" | "style" | "template" | "title" | "meta" | "link" | "noscript" => {
                Tag::Hidden
            }

            _ => Tag::Unknown,
        }
    }
}

/// What the mapper does with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Open a child node with this role and map the element's content into it.
    Node(Role),
    /// Open a List node; every direct child becomes a ListItem.
    List,
    /// A Figure node whose text is the image's alternative text.
    Image,
    /// The element's text becomes the enclosing table's text.
    Caption,
    /// Content merges into the enclosing node without a boundary.
    Inline,
    /// Content merges into the enclosing node, as a separate block.
    Block,
    /// A line break: contributes a word separator.
    Break,
    /// Nothing is produced.
    Skip,
}

/// Decide how an element is mapped, given the role of its mapped ancestor.
pub fn assign(tag: Tag, parent: Role) -> Assignment {
    match tag {
        Tag::Heading(level) => match Role::heading(level) {
            Some(role) => Assignment::Node(role),
            None => Assignment::Block,
        },
        Tag::P => Assignment::Node(Role::Paragraph),
        Tag::A => Assignment::Node(Role::Link),
        Tag::Figure => Assignment::Node(Role::Figure),
        Tag::Form => Assignment::Node(Role::Form),
        Tag::Img => Assignment::Image,
        Tag::Ul | Tag::Ol => Assignment::List,
        Tag::Table => Assignment::Node(Role::Table),

        // Context-constrained tags only take their role in the right parent;
        // anywhere else they behave like unrecognized markup
        Tag::Li if parent == Role::List => Assignment::Node(Role::ListItem),
        Tag::Caption if parent == Role::Table => Assignment::Caption,
        Tag::TableSection if parent == Role::Table => Assignment::Inline,
        Tag::Tr if parent == Role::Table => Assignment::Node(Role::TableRow),
        Tag::Th if parent == Role::TableRow => Assignment::Node(Role::TableHeaderCell),
        Tag::Td if parent == Role::TableRow => Assignment::Node(Role::TableDataCell),
        Tag::Li | Tag::Caption | Tag::TableSection | Tag::Tr | Tag::Th | Tag::Td => {
            Assignment::Block
        }

        Tag::Br => Assignment::Break,
        Tag::Phrase => Assignment::Inline,
        Tag::Hidden => Assignment::Skip,
        Tag::Unknown => Assignment::Block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tags() {
        assert_eq!(Tag::from_name("h3"), Tag::Heading(3));
        assert_eq!(assign(Tag::from_name("h3"), Role::Document), Assignment::Node(Role::H3));
        assert_eq!(assign(Tag::from_name("p"), Role::Document), Assignment::Node(Role::Paragraph));
        assert_eq!(assign(Tag::from_name("a"), Role::Paragraph), Assignment::Node(Role::Link));
        assert_eq!(assign(Tag::from_name("strong"), Role::Paragraph), Assignment::Inline);
        assert_eq!(assign(Tag::from_name("script"), Role::Document), Assignment::Skip);
    }

    #[test]
    fn test_list_item_needs_list_parent() {
        assert_eq!(assign(Tag::Li, Role::List), Assignment::Node(Role::ListItem));
        assert_eq!(assign(Tag::Li, Role::Document), Assignment::Block);
    }

    #[test]
    fn test_table_parts_need_table_context() {
        assert_eq!(assign(Tag::Tr, Role::Table), Assignment::Node(Role::TableRow));
        assert_eq!(assign(Tag::Th, Role::TableRow), Assignment::Node(Role::TableHeaderCell));
        assert_eq!(assign(Tag::Td, Role::TableRow), Assignment::Node(Role::TableDataCell));
        assert_eq!(assign(Tag::TableSection, Role::Table), Assignment::Inline);
        assert_eq!(assign(Tag::Caption, Role::Table), Assignment::Caption);

        assert_eq!(assign(Tag::Td, Role::Document), Assignment::Block);
        assert_eq!(assign(Tag::Tr, Role::Paragraph), Assignment::Block);
    }

    #[test]
    fn test_unknown_tags_are_blocks() {
        assert_eq!(Tag::from_name("section"), Tag::Unknown);
        assert_eq!(Tag::from_name("custom-widget"), Tag::Unknown);
        assert_eq!(assign(Tag::Unknown, Role::ListItem), Assignment::Block);
    }
}
