//! Shared predicates used by both validation rules and remediation passes.
//!
//! Keeping the definition of "needs alt text" or "has a label" in one place
//! is what lets a remediation pass and the rule that checks its defect class
//! agree on what counts as fixed.

use crate::util::is_blank;

use super::arena::{ArenaDom, ArenaNodeId};

/// Check if an image is explicitly marked as decorative.
pub fn is_decorative_image(dom: &ArenaDom, img: ArenaNodeId) -> bool {
    let role_decorative = dom
        .get_attr(img, "role")
        .is_some_and(|r| matches!(r.trim(), "presentation" | "none"));
    role_decorative || dom.get_attr(img, "aria-hidden") == Some("true")
}

/// Check if an image lacks acceptable alternative text.
///
/// A missing `alt` always fails. A blank `alt` is only acceptable on a
/// decorative image.
pub fn needs_alt_text(dom: &ArenaDom, img: ArenaNodeId) -> bool {
    match dom.get_attr(img, "alt") {
        None => true,
        Some(alt) if is_blank(alt) => !is_decorative_image(dom, img),
        Some(_) => false,
    }
}

/// Check if an element carries a non-blank `aria-label` or `aria-labelledby`.
pub fn has_accessible_label(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    ["aria-label", "aria-labelledby"]
        .iter()
        .any(|attr| dom.get_attr(id, attr).is_some_and(|v| !is_blank(v)))
}

/// Heading level of an `h1`–`h6` element.
pub fn heading_level(dom: &ArenaDom, id: ArenaNodeId) -> Option<u8> {
    let name = dom.html_tag(id)?;
    match name.as_ref() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Headings in document order with their levels.
pub fn headings(dom: &ArenaDom) -> Vec<(ArenaNodeId, u8)> {
    dom.descendants(dom.document())
        .filter_map(|id| heading_level(dom, id).map(|level| (id, level)))
        .collect()
}

/// Check that no heading goes more than one level deeper than its predecessor.
///
/// The sequence starts at level 0, so the first heading must be an `h1`.
/// Going shallower by any amount is allowed.
pub fn headings_in_order(levels: impl IntoIterator<Item = u8>) -> bool {
    let mut previous = 0u8;
    for level in levels {
        if level > previous + 1 {
            return false;
        }
        previous = level;
    }
    true
}

/// Check whether a language tag has the `xx` or `xx-YY` form.
pub fn is_valid_lang_tag(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(u8::is_ascii_alphabetic),
        5 => {
            bytes[..2].iter().all(u8::is_ascii_alphabetic)
                && bytes[2] == b'-'
                && bytes[3..].iter().all(u8::is_ascii_alphabetic)
        }
        _ => false,
    }
}

/// Descendants of a table that belong to it rather than to a nested table.
pub fn table_scope(dom: &ArenaDom, table: ArenaNodeId) -> Vec<ArenaNodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<ArenaNodeId> = dom.children(table).collect();
    stack.reverse();

    while let Some(id) = stack.pop() {
        out.push(id);
        if dom.has_tag(id, "table") {
            continue;
        }
        let mut children: Vec<_> = dom.children(id).collect();
        children.reverse();
        stack.extend(children);
    }
    out
}

/// Elements with the given tag inside a table's own scope.
pub fn table_cells(dom: &ArenaDom, table: ArenaNodeId, tag: &str) -> Vec<ArenaNodeId> {
    table_scope(dom, table)
        .into_iter()
        .filter(|&id| dom.has_tag(id, tag))
        .collect()
}

/// Check whether an element is a `ul` or `ol`.
pub fn is_list(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.has_tag(id, "ul") || dom.has_tag(id, "ol")
}

/// `meta name` values every document must declare.
pub const REQUIRED_META: [&str; 3] = ["description", "keywords", "author"];

/// Check whether a `meta` element with the given `name` exists anywhere.
pub fn has_named_meta(dom: &ArenaDom, name: &str) -> bool {
    dom.elements_by_tag("meta")
        .into_iter()
        .any(|meta| dom.get_attr(meta, "name") == Some(name))
}

/// Check whether a `meta charset` declaration exists anywhere.
pub fn has_charset_meta(dom: &ArenaDom) -> bool {
    dom.elements_by_tag("meta")
        .into_iter()
        .any(|meta| dom.has_attr(meta, "charset"))
}
