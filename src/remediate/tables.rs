//! Pass 5: table captions, headers and scopes.

use crate::dom::ArenaDom;
use crate::dom::predicates::table_cells;
use crate::util::{collapse_whitespace, is_blank};

use super::RemediationConfig;

/// Repair every table in the document.
///
/// Per table (nested tables are handled on their own):
/// - prepend a `caption` when missing, taken from the table's `aria-label`
///   or the configured placeholder;
/// - when there is no header cell, turn the first row's `td` cells into
///   `th scope="col"`.
///
/// Finally every `th` without a scope gets `scope="col"`.
pub fn repair_tables(dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
    let mut fixes = 0;

    for table in dom.elements_by_tag("table") {
        if table_cells(dom, table, "caption").is_empty() {
            let text = dom
                .get_attr(table, "aria-label")
                .filter(|label| !is_blank(label))
                .map(collapse_whitespace)
                .unwrap_or_else(|| config.table_caption.clone());
            let caption = dom.create_text_element("caption", vec![], &text);
            dom.prepend(table, caption);
            fixes += 1;
        }

        if table_cells(dom, table, "th").is_empty()
            && let Some(&first_row) = table_cells(dom, table, "tr").first()
        {
            let cells: Vec<_> = dom
                .element_children(first_row)
                .filter(|&cell| dom.has_tag(cell, "td"))
                .collect();
            for cell in cells {
                dom.rename(cell, "th");
                dom.set_attr(cell, "scope", "col");
                fixes += 1;
            }
        }
    }

    for th in dom.elements_by_tag("th") {
        if dom.get_attr(th, "scope").is_none_or(is_blank) {
            dom.set_attr(th, "scope", "col");
            fixes += 1;
        }
    }

    fixes
}
