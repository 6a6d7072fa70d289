//! Pass 8: list item coercion.

use crate::dom::ArenaDom;
use crate::dom::predicates::is_list;

/// Wrap every non-`li` element child of a `ul`/`ol` in a new `li`.
pub fn repair_lists(dom: &mut ArenaDom) -> usize {
    let lists: Vec<_> = dom
        .descendants(dom.document())
        .filter(|&id| is_list(dom, id))
        .collect();
    let mut fixes = 0;

    for list in lists {
        let strays: Vec<_> = dom
            .element_children(list)
            .filter(|&child| !dom.has_tag(child, "li"))
            .collect();
        for child in strays {
            let item = dom.create_html_element("li", vec![]);
            dom.wrap(child, item);
            fixes += 1;
        }
    }

    fixes
}
