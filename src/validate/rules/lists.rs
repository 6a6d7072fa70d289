//! Category 8: lists.

use crate::dom::ArenaDom;
use crate::dom::predicates::is_list;

use super::{Category, Rule, RuleFault, every};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "8.1",
        category: Category::Lists,
        description: "Lists properly structured",
        check: list_children_are_items,
    },
    Rule {
        id: "8.2",
        category: Category::Lists,
        description: "Nested lists proper",
        check: nested_lists_in_items,
    },
    Rule {
        id: "8.3",
        category: Category::Lists,
        description: "Definition lists proper",
        check: definition_lists_proper,
    },
];

fn list_children_are_items(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["ul", "ol"], |list| {
        dom.element_children(list).all(|child| dom.has_tag(child, "li"))
    }))
}

fn nested_lists_in_items(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["ul", "ol"], |list| {
        !dom.parent(list).is_some_and(|parent| is_list(dom, parent))
    }))
}

fn definition_lists_proper(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["dl"], |dl| {
        dom.element_children(dl)
            .all(|child| dom.has_tag(child, "dt") || dom.has_tag(child, "dd"))
    }))
}
