//! Category 1: document structure.

use crate::dom::ArenaDom;
use crate::dom::predicates::{headings, headings_in_order, is_valid_lang_tag};
use crate::util::is_blank;

use super::{Category, Rule, RuleFault, every, exists, require_head};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "1.1",
        category: Category::DocumentStructure,
        description: "Document uses valid structure elements",
        check: structure_elements_present,
    },
    Rule {
        id: "1.2",
        category: Category::DocumentStructure,
        description: "Structure elements properly nested",
        check: sections_nested,
    },
    Rule {
        id: "1.3",
        category: Category::DocumentStructure,
        description: "Heading order is logical",
        check: heading_order,
    },
    Rule {
        id: "1.4",
        category: Category::DocumentStructure,
        description: "No empty structure elements",
        check: no_empty_sections,
    },
    Rule {
        id: "1.5",
        category: Category::DocumentStructure,
        description: "Document has title",
        check: has_title,
    },
    Rule {
        id: "1.6",
        category: Category::DocumentStructure,
        description: "Document language specified",
        check: has_language,
    },
    Rule {
        id: "1.7",
        category: Category::DocumentStructure,
        description: "Content language changes marked",
        check: language_changes_valid,
    },
];

const STRUCTURE_ELEMENTS: &[&str] = &[
    "html", "head", "body", "main", "article", "section", "nav", "aside", "header", "footer",
];

fn structure_elements_present(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(STRUCTURE_ELEMENTS.iter().all(|tag| exists(dom, tag)))
}

fn sections_nested(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["section"], |section| {
        dom.parent(section).is_some_and(|parent| {
            ["main", "article", "div", "body"]
                .iter()
                .any(|tag| dom.has_tag(parent, tag))
        })
    }))
}

/// Shared by 1.3 and 7.3.
pub(super) fn heading_order(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(headings_in_order(
        headings(dom).into_iter().map(|(_, level)| level),
    ))
}

fn no_empty_sections(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["section", "article", "aside", "nav"], |id| {
        !is_blank(&dom.deep_text(id))
    }))
}

fn has_title(dom: &ArenaDom) -> Result<bool, RuleFault> {
    require_head(dom)?;
    Ok(dom
        .find_by_tag("title")
        .is_some_and(|title| !is_blank(&dom.deep_text(title))))
}

fn has_language(dom: &ArenaDom) -> Result<bool, RuleFault> {
    let root = dom
        .document_element()
        .ok_or(RuleFault::MissingElement("html"))?;
    Ok(dom.get_attr(root, "lang").is_some_and(|lang| !is_blank(lang)))
}

fn language_changes_valid(dom: &ArenaDom) -> Result<bool, RuleFault> {
    let root = dom.document_element();
    Ok(dom
        .elements_with_attr("lang")
        .into_iter()
        .filter(|&id| Some(id) != root)
        .all(|id| dom.get_attr(id, "lang").is_some_and(is_valid_lang_tag)))
}
