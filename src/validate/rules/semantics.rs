//! Category 2: semantics and roles.

use crate::dom::ArenaDom;

use super::{Category, Rule, RuleFault, every};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "2.1",
        category: Category::Semantics,
        description: "ARIA roles used appropriately",
        check: roles_known,
    },
    Rule {
        id: "2.2",
        category: Category::Semantics,
        description: "Interactive elements are operable",
        check: links_operable,
    },
];

/// Landmark roles, plus the presentation and document roles that other
/// rules in this battery rely on.
const KNOWN_ROLES: &[&str] = &[
    "main",
    "navigation",
    "banner",
    "contentinfo",
    "complementary",
    "form",
    "search",
    "region",
    "presentation",
    "none",
    "img",
    "grid",
    "doc-noteref",
    "doc-footnote",
];

fn roles_known(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(dom.elements_with_attr("role").into_iter().all(|id| {
        let mut tokens = dom
            .get_attr(id, "role")
            .unwrap_or_default()
            .split_whitespace()
            .peekable();
        tokens.peek().is_some() && tokens.all(|role| KNOWN_ROLES.contains(&role))
    }))
}

fn links_operable(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["a"], |a| {
        dom.has_attr(a, "disabled") || dom.has_attr(a, "href")
    }))
}
