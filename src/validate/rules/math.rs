//! Category 12: mathematical content.

use html5ever::ns;

use crate::dom::{ArenaDom, ArenaNodeId};

use super::{Category, Rule, RuleFault};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "12.1",
        category: Category::Math,
        description: "MathML properly structured",
        check: math_has_display,
    },
    Rule {
        id: "12.2",
        category: Category::Math,
        description: "Math alternatives available",
        check: math_has_alttext,
    },
];

fn math_elements(dom: &ArenaDom) -> impl Iterator<Item = ArenaNodeId> {
    dom.elements_by_name(&ns!(mathml), "math").into_iter()
}

fn math_has_display(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(math_elements(dom).all(|math| dom.has_attr(math, "display")))
}

fn math_has_alttext(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(math_elements(dom).all(|math| dom.has_attr(math, "alttext")))
}
