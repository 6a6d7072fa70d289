//! Category 6: forms and interactive controls.

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::dom::predicates::has_accessible_label;
use crate::util::is_blank;

use super::{Category, Rule, RuleFault, every};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "6.1",
        category: Category::Forms,
        description: "Form controls have labels",
        check: controls_labelled,
    },
    Rule {
        id: "6.2",
        category: Category::Forms,
        description: "Required fields identified",
        check: required_fields_marked,
    },
    Rule {
        id: "6.3",
        category: Category::Forms,
        description: "Form validation messages",
        check: forms_report_errors,
    },
    Rule {
        id: "6.4",
        category: Category::Forms,
        description: "Forms labelled",
        check: forms_labelled,
    },
];

fn control_labelled(dom: &ArenaDom, control: ArenaNodeId) -> bool {
    if has_accessible_label(dom, control) {
        return true;
    }
    let Some(id) = dom.get_attr(control, "id").filter(|id| !is_blank(id)) else {
        return false;
    };
    dom.elements_by_tag("label")
        .into_iter()
        .any(|label| dom.get_attr(label, "for") == Some(id))
}

fn controls_labelled(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["input", "select", "textarea"], |control| {
        let hidden = dom.has_tag(control, "input")
            && dom
                .get_attr(control, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
        hidden || control_labelled(dom, control)
    }))
}

fn required_fields_marked(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(dom
        .elements_with_attr("required")
        .into_iter()
        .all(|field| dom.has_attr(field, "aria-required")))
}

fn forms_report_errors(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["form"], |form| {
        dom.has_attr(form, "novalidate")
            || dom
                .descendants(form)
                .skip(1)
                .any(|id| dom.has_attr(id, "aria-errormessage"))
    }))
}

fn forms_labelled(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["form"], |form| has_accessible_label(dom, form)))
}
