//! Category 4: images and other non-text content.

use crate::dom::ArenaDom;
use crate::dom::predicates::needs_alt_text;

use super::{Category, Rule, RuleFault, every, has_role};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "4.1",
        category: Category::NonTextContent,
        description: "Images have alt text",
        check: images_have_alt,
    },
    Rule {
        id: "4.2",
        category: Category::NonTextContent,
        description: "Complex images have long descriptions",
        check: complex_images_described,
    },
    Rule {
        id: "4.3",
        category: Category::NonTextContent,
        description: "Decorative images are marked",
        check: decorative_images_marked,
    },
];

fn images_have_alt(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["img"], |img| !needs_alt_text(dom, img)))
}

fn complex_images_described(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["img"], |img| {
        !has_role(dom, img, "img")
            || dom.has_attr(img, "aria-describedby")
            || dom.has_attr(img, "longdesc")
    }))
}

fn decorative_images_marked(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["img"], |img| {
        !has_role(dom, img, "presentation") || dom.get_attr(img, "alt") == Some("")
    }))
}
