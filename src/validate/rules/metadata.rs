//! Category 7: document metadata.

use crate::dom::ArenaDom;
use crate::dom::predicates::{REQUIRED_META, has_charset_meta, has_named_meta};

use super::document::heading_order;
use super::{Category, Rule, RuleFault, require_head};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "7.1",
        category: Category::Metadata,
        description: "Document metadata complete",
        check: metadata_complete,
    },
    Rule {
        id: "7.2",
        category: Category::Metadata,
        description: "Character encoding specified",
        check: charset_declared,
    },
    Rule {
        id: "7.3",
        category: Category::Metadata,
        description: "Document outline valid",
        check: heading_order,
    },
];

fn metadata_complete(dom: &ArenaDom) -> Result<bool, RuleFault> {
    require_head(dom)?;
    Ok(REQUIRED_META.iter().all(|name| has_named_meta(dom, name)))
}

fn charset_declared(dom: &ArenaDom) -> Result<bool, RuleFault> {
    require_head(dom)?;
    Ok(has_charset_meta(dom))
}
