//! Category 3: tables.

use crate::dom::ArenaDom;
use crate::dom::predicates::table_cells;
use crate::util::is_blank;

use super::{Category, Rule, RuleFault, every, has_role};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "3.1",
        category: Category::Tables,
        description: "Tables have headers",
        check: tables_have_headers,
    },
    Rule {
        id: "3.2",
        category: Category::Tables,
        description: "Table headers have scope",
        check: headers_have_scope,
    },
    Rule {
        id: "3.3",
        category: Category::Tables,
        description: "Complex tables have ids and headers",
        check: grid_cells_have_headers,
    },
    Rule {
        id: "3.4",
        category: Category::Tables,
        description: "Tables have captions",
        check: tables_have_captions,
    },
];

fn tables_have_headers(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["table"], |table| {
        !table_cells(dom, table, "th").is_empty()
    }))
}

fn headers_have_scope(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["th"], |th| {
        dom.get_attr(th, "scope").is_some_and(|s| !is_blank(s))
    }))
}

fn grid_cells_have_headers(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["table"], |table| {
        !has_role(dom, table, "grid")
            || table_cells(dom, table, "td")
                .into_iter()
                .all(|td| dom.has_attr(td, "headers"))
    }))
}

fn tables_have_captions(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["table"], |table| {
        !table_cells(dom, table, "caption").is_empty()
    }))
}
