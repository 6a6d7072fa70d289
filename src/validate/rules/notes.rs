//! Category 9: notes and annotations.

use crate::dom::ArenaDom;
use crate::util::is_blank;

use super::{Category, Rule, RuleFault, every, has_role};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "9.1",
        category: Category::Notes,
        description: "Footnotes properly linked",
        check: noterefs_resolve,
    },
    Rule {
        id: "9.2",
        category: Category::Notes,
        description: "Footnotes properly structured",
        check: footnotes_have_ids,
    },
];

fn noterefs_resolve(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["a"], |a| {
        !has_role(dom, a, "doc-noteref")
            || dom
                .get_attr(a, "href")
                .and_then(|href| href.strip_prefix('#'))
                .filter(|target| !target.is_empty())
                .is_some_and(|target| dom.get_by_id(target).is_some())
    }))
}

fn footnotes_have_ids(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(dom
        .elements_with_attr("role")
        .into_iter()
        .filter(|&id| has_role(dom, id, "doc-footnote"))
        .all(|note| dom.get_attr(note, "id").is_some_and(|id| !is_blank(id))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn run(check: fn(&ArenaDom) -> Result<bool, RuleFault>, html: &str) -> bool {
        check(&parse_html(html).unwrap()).unwrap()
    }

    #[test]
    fn test_noterefs() {
        let linked = r##"<a role="doc-noteref" href="#fn1">1</a><aside id="fn1" role="doc-footnote">Note</aside>"##;
        let dangling = r##"<a role="doc-noteref" href="#fn2">2</a>"##;
        let external = r#"<a role="doc-noteref" href="notes.html">3</a>"#;

        assert!(run(noterefs_resolve, linked));
        assert!(!run(noterefs_resolve, dangling));
        assert!(!run(noterefs_resolve, external));
    }

    #[test]
    fn test_footnote_ids() {
        assert!(run(footnotes_have_ids, r#"<aside id="n" role="doc-footnote">x</aside>"#));
        assert!(!run(footnotes_have_ids, r#"<aside role="doc-footnote">x</aside>"#));
    }
}
