//! Category 5: links and navigation.

use crate::dom::ArenaDom;
use crate::dom::predicates::has_accessible_label;
use crate::util::collapse_whitespace;

use super::{Category, Rule, RuleFault, every, exists, has_role};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "5.1",
        category: Category::Navigation,
        description: "Links have descriptive text",
        check: links_descriptive,
    },
    Rule {
        id: "5.2",
        category: Category::Navigation,
        description: "Navigation landmarks present",
        check: navigation_present,
    },
    Rule {
        id: "5.3",
        category: Category::Navigation,
        description: "Skip navigation mechanism",
        check: skip_link_present,
    },
    Rule {
        id: "5.4",
        category: Category::Navigation,
        description: "Navigation landmarks labelled",
        check: navigation_labelled,
    },
];

/// Link texts that say nothing about the destination.
const NON_DESCRIPTIVE: &[&str] = &["click here", "here", "more"];

fn links_descriptive(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["a"], |a| {
        let text = collapse_whitespace(&dom.deep_text(a)).to_lowercase();
        !text.is_empty() && !NON_DESCRIPTIVE.contains(&text.as_str())
    }))
}

fn navigation_present(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(exists(dom, "nav")
        || dom
            .elements_with_attr("role")
            .into_iter()
            .any(|id| has_role(dom, id, "navigation")))
}

fn skip_link_present(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(dom.elements_by_tag("a").into_iter().any(|a| {
        dom.get_attr(a, "href")
            .is_some_and(|href| href.starts_with("#main") || href.starts_with("#content"))
    }))
}

fn navigation_labelled(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["nav"], |nav| has_accessible_label(dom, nav)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn run(check: fn(&ArenaDom) -> Result<bool, RuleFault>, html: &str) -> bool {
        check(&parse_html(html).unwrap()).unwrap()
    }

    #[test]
    fn test_descriptive_links() {
        assert!(run(links_descriptive, r#"<a href="/r">Annual report</a>"#));
        assert!(!run(links_descriptive, r#"<a href="/r">Click  HERE</a>"#));
        assert!(!run(links_descriptive, r#"<a href="/r">more</a>"#));
        assert!(!run(links_descriptive, r#"<a href="/r"><img src="x.png" alt="x"></a>"#));
    }

    #[test]
    fn test_navigation_present() {
        assert!(run(navigation_present, "<nav>x</nav>"));
        assert!(run(navigation_present, r#"<div role="navigation">x</div>"#));
        assert!(!run(navigation_present, "<div>x</div>"));
    }

    #[test]
    fn test_skip_link() {
        assert!(run(skip_link_present, r##"<a href="#main-content">Skip</a>"##));
        assert!(run(skip_link_present, r##"<a href="#content">Skip</a>"##));
        assert!(!run(skip_link_present, r##"<a href="/main">Main</a>"##));
    }

    #[test]
    fn test_navigation_labelled() {
        assert!(run(navigation_labelled, r#"<nav aria-label="Primary">x</nav>"#));
        assert!(!run(navigation_labelled, "<nav>x</nav>"));
    }
}
