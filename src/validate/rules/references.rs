//! Category 10: references and citations.

use crate::dom::ArenaDom;
use crate::util::is_blank;

use super::{Category, Rule, RuleFault, every};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "10.1",
        category: Category::References,
        description: "Citations properly marked",
        check: citations_have_text,
    },
    Rule {
        id: "10.2",
        category: Category::References,
        description: "Quotes properly marked",
        check: quotes_have_text,
    },
];

fn citations_have_text(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["cite"], |cite| !is_blank(&dom.deep_text(cite))))
}

fn quotes_have_text(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["blockquote", "q"], |quote| {
        !is_blank(&dom.deep_text(quote))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn run(check: fn(&ArenaDom) -> Result<bool, RuleFault>, html: &str) -> bool {
        check(&parse_html(html).unwrap()).unwrap()
    }

    #[test]
    fn test_citations() {
        assert!(run(citations_have_text, "<p><cite>Moby-Dick</cite></p>"));
        assert!(!run(citations_have_text, "<p><cite> </cite></p>"));
    }

    #[test]
    fn test_quotes() {
        assert!(run(quotes_have_text, "<blockquote><p>Call me Ishmael.</p></blockquote>"));
        assert!(!run(quotes_have_text, "<p><q></q></p>"));
    }
}
