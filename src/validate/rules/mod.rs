//! Rule registry.
//!
//! Every rule is a plain descriptor: a stable `category.index` identifier, a
//! description, and a predicate over the document tree. Categories only group
//! results for reporting; rules never consult one another, so the order they
//! run in cannot change any outcome.

mod document;
mod forms;
mod lists;
mod math;
mod media;
mod metadata;
mod navigation;
mod non_text;
mod notes;
mod references;
mod semantics;
mod tables;

use std::sync::LazyLock;

use thiserror::Error;

use crate::dom::{ArenaDom, ArenaNodeId};

/// Rule category, identified by the numeric prefix of a rule id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum Category {
    DocumentStructure,
    Semantics,
    Tables,
    NonTextContent,
    Navigation,
    Forms,
    Metadata,
    Lists,
    Notes,
    References,
    Media,
    Math,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::DocumentStructure,
        Category::Semantics,
        Category::Tables,
        Category::NonTextContent,
        Category::Navigation,
        Category::Forms,
        Category::Metadata,
        Category::Lists,
        Category::Notes,
        Category::References,
        Category::Media,
        Category::Math,
    ];

    /// Numeric prefix used in rule ids.
    pub fn number(self) -> u8 {
        match self {
            Category::DocumentStructure => 1,
            Category::Semantics => 2,
            Category::Tables => 3,
            Category::NonTextContent => 4,
            Category::Navigation => 5,
            Category::Forms => 6,
            Category::Metadata => 7,
            Category::Lists => 8,
            Category::Notes => 9,
            Category::References => 10,
            Category::Media => 11,
            Category::Math => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::DocumentStructure => "Document structure",
            Category::Semantics => "Semantics and roles",
            Category::Tables => "Tables",
            Category::NonTextContent => "Non-text content",
            Category::Navigation => "Links and navigation",
            Category::Forms => "Forms",
            Category::Metadata => "Metadata",
            Category::Lists => "Lists",
            Category::Notes => "Notes and annotations",
            Category::References => "References and citations",
            Category::Media => "Multimedia",
            Category::Math => "Math",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

/// A rule whose predicate could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleFault {
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),

    #[error("{0}")]
    Unevaluable(String),

    #[error("rule panicked: {0}")]
    Panicked(String),
}

/// Predicate signature shared by every rule.
pub type Check = fn(&ArenaDom) -> Result<bool, RuleFault>;

/// A conformance rule descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub check: Check,
}

static REGISTRY: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        document::RULES,
        semantics::RULES,
        tables::RULES,
        non_text::RULES,
        navigation::RULES,
        forms::RULES,
        metadata::RULES,
        lists::RULES,
        notes::RULES,
        references::RULES,
        media::RULES,
        math::RULES,
    ]
    .concat()
});

/// All registered rules, in id order.
pub fn registry() -> &'static [Rule] {
    &REGISTRY
}

/// Look up a rule by id.
pub fn find_rule(id: &str) -> Option<&'static Rule> {
    registry().iter().find(|r| r.id == id)
}

// ----------------------------------------------------------------------------
// Helpers shared by rule modules
// ----------------------------------------------------------------------------

/// Elements whose tag is one of `tags`, in document order.
fn elements<'a>(dom: &'a ArenaDom, tags: &'a [&'a str]) -> impl Iterator<Item = ArenaNodeId> + 'a {
    dom.descendants(dom.document())
        .filter(move |&id| tags.iter().any(|t| dom.has_tag(id, t)))
}

/// Check a predicate over every element with one of the given tags.
fn every(dom: &ArenaDom, tags: &[&str], pred: impl Fn(ArenaNodeId) -> bool) -> bool {
    elements(dom, tags).all(pred)
}

fn exists(dom: &ArenaDom, tag: &str) -> bool {
    dom.find_by_tag(tag).is_some()
}

/// Check whether an element's `role` attribute lists the given role.
fn has_role(dom: &ArenaDom, id: ArenaNodeId, role: &str) -> bool {
    dom.get_attr(id, "role")
        .is_some_and(|value| value.split_whitespace().any(|r| r == role))
}

fn require_head(dom: &ArenaDom) -> Result<ArenaNodeId, RuleFault> {
    dom.head().ok_or(RuleFault::MissingElement("head"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_unique_and_prefixed_by_category() {
        let mut seen = HashSet::new();
        for rule in registry() {
            assert!(seen.insert(rule.id), "duplicate rule id {}", rule.id);
            let prefix = rule.id.split('.').next().unwrap();
            assert_eq!(prefix, rule.category.number().to_string(), "rule {}", rule.id);
        }
    }

    #[test]
    fn test_every_category_has_rules() {
        for category in Category::ALL {
            assert!(
                registry().iter().any(|r| r.category == category),
                "no rules in {category}"
            );
        }
    }

    #[test]
    fn test_find_rule() {
        let rule = find_rule("3.1").unwrap();
        assert_eq!(rule.description, "Tables have headers");
        assert!(find_rule("99.1").is_none());
    }

    #[test]
    fn test_has_role_matches_token_lists() {
        let dom = crate::dom::parse_html(r#"<div id="d" role="region navigation"></div>"#).unwrap();
        let div = dom.get_by_id("d").unwrap();
        assert!(has_role(&dom, div, "navigation"));
        assert!(!has_role(&dom, div, "nav"));
    }
}
