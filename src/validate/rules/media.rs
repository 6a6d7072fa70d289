//! Category 11: multimedia.

use crate::dom::ArenaDom;

use super::{Category, Rule, RuleFault, every};

pub(super) const RULES: &[Rule] = &[
    Rule {
        id: "11.1",
        category: Category::Media,
        description: "Audio descriptions available",
        check: videos_described,
    },
    Rule {
        id: "11.2",
        category: Category::Media,
        description: "Captions available",
        check: videos_captioned,
    },
];

fn videos_described(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["video"], |video| dom.has_attr(video, "aria-describedby")))
}

fn videos_captioned(dom: &ArenaDom) -> Result<bool, RuleFault> {
    Ok(every(dom, &["video"], |video| {
        dom.descendants(video)
            .any(|id| dom.has_tag(id, "track") && dom.get_attr(id, "kind") == Some("captions"))
    }))
}
