//! Pass 7: heading level gaps.

use crate::dom::ArenaDom;
use crate::dom::predicates::headings;

use super::RemediationConfig;

/// Insert synthetic headings so levels never skip going deeper.
///
/// Headings are walked in document order starting from level 0. Before a
/// heading whose level exceeds the previous one by more than one, a heading
/// for each missing level is inserted as a preceding sibling.
pub fn fill_heading_gaps(dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
    let mut previous = 0u8;
    let mut inserted = 0;

    for (heading, level) in headings(dom) {
        for missing in (previous + 1)..level {
            let text = format!("{} {}", config.heading_prefix, missing);
            let synthetic =
                dom.create_text_element(&format!("h{missing}"), vec![], text.trim());
            dom.insert_before(heading, synthetic);
            inserted += 1;
        }
        previous = level;
    }

    inserted
}
