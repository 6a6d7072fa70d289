//! Pass 3: alternative text for images.

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::dom::ArenaDom;
use crate::dom::predicates::{is_decorative_image, needs_alt_text};
use crate::util::{collapse_whitespace, is_blank};

use super::RemediationConfig;

/// Give every image that needs alternative text a description.
///
/// Decorative images get an empty `alt`. Others get a description derived
/// from the file name in `src`, or the configured fallback. Non-blank
/// alternative text is never touched, and an image left with nothing but a
/// blank fallback is skipped.
pub fn fix_alt_text(dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
    let images: Vec<_> = dom
        .elements_by_tag("img")
        .into_iter()
        .filter(|&img| needs_alt_text(dom, img))
        .collect();

    let mut fixes = 0;
    for img in images {
        let alt = if is_decorative_image(dom, img) {
            String::new()
        } else {
            let alt = dom
                .get_attr(img, "src")
                .and_then(describe_source)
                .unwrap_or_else(|| config.fallback_alt.clone());
            if is_blank(&alt) {
                debug!("no usable alternative text for image; leaving it unchanged");
                continue;
            }
            alt
        };
        dom.set_attr(img, "alt", &alt);
        fixes += 1;
    }

    fixes
}

/// Derive a readable description from an image URL.
///
/// `images/team_photo.jpg?v=2` becomes `team photo`: the query and fragment
/// are dropped, the last path segment is percent-decoded, its extension is
/// stripped and separators become spaces.
pub fn describe_source(src: &str) -> Option<String> {
    if src.trim_start().starts_with("data:") {
        return None;
    }

    let path = src.split(['?', '#']).next().unwrap_or(src);
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let decoded = percent_decode_str(file).decode_utf8_lossy();

    let stem = match decoded.rfind('.') {
        Some(dot) if dot > 0 => &decoded[..dot],
        _ => &decoded[..],
    };
    let spaced: String = stem
        .chars()
        .map(|c| if matches!(c, '_' | '-' | '.') { ' ' } else { c })
        .collect();

    let description = collapse_whitespace(&spaced);
    (!description.is_empty()).then_some(description)
}
