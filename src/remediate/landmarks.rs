//! Pass 4: accessible labels for landmarks.

use crate::dom::ArenaDom;
use crate::dom::predicates::has_accessible_label;
use crate::util::is_blank;

use super::RemediationConfig;

/// Label every `nav` and `form` that has no accessible label.
///
/// A blank placeholder disables labelling for that element kind.
pub fn label_landmarks(dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
    let mut fixes = 0;
    for (tag, label) in [
        ("nav", &config.navigation_label),
        ("form", &config.form_label),
    ] {
        if is_blank(label) {
            continue;
        }
        for landmark in dom.elements_by_tag(tag) {
            if !has_accessible_label(dom, landmark) {
                dom.set_attr(landmark, "aria-label", label);
                fixes += 1;
            }
        }
    }
    fixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_labels_unlabelled_landmarks() {
        let mut dom = parse_html(
            r#"<nav id="a">x</nav><nav id="b" aria-labelledby="h">y</nav><form id="f"></form>"#,
        )
        .unwrap();

        assert_eq!(label_landmarks(&mut dom, &RemediationConfig::default()), 2);
        assert_eq!(dom.get_attr(dom.get_by_id("a").unwrap(), "aria-label"), Some("Main navigation"));
        assert_eq!(dom.get_attr(dom.get_by_id("b").unwrap(), "aria-label"), None);
        assert_eq!(dom.get_attr(dom.get_by_id("f").unwrap(), "aria-label"), Some("Form"));

        assert_eq!(label_landmarks(&mut dom, &RemediationConfig::default()), 0);
    }

    #[test]
    fn test_blank_label_replaced() {
        let mut dom = parse_html(r#"<nav aria-label=" ">x</nav>"#).unwrap();
        let config = RemediationConfig::default().with_navigation_label("Site");

        assert_eq!(label_landmarks(&mut dom, &config), 1);
        let nav = dom.find_by_tag("nav").unwrap();
        assert_eq!(dom.get_attr(nav, "aria-label"), Some("Site"));
    }

    #[test]
    fn test_blank_placeholder_skips_landmark() {
        let mut dom = parse_html("<nav>x</nav><form></form>").unwrap();
        let config = RemediationConfig::default().with_navigation_label("");

        assert_eq!(label_landmarks(&mut dom, &config), 1);
        let nav = dom.find_by_tag("nav").unwrap();
        assert!(!dom.has_attr(nav, "aria-label"));
        assert_eq!(label_landmarks(&mut dom, &config), 0);
    }
}
