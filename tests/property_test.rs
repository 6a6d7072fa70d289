//! Property tests over randomly assembled documents.

use proptest::prelude::*;

use tagwright::dom::predicates::{headings, headings_in_order};
use tagwright::validate::{Rule, registry, validate_with};
use tagwright::{
    ArenaDom, Role, map_to_structure, parse_html, remediate, remediate_in_place, validate,
};

/// Markup fragments covering every defect class the remediation passes target,
/// plus unbalanced tags to exercise the parser's recovery.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<h1>Title</h1>".to_string()),
        Just("<h2>Part</h2>".to_string()),
        Just("<h4>Deep</h4>".to_string()),
        Just("<h6>Deepest</h6>".to_string()),
        Just("<p>Paragraph</p>".to_string()),
        Just("<img src='photos/team_photo.jpg'>".to_string()),
        Just("<img src='data:image/png;base64,AA'>".to_string()),
        Just("<img role='presentation'>".to_string()),
        Just("<table><tr><td>A</td><td>B</td></tr></table>".to_string()),
        Just("<table aria-label='Totals'><tr><th>H</th></tr></table>".to_string()),
        Just("<table><tr><td><table><tr><td>x</td></tr></table></td></tr></table>".to_string()),
        Just("<ul><li>a</li><p>b</p></ul>".to_string()),
        Just("<ol><ul><li>nested</li></ul></ol>".to_string()),
        Just("<nav><a href='#main'>Skip</a></nav>".to_string()),
        Just("<form><input id='q'></form>".to_string()),
        Just("<title></title>".to_string()),
        Just("<section>".to_string()),
        Just("</section>".to_string()),
        Just("<div><span>inline</span> text<br>more</div>".to_string()),
        Just("<unknown-tag>custom</unknown-tag>".to_string()),
        "[a-z ]{0,12}",
    ]
}

fn document() -> impl Strategy<Value = ArenaDom> {
    prop::collection::vec(fragment(), 0..16).prop_map(|parts| {
        let html = format!("<p>start</p>{}", parts.concat());
        parse_html(&html).expect("non-blank input parses")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn remediation_is_idempotent(dom in document()) {
        let once = remediate(dom);
        let mut twice = once.clone();

        let report = remediate_in_place(&mut twice);

        prop_assert!(report.is_noop(), "second run applied {:?}", report.outcomes);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn headings_never_skip_after_remediation(dom in document()) {
        let fixed = remediate(dom);
        let levels = headings(&fixed).into_iter().map(|(_, level)| level);

        prop_assert!(headings_in_order(levels));
        prop_assert!(validate(&fixed).unwrap().get("1.3").unwrap().passed());
    }

    #[test]
    fn mapper_is_total(dom in document()) {
        let tree = map_to_structure(&dom);

        prop_assert_eq!(tree.role, Role::Document);
        prop_assert_eq!(tree.iter().count(), tree.node_count());
        for list in tree.iter().filter(|n| n.role == Role::List) {
            prop_assert!(list.children.iter().all(|item| item.role == Role::ListItem));
        }
    }

    #[test]
    fn rule_order_does_not_change_failures(
        dom in document(),
        order in Just((0..registry().len()).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let rules: Vec<&Rule> = registry().iter().collect();
        let shuffled: Vec<&Rule> = order.iter().map(|&i| rules[i]).collect();

        let forward = validate_with(&dom, &rules).unwrap();
        let permuted = validate_with(&dom, &shuffled).unwrap();

        prop_assert_eq!(forward.failed_ids(), permuted.failed_ids());
    }
}
