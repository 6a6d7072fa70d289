//! Passes 1 and 2: document skeleton and main content container.

use tracing::warn;

use crate::dom::{ArenaDom, ArenaNodeData};

/// Synthesize missing `html`, `head` and `body` containers.
///
/// A container counts as present wherever it sits in the tree. Existing
/// content keeps its order: a new `html` adopts every top-level node except
/// the doctype, and a new `body` adopts every child of `html` that is not a
/// `head` or `body`.
pub fn ensure_skeleton(dom: &mut ArenaDom) -> usize {
    let mut fixes = 0;

    let html = match dom.find_by_tag("html") {
        Some(html) => html,
        None => {
            let doc = dom.document();
            let content: Vec<_> = dom
                .children(doc)
                .filter(|&c| {
                    !matches!(
                        dom.get(c).map(|n| &n.data),
                        Some(ArenaNodeData::Doctype { .. })
                    )
                })
                .collect();

            let html = dom.create_html_element("html", vec![]);
            dom.append(doc, html);
            for child in content {
                dom.detach(child);
                dom.append(html, child);
            }
            fixes += 1;
            html
        }
    };

    if dom.head().is_none() {
        let head = dom.create_html_element("head", vec![]);
        dom.prepend(html, head);
        fixes += 1;
    }

    if dom.body().is_none() {
        let content: Vec<_> = dom
            .children(html)
            .filter(|&c| !dom.has_tag(c, "head"))
            .collect();

        let body = dom.create_html_element("body", vec![]);
        for child in content {
            dom.detach(child);
            dom.append(body, child);
        }
        dom.append(html, body);
        fixes += 1;
    }

    fixes
}

/// Wrap the body's content in a `main` element when the document has none.
pub fn ensure_main(dom: &mut ArenaDom) -> usize {
    if dom.find_by_tag("main").is_some() {
        return 0;
    }
    let Some(body) = dom.body() else {
        warn!("document has no <body>; skipping main content pass");
        return 0;
    };

    let main = dom.create_html_element("main", vec![]);
    dom.reparent_children(body, main);
    dom.append(body, main);
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn tags(dom: &ArenaDom, parent: crate::dom::ArenaNodeId) -> Vec<String> {
        dom.element_children(parent)
            .map(|c| dom.element_name(c).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_builds_skeleton_around_bare_content() {
        let mut dom = ArenaDom::new();
        let h1 = dom.create_text_element("h1", vec![], "T");
        let p = dom.create_text_element("p", vec![], "x");
        dom.append(dom.document(), h1);
        dom.append(dom.document(), p);

        assert_eq!(ensure_skeleton(&mut dom), 3);

        let html = dom.document_element().unwrap();
        assert!(dom.has_tag(html, "html"));
        assert_eq!(tags(&dom, html), vec!["head", "body"]);
        assert_eq!(tags(&dom, dom.body().unwrap()), vec!["h1", "p"]);
    }

    #[test]
    fn test_adds_only_missing_containers() {
        let mut dom = ArenaDom::new();
        let html = dom.create_html_element("html", vec![]);
        dom.append(dom.document(), html);
        let body = dom.create_html_element("body", vec![]);
        dom.append(html, body);

        assert_eq!(ensure_skeleton(&mut dom), 1);
        assert_eq!(tags(&dom, html), vec!["head", "body"]);
    }

    #[test]
    fn test_parsed_documents_already_complete() {
        let mut dom = parse_html("<p>x</p>").unwrap();
        assert_eq!(ensure_skeleton(&mut dom), 0);
    }

    #[test]
    fn test_wraps_body_in_main() {
        let mut dom = parse_html("<nav>n</nav><p>x</p>").unwrap();

        assert_eq!(ensure_main(&mut dom), 1);
        let body = dom.body().unwrap();
        assert_eq!(tags(&dom, body), vec!["main"]);
        let main = dom.find_by_tag("main").unwrap();
        assert_eq!(tags(&dom, main), vec!["nav", "p"]);

        assert_eq!(ensure_main(&mut dom), 0);
    }

    #[test]
    fn test_existing_main_left_alone() {
        let mut dom = parse_html("<header>h</header><main><p>x</p></main>").unwrap();
        let before = dom.clone();

        assert_eq!(ensure_main(&mut dom), 0);
        assert_eq!(dom, before);
    }
}
