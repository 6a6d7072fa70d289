//! Pass 6: document metadata.

use tracing::{debug, warn};

use crate::dom::predicates::{has_charset_meta, has_named_meta};
use crate::dom::{ArenaDom, Attribute};
use crate::util::is_blank;

use super::RemediationConfig;

/// Add missing metadata to the document head.
///
/// Description, keywords and author `meta` elements are appended, a
/// `meta charset` is inserted as the first head child, and the title is
/// created or filled in when blank. Existing declarations are kept as they
/// are, wherever they sit. A blank title placeholder leaves the title alone.
pub fn repair_metadata(dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
    let Some(head) = dom.head() else {
        warn!("document has no <head>; skipping metadata pass");
        return 0;
    };
    let mut fixes = 0;

    for (name, content) in [
        ("description", &config.description),
        ("keywords", &config.keywords),
        ("author", &config.author),
    ] {
        if !has_named_meta(dom, name) {
            let meta = dom.create_html_element(
                "meta",
                vec![Attribute::new("name", name), Attribute::new("content", content.as_str())],
            );
            dom.append(head, meta);
            fixes += 1;
        }
    }

    if !has_charset_meta(dom) {
        let meta = dom.create_html_element("meta", vec![Attribute::new("charset", config.charset.as_str())]);
        dom.prepend(head, meta);
        fixes += 1;
    }

    if is_blank(&config.title) {
        debug!("blank title placeholder; leaving title as is");
        return fixes;
    }
    match dom.find_by_tag("title") {
        None => {
            let title = dom.create_text_element("title", vec![], &config.title);
            dom.append(head, title);
            fixes += 1;
        }
        Some(title) if is_blank(&dom.deep_text(title)) => {
            dom.set_text(title, &config.title);
            fixes += 1;
        }
        Some(_) => {}
    }

    fixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_fills_empty_head() {
        let mut dom = parse_html("<p>x</p>").unwrap();

        assert_eq!(repair_metadata(&mut dom, &RemediationConfig::default()), 5);

        let head = dom.head().unwrap();
        let first = dom.element_children(head).next().unwrap();
        assert_eq!(dom.get_attr(first, "charset"), Some("UTF-8"));
        assert!(has_named_meta(&dom, "description"));
        assert!(has_named_meta(&dom, "keywords"));
        assert!(has_named_meta(&dom, "author"));
        assert_eq!(dom.deep_text(dom.find_by_tag("title").unwrap()), "Document");

        assert_eq!(repair_metadata(&mut dom, &RemediationConfig::default()), 0);
    }

    #[test]
    fn test_keeps_existing_metadata() {
        let mut dom = parse_html(
            r#"<head><title>Report</title><meta name="author" content="Ada"></head><p>x</p>"#,
        )
        .unwrap();

        assert_eq!(repair_metadata(&mut dom, &RemediationConfig::default()), 3);

        let authors: Vec<_> = dom
            .elements_by_tag("meta")
            .into_iter()
            .filter(|&m| dom.get_attr(m, "name") == Some("author"))
            .collect();
        assert_eq!(authors.len(), 1);
        assert_eq!(dom.get_attr(authors[0], "content"), Some("Ada"));
        assert_eq!(dom.deep_text(dom.find_by_tag("title").unwrap()), "Report");
    }

    #[test]
    fn test_blank_title_filled() {
        let mut dom = parse_html("<head><title>  </title></head><p>x</p>").unwrap();
        let config = RemediationConfig::default().with_title("Untitled");

        repair_metadata(&mut dom, &config);
        assert_eq!(dom.elements_by_tag("title").len(), 1);
        assert_eq!(dom.deep_text(dom.find_by_tag("title").unwrap()), "Untitled");
    }

    #[test]
    fn test_no_head_is_skipped() {
        let mut dom = ArenaDom::new();
        let html = dom.create_html_element("html", vec![]);
        dom.append(dom.document(), html);

        assert_eq!(repair_metadata(&mut dom, &RemediationConfig::default()), 0);
    }

    #[test]
    fn test_svg_title_is_not_document_title() {
        let mut dom =
            parse_html("<html lang=en><head></head><body><svg><title>Icon</title></svg><p>x</p></body></html>")
                .unwrap();
        let head = dom.head().unwrap();

        repair_metadata(&mut dom, &RemediationConfig::default());

        let titles: Vec<_> = dom.element_children(head).filter(|&c| dom.has_tag(c, "title")).collect();
        assert_eq!(titles.len(), 1);
        assert_eq!(dom.deep_text(titles[0]), "Document");
        let svg = dom.elements_by_name(&html5ever::ns!(svg), "title");
        assert_eq!(dom.deep_text(svg[0]), "Icon");
    }

    #[test]
    fn test_blank_title_placeholder_is_stable() {
        let config = RemediationConfig::default().with_title("");
        let mut dom = parse_html("<p>x</p>").unwrap();

        assert_eq!(repair_metadata(&mut dom, &config), 4);
        assert!(dom.find_by_tag("title").is_none());

        let before = dom.clone();
        assert_eq!(repair_metadata(&mut dom, &config), 0);
        assert_eq!(dom, before);
    }
}
