//! XHTML writer for the arena tree.
//!
//! Produces well-formed XML: void elements self-close, text and attribute
//! values are escaped, and the root of each namespace gets an `xmlns`
//! declaration. Prefixed attributes such as `xlink:href` get an
//! `xmlns:prefix` declaration on the first element that needs it.
//! Comments are dropped.

use std::fmt::Write;

use quick_xml::escape::escape;

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// Prefixes bound by XML itself; never declared.
const RESERVED_PREFIXES: &[&str] = &["xml", "xmlns"];

/// HTML elements that never have content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl ArenaDom {
    /// Serialize the whole document as XHTML.
    pub fn to_xhtml(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.document()) {
            self.write_node(child, "", &[], &mut out);
        }
        out
    }

    /// Serialize one subtree as XHTML.
    pub fn subtree_to_xhtml(&self, id: ArenaNodeId) -> String {
        let mut out = String::new();
        self.write_node(id, "", &[], &mut out);
        out
    }

    /// `prefixes` holds the `(prefix, namespace)` bindings declared by ancestors.
    fn write_node<'a>(
        &'a self,
        id: ArenaNodeId,
        parent_ns: &str,
        prefixes: &[(&'a str, &'a str)],
        out: &mut String,
    ) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.data {
            ArenaNodeData::Document => {
                for child in self.children(id) {
                    self.write_node(child, parent_ns, prefixes, out);
                }
            }
            ArenaNodeData::Doctype { name, .. } => {
                let _ = writeln!(out, "<!DOCTYPE {}>", if name.is_empty() { "html" } else { name });
            }
            ArenaNodeData::Comment(_) => {}
            ArenaNodeData::Text(text) => out.push_str(&escape(text.as_str())),
            ArenaNodeData::Element { name, attrs } => {
                let tag = name.local.as_ref();
                let ns: &str = &name.ns;

                out.push('<');
                out.push_str(tag);

                if !ns.is_empty() && ns != parent_ns && !attrs.iter().any(|a| a.name.local.as_ref() == "xmlns") {
                    let _ = write!(out, " xmlns=\"{}\"", escape(ns));
                }

                let mut scope = prefixes.to_vec();
                for attr in attrs {
                    if attr.name.prefix.as_deref() == Some("xmlns") {
                        scope.push((attr.name.local.as_ref(), attr.value.as_str()));
                    }
                }
                for attr in attrs {
                    let Some(prefix) = attr.name.prefix.as_deref() else {
                        continue;
                    };
                    let attr_ns: &str = &attr.name.ns;
                    if RESERVED_PREFIXES.contains(&prefix) || scope.iter().any(|&b| b == (prefix, attr_ns)) {
                        continue;
                    }
                    let _ = write!(out, " xmlns:{}=\"{}\"", prefix, escape(attr_ns));
                    scope.push((prefix, attr_ns));
                }

                for attr in attrs {
                    out.push(' ');
                    if let Some(prefix) = &attr.name.prefix {
                        out.push_str(prefix);
                        out.push(':');
                    }
                    out.push_str(&attr.name.local);
                    let _ = write!(out, "=\"{}\"", escape(attr.value.as_str()));
                }

                if VOID_ELEMENTS.contains(&tag) && node.first_child.is_none() {
                    out.push_str("/>");
                    return;
                }

                out.push('>');
                for child in self.children(id) {
                    self.write_node(child, ns, &scope, out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quick_xml::events::Event;
    use quick_xml::name::ResolveResult;
    use quick_xml::{NsReader, Reader};

    use crate::dom::parse_html;

    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("not well-formed: {e}\n{xml}"),
            }
        }
    }

    #[test]
    fn test_void_elements_self_close() {
        let dom = parse_html(r#"<p>a<br>b<img src="x.png" alt=""></p>"#).unwrap();
        let xhtml = dom.to_xhtml();

        assert!(xhtml.contains("a<br/>b"));
        assert!(xhtml.contains(r#"<img src="x.png" alt=""/>"#));
        assert_well_formed(&xhtml);
    }

    #[test]
    fn test_root_gets_namespace() {
        let dom = parse_html("<!DOCTYPE html><html lang=\"en\"><body></body></html>").unwrap();
        let xhtml = dom.to_xhtml();

        assert!(xhtml.starts_with("<!DOCTYPE html>\n"));
        assert!(xhtml.contains(r#"<html xmlns="http://www.w3.org/1999/xhtml" lang="en">"#));
        // Children share the namespace, so no repeat declarations
        assert_eq!(xhtml.matches("xmlns=").count(), 1);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let dom = parse_html(r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#).unwrap();
        let xhtml = dom.to_xhtml();

        assert!(xhtml.contains("1 &lt; 2 &amp; 3"));
        assert!(xhtml.contains("title=\"a &quot;b&quot;\""));
        assert_well_formed(&xhtml);
    }

    #[test]
    fn test_comments_dropped() {
        let dom = parse_html("<p>x<!-- hidden --></p>").unwrap();
        assert!(!dom.to_xhtml().contains("hidden"));
    }

    #[test]
    fn test_math_gets_own_namespace() {
        let dom = parse_html(r#"<p><math alttext="x"><mi>x</mi></math></p>"#).unwrap();
        let xhtml = dom.to_xhtml();

        assert!(xhtml.contains(r#"<math xmlns="http://www.w3.org/1998/Math/MathML" alttext="x">"#));
        assert_well_formed(&xhtml);
    }

    #[test]
    fn test_xlink_prefix_declared_once() {
        let dom = parse_html(r##"<svg><a xlink:href="#x"><text xlink:title="t">t</text></a></svg>"##).unwrap();
        let xhtml = dom.to_xhtml();

        assert!(xhtml.contains(r##"<a xmlns:xlink="http://www.w3.org/1999/xlink" xlink:href="#x">"##));
        assert_eq!(xhtml.matches("xmlns:xlink=").count(), 1);
        assert_well_formed(&xhtml);

        let mut reader = NsReader::from_str(&xhtml);
        let mut checked = 0;
        loop {
            match reader.read_event().unwrap() {
                Event::Eof => break,
                Event::Start(e) if e.local_name().as_ref() == b"text" => {
                    let attr = e.attributes().next().unwrap().unwrap();
                    let (resolved, local) = reader.resolve_attribute(attr.key);
                    assert_eq!(local.as_ref(), b"title");
                    assert!(matches!(resolved, ResolveResult::Bound(ns) if ns.0 == b"http://www.w3.org/1999/xlink"));
                    checked += 1;
                }
                _ => {}
            }
        }
        assert_eq!(checked, 1);
    }

    #[test]
    fn test_explicit_prefix_declaration_kept() {
        let dom = parse_html(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#i"/></svg>"##,
        )
        .unwrap();
        let xhtml = dom.to_xhtml();

        assert_eq!(xhtml.matches("xmlns:xlink=").count(), 1);
        assert_well_formed(&xhtml);
    }
}
