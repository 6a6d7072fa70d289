//! Document node model and HTML front-end.
//!
//! Markup is parsed with html5ever into an [`ArenaDom`], an index-addressed
//! tree that the validator reads and the remediation passes edit in place.
//!
//! # Example
//!
//! ```
//! use tagwright::dom::parse_html;
//!
//! let dom = parse_html("<p>Hello, World!</p>").unwrap();
//! let p = dom.find_by_tag("p").unwrap();
//! assert_eq!(dom.deep_text(p), "Hello, World!");
//! ```

mod arena;
pub mod predicates;
mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter, Descendants};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::error::{Error, Result};
use crate::util::{decode_text, extract_meta_charset, extract_xml_encoding, is_blank};
use tree_sink::DocumentBuilder;

/// Parse HTML markup into a document tree.
///
/// Parsing is permissive: malformed markup is recovered the way browsers do,
/// so missing `html`/`head`/`body` containers are synthesized. Only empty or
/// whitespace-only input is rejected.
pub fn parse_html(html: &str) -> Result<ArenaDom> {
    if is_blank(html) {
        return Err(Error::InvalidInput("markup is empty".into()));
    }

    let builder = parse_document(DocumentBuilder::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    Ok(builder.into_dom())
}

/// Parse HTML from raw bytes, detecting the character encoding.
///
/// UTF-8 is assumed; otherwise the encoding declared by an XML declaration or
/// a `meta charset` is used, with Windows-1252 as the last resort.
pub fn parse_html_bytes(bytes: &[u8]) -> Result<ArenaDom> {
    let hint = extract_xml_encoding(bytes).or_else(|| extract_meta_charset(bytes));
    let text = decode_text(bytes, hint);
    parse_html(&text)
}
