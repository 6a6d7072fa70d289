//! Shared text helpers: input decoding and whitespace normalization.

use std::borrow::Cow;

// ============================================================================
// Input Decoding
// ============================================================================

/// Decode markup bytes to a string.
///
/// UTF-8 is tried first (a BOM is handled by encoding_rs). If the bytes are
/// not valid UTF-8, the declared encoding is used, and Windows-1252 is the
/// last resort since it accepts every byte.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the encoding name from an XML declaration (`<?xml encoding="..."?>`).
///
/// Only the first 100 bytes are inspected.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(100);
    let prefix = &bytes[..check_len];

    let xml_start = prefix.windows(5).position(|w| w == b"<?xml")?;
    let after_xml = &prefix[xml_start..];

    let enc_pos = after_xml
        .windows(9)
        .position(|w| w.eq_ignore_ascii_case(b"encoding="))?;
    quoted_value(&after_xml[enc_pos + 9..])
}

/// Extract the encoding name from a `<meta charset="...">` declaration.
///
/// Browsers only honour the declaration in the first 1024 bytes, so that is
/// all we scan.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(1024);
    let prefix = &bytes[..check_len];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let after = &prefix[pos + 8..];

    match after.first() {
        Some(b'"') | Some(b'\'') => quoted_value(after),
        Some(_) => {
            let end = after
                .iter()
                .position(|&b| matches!(b, b'"' | b'\'' | b'>' | b'/' | b';') || b.is_ascii_whitespace())
                .unwrap_or(after.len());
            std::str::from_utf8(&after[..end]).ok().filter(|s| !s.is_empty())
        }
        None => None,
    }
}

/// Read a `"..."` or `'...'` value at the start of `bytes`.
fn quoted_value(bytes: &[u8]) -> Option<&str> {
    let quote = *bytes.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let value_end = bytes[1..].iter().position(|&b| b == quote)? + 1;
    std::str::from_utf8(&bytes[1..value_end]).ok()
}

// ============================================================================
// Whitespace
// ============================================================================

/// Append `text` to `buf`, collapsing every whitespace run to a single space.
///
/// Leading whitespace is kept as one space so that adjacent inline runs stay
/// separated; [`finish_text`] trims the result once a node is complete.
pub fn push_collapsed(buf: &mut String, text: &str) {
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !buf.is_empty() && !buf.ends_with(' ') {
            buf.push(' ');
        }
        pending_space = false;
        buf.push(c);
    }
    if pending_space && !buf.is_empty() && !buf.ends_with(' ') {
        buf.push(' ');
    }
}

/// Trim trailing/leading whitespace left behind by [`push_collapsed`].
pub fn finish_text(buf: &mut String) {
    let trimmed = buf.trim();
    if trimmed.len() != buf.len() {
        *buf = trimmed.to_string();
    }
}

/// Collapse and trim in one step.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_collapsed(&mut out, text);
    finish_text(&mut out);
    out
}

/// Check whether a string is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_passthrough() {
        let bytes = "Caffè".as_bytes();
        assert_eq!(decode_text(bytes, None), "Caffè");
    }

    #[test]
    fn test_decode_falls_back_to_hint() {
        // "é" in ISO-8859-1 is 0xE9, which is invalid UTF-8 on its own
        let bytes = b"caf\xe9";
        assert_eq!(decode_text(bytes, Some("iso-8859-1")), "café");
        assert_eq!(decode_text(bytes, None), "café");
    }

    #[test]
    fn test_extract_xml_encoding() {
        let bytes = br#"<?xml version="1.0" encoding="windows-1252"?><html/>"#;
        assert_eq!(extract_xml_encoding(bytes), Some("windows-1252"));
        assert_eq!(extract_xml_encoding(b"<html></html>"), None);
    }

    #[test]
    fn test_extract_meta_charset() {
        assert_eq!(
            extract_meta_charset(br#"<head><meta charset="ISO-8859-1"></head>"#),
            Some("ISO-8859-1")
        );
        assert_eq!(
            extract_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=koi8-r">"#
            ),
            Some("koi8-r")
        );
        assert_eq!(extract_meta_charset(b"<p>no declaration</p>"), None);
    }

    #[test]
    fn test_push_collapsed_joins_runs() {
        let mut buf = String::new();
        push_collapsed(&mut buf, "  Hello,\n   ");
        push_collapsed(&mut buf, "world ");
        finish_text(&mut buf);
        assert_eq!(buf, "Hello, world");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("\t a  b \n c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
