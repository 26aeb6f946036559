//! Properties file format parsing.
//!
//! Responsibilities:
//! - Parse plain `key=value` properties content (comment lines, `\` line
//!   continuation, `\uXXXX` escapes) via `java-properties`.
//! - Parse flat XML properties documents, `<entry key="...">value</entry>`
//!   children under a single root, via `quick-xml`.
//!
//! Does NOT handle:
//! - Resolving locations to streams (see `location`).
//! - Deciding how a parse failure affects a load (see `loader`).
//!
//! Invariants:
//! - A duplicate key within one document resolves to the value seen last.
//! - `<comment>` elements and the document DTD are ignored.
//! - Equivalent plain and XML content parse to equal property sets.

use std::io::{BufReader, Read};

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

use crate::location::ResolvedStream;
use crate::types::PropertySet;

/// Errors raised while parsing one location's content.
///
/// These never cross the loader boundary; the loader logs them and lets the
/// offending location contribute nothing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid plain properties: {0}")]
    Plain(#[from] java_properties::PropertiesError),

    #[error("invalid xml properties: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid xml attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("xml entry element is missing its key attribute")]
    MissingEntryKey,
}

/// Parse a resolved stream according to its reported format.
pub(crate) fn parse_stream(stream: ResolvedStream) -> Result<PropertySet, ParseError> {
    if stream.is_xml() {
        parse_xml(stream)
    } else {
        parse_plain(stream)
    }
}

/// Parse line-oriented `key=value` properties content.
pub fn parse_plain(input: impl Read) -> Result<PropertySet, ParseError> {
    let entries = java_properties::read(input)?;
    Ok(entries.into_iter().collect())
}

/// Parse a flat XML properties document.
pub fn parse_xml(input: impl Read) -> Result<PropertySet, ParseError> {
    let mut reader = Reader::from_reader(BufReader::new(input));

    let mut set = PropertySet::new();
    let mut buf = Vec::new();
    // Key of the <entry> currently open, with its accumulated text.
    let mut current: Option<(String, String)> = None;
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) if start.local_name().as_ref() == b"entry" => {
                current = Some((entry_key(&start)?, String::new()));
            }
            Event::Empty(start) if start.local_name().as_ref() == b"entry" => {
                set.insert(entry_key(&start)?, "");
            }
            Event::Text(text) => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text.unescape()?);
                }
            }
            Event::End(end) if end.local_name().as_ref() == b"entry" => {
                if let Some((key, value)) = current.take() {
                    set.insert(key, value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(set)
}

fn entry_key(start: &BytesStart<'_>) -> Result<String, ParseError> {
    let attr = start
        .try_get_attribute("key")?
        .ok_or(ParseError::MissingEntryKey)?;
    Ok(attr.unescape_value()?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_basic() {
        let set = parse_plain("foo=bar\nfoobar=baz\n".as_bytes()).unwrap();
        assert_eq!(set.get("foo"), Some("bar"));
        assert_eq!(set.get("foobar"), Some("baz"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_plain_comments_and_blank_lines() {
        let content = "# a comment\n! another comment\n\nfoo=bar\n";
        let set = parse_plain(content.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("foo"), Some("bar"));
    }

    #[test]
    fn test_parse_plain_line_continuation() {
        let content = "key=va\\\n    lue\n";
        let set = parse_plain(content.as_bytes()).unwrap();
        assert_eq!(set.get("key"), Some("value"));
    }

    #[test]
    fn test_parse_plain_unicode_escape() {
        let set = parse_plain("greeting=\\u0048i\n".as_bytes()).unwrap();
        assert_eq!(set.get("greeting"), Some("Hi"));
    }

    #[test]
    fn test_parse_plain_duplicate_key_last_wins() {
        let set = parse_plain("foo=first\nfoo=second\n".as_bytes()).unwrap();
        assert_eq!(set.get("foo"), Some("second"));
    }

    #[test]
    fn test_parse_xml_basic() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<properties>
    <comment>application defaults</comment>
    <entry key="foo">bar</entry>
    <entry key="foobar">baz</entry>
</properties>"#;
        let set = parse_xml(content.as_bytes()).unwrap();
        assert_eq!(set.get("foo"), Some("bar"));
        assert_eq!(set.get("foobar"), Some("baz"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_xml_empty_entry() {
        let content = r#"<properties><entry key="empty"/></properties>"#;
        let set = parse_xml(content.as_bytes()).unwrap();
        assert_eq!(set.get("empty"), Some(""));
    }

    #[test]
    fn test_parse_xml_escaped_value() {
        let content = r#"<properties><entry key="amp">a &amp; b</entry></properties>"#;
        let set = parse_xml(content.as_bytes()).unwrap();
        assert_eq!(set.get("amp"), Some("a & b"));
    }

    #[test]
    fn test_parse_xml_duplicate_key_last_wins() {
        let content = r#"<properties>
            <entry key="foo">first</entry>
            <entry key="foo">second</entry>
        </properties>"#;
        let set = parse_xml(content.as_bytes()).unwrap();
        assert_eq!(set.get("foo"), Some("second"));
    }

    #[test]
    fn test_parse_xml_entry_without_key_is_an_error() {
        let content = r#"<properties><entry>orphan</entry></properties>"#;
        let result = parse_xml(content.as_bytes());
        assert!(matches!(result, Err(ParseError::MissingEntryKey)));
    }

    #[test]
    fn test_parse_xml_malformed_is_an_error() {
        let content = "<properties><entry key=\"foo\">bar</wrong></properties>";
        assert!(parse_xml(content.as_bytes()).is_err());
    }

    #[test]
    fn test_plain_and_xml_equivalents_parse_identically() {
        let plain = parse_plain("foo=bar\nfoobar=baz\n".as_bytes()).unwrap();
        let xml = parse_xml(
            r#"<properties><entry key="foo">bar</entry><entry key="foobar">baz</entry></properties>"#
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(plain, xml);
    }
}
