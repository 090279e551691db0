//! Markup backends that turn a raw document into its visible text.
//!
//! Two backends are provided:
//!
//! - [`StrictMarkupBackend`] parses well-formed markup with `quick-xml` and
//!   rejects anything else.
//! - [`LenientMarkupBackend`] strips anything that looks like a tag and never
//!   fails, so plain text and broken HTML still produce words.

use crate::error::{Result, WordbankError};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::{Captures, Regex};

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap());

/// Elements whose contents are never visible text.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

fn is_hidden_element(name: &[u8]) -> bool {
    HIDDEN_ELEMENTS
        .iter()
        .any(|hidden| name.eq_ignore_ascii_case(hidden.as_bytes()))
}

/// Trait for strategies that extract visible text from a raw document.
pub trait TextExtractorBackend {
    /// Returns the visible text of `raw`, without tags, attributes,
    /// scripts, or comments.
    ///
    /// Returns [`WordbankError::MalformedMarkup`] when the backend cannot
    /// make sense of the input.
    fn visible_text(&self, raw: &str) -> Result<String>;

    /// Short backend name used in log messages.
    fn name(&self) -> &'static str;
}

/// Well-formedness-checking markup parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictMarkupBackend;

impl TextExtractorBackend for StrictMarkupBackend {
    fn visible_text(&self, raw: &str) -> Result<String> {
        let mut reader = Reader::from_str(raw);
        reader.trim_text(false);
        reader.check_end_names(true);

        let mut text = String::with_capacity(raw.len());
        let mut hidden_depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    if hidden_depth > 0 || is_hidden_element(e.local_name().as_ref()) {
                        hidden_depth += 1;
                    }
                    text.push(' ');
                }
                Event::End(_) => {
                    hidden_depth = hidden_depth.saturating_sub(1);
                    text.push(' ');
                }
                Event::Empty(_) => text.push(' '),
                Event::Text(e) => {
                    if hidden_depth == 0 {
                        text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if hidden_depth == 0 {
                        text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                // Comments, doctypes, declarations, processing instructions
                _ => {}
            }
        }

        if hidden_depth > 0 {
            return Err(WordbankError::MalformedMarkup(
                "unclosed script or style element".to_string(),
            ));
        }

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// Tag stripper for HTML soup and plain text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientMarkupBackend;

impl LenientMarkupBackend {
    /// Strips tags, comments, and hidden elements from `raw`.
    pub fn strip(&self, raw: &str) -> String {
        let mut text = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(lt) = rest.find('<') {
            text.push_str(&rest[..lt]);
            let markup = &rest[lt..];

            if let Some(comment) = markup.strip_prefix("<!--") {
                rest = match comment.find("-->") {
                    Some(end) => &comment[end + 3..],
                    None => "",
                };
                text.push(' ');
                continue;
            }

            if let Some(cdata) = markup.strip_prefix("<![CDATA[") {
                let (contents, after) = match cdata.find("]]>") {
                    Some(end) => (&cdata[..end], &cdata[end + 3..]),
                    None => (cdata, ""),
                };
                text.push(' ');
                text.push_str(contents);
                text.push(' ');
                rest = after;
                continue;
            }

            match tag_extent(markup) {
                Some(tag) => {
                    text.push(' ');
                    rest = &markup[tag.len..];
                    if !tag.closing && is_hidden_element(tag.name.as_bytes()) {
                        rest = skip_hidden_contents(rest, tag.name);
                    }
                }
                None => {
                    // A bare '<' is text ("a < b", "<>")
                    text.push('<');
                    rest = &markup[1..];
                }
            }
        }
        text.push_str(rest);

        decode_entities(&text)
    }
}

impl TextExtractorBackend for LenientMarkupBackend {
    fn visible_text(&self, raw: &str) -> Result<String> {
        Ok(self.strip(raw))
    }

    fn name(&self) -> &'static str {
        "lenient"
    }
}

struct TagExtent<'a> {
    len: usize,
    name: &'a str,
    closing: bool,
}

/// Measures the tag starting at `markup[0] == '<'`, if it is one.
fn tag_extent(markup: &str) -> Option<TagExtent<'_>> {
    let inner = &markup[1..];
    let (closing, body) = match inner.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, inner),
    };

    let first = body.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '!' || first == '?') {
        return None;
    }

    let end = find_tag_end(markup)?;
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());

    Some(TagExtent {
        len: end + 1,
        name: &body[..name_len],
        closing,
    })
}

/// Finds the `>` closing a tag, ignoring any inside quoted attribute values.
///
/// An unbalanced quote falls back to the first `>`.
fn find_tag_end(markup: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in markup.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    markup.find('>')
}

/// Skips to just past the closing tag of a hidden element.
fn skip_hidden_contents<'a>(rest: &'a str, name: &str) -> &'a str {
    let needle = format!("</{}", name.to_ascii_lowercase());
    match rest.to_ascii_lowercase().find(&needle) {
        Some(pos) => {
            let tail = &rest[pos..];
            match tail.find('>') {
                Some(end) => &tail[end + 1..],
                None => "",
            }
        }
        None => "",
    }
}

/// Decodes character references; unknown named entities become a space.
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match entity {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => None,
                }
            };
            decoded.unwrap_or(' ').to_string()
        })
        .into_owned()
}
