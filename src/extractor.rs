/*!
 * Cue block extraction.
 *
 * Extractors locate cue blocks in a raw document and hand back the raw
 * start text, end text and body without interpreting any of them.
 * - Markup documents are scanned tag by tag for `<p ...>...</p>` elements.
 * - Line-oriented documents are split into blank-line separated blocks.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{SubtitleError, SubtitleResult};

// @const: Time range line, e.g. `00:00:01,000 --> 00:00:02,000 align:start`.
// Both sides must look like clock times (leading digit, a colon) so prose
// containing an arrow is not taken for one.
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d\S*?:\S*?)\s*-->\s*(\d\S*?:\S*)(?:\s.*)?$").unwrap()
});

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Raw, uninterpreted pieces of one cue
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub start: String,
    pub end: String,
    pub body: String,
}

/// Result of splitting a line-oriented document
#[derive(Debug, Default)]
pub struct LineBlocks {
    /// Blocks that carry a time range; body lines are joined with `\n`
    pub cues: Vec<RawBlock>,

    /// Blocks without a time range, one entry per block with its lines
    pub skipped: Vec<Vec<String>>,
}

/// Scan a markup document for `<p>` cues.
///
/// Every `<p>` element must carry `begin` and `end` attributes and be closed
/// by `</p>`; the body stops at the first closing tag.
pub fn extract_markup_blocks(text: &str) -> SubtitleResult<Vec<RawBlock>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(tag_start) = find_paragraph_open(text, cursor) {
        let tag_end = find_tag_end(text, tag_start).ok_or_else(|| {
            SubtitleError::invalid(format!("unterminated <p> tag at byte {}", tag_start))
        })?;

        let tag = &text[tag_start + 2..tag_end];
        let self_closing = tag.trim_end().ends_with('/');
        let attributes = parse_attributes(tag.trim_end().trim_end_matches('/'));

        let start = attribute(&attributes, "begin").ok_or_else(|| {
            SubtitleError::invalid(format!("cue at byte {} has no begin attribute", tag_start))
        })?;
        let end = attribute(&attributes, "end").ok_or_else(|| {
            SubtitleError::invalid(format!("cue at byte {} has no end attribute", tag_start))
        })?;

        let body_start = tag_end + 1;
        let (body, next) = if self_closing {
            ("", body_start)
        } else {
            let close = text[body_start..].find("</p>").ok_or_else(|| {
                SubtitleError::invalid(format!("cue at byte {} is missing </p>", tag_start))
            })?;
            let close = body_start + close;
            (&text[body_start..close], close + "</p>".len())
        };

        blocks.push(RawBlock {
            start: start.to_string(),
            end: end.to_string(),
            body: body.to_string(),
        });
        cursor = next;
    }

    debug!("Found {} markup cue blocks", blocks.len());
    Ok(blocks)
}

/// Position of the next `<p` that opens a paragraph element (not `<param`)
fn find_paragraph_open(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut search = from;

    while let Some(offset) = text[search..].find("<p") {
        let position = search + offset;
        match bytes.get(position + 2) {
            Some(b'>') | Some(b'/') => return Some(position),
            Some(b) if b.is_ascii_whitespace() => return Some(position),
            _ => search = position + 2,
        }
    }

    None
}

/// Position of the `>` closing the tag that starts at `tag_start`, ignoring
/// any `>` inside quoted attribute values
fn find_tag_end(text: &str, tag_start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;

    for (offset, &b) in text.as_bytes()[tag_start..].iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') | (None, b'\'') => quote = Some(b),
            (None, b'>') => return Some(tag_start + offset),
            _ => {}
        }
    }

    None
}

/// Split `name="value" name2='value2'` pairs; attributes without a quoted
/// value are ignored
fn parse_attributes(tag: &str) -> Vec<(&str, &str)> {
    let mut attributes = Vec::new();
    let mut rest = tag;

    while let Some(eq) = rest.find('=') {
        let name = rest[..eq].split_whitespace().last().unwrap_or("");
        let after = rest[eq + 1..].trim_start();

        let Some(quote) = after.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            rest = after;
            continue;
        };

        let value_text = &after[1..];
        match value_text.find(quote) {
            Some(close) => {
                attributes.push((name, &value_text[..close]));
                rest = &value_text[close + 1..];
            }
            None => break,
        }
    }

    attributes
}

fn attribute<'a>(attributes: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Split a line-oriented document into cue blocks.
///
/// Any run of blank lines separates two blocks. Inside a block, lines before
/// the time range (a numeric index or a cue identifier) are dropped and lines
/// after it form the body.
pub fn extract_line_blocks(text: &str) -> LineBlocks {
    let normalized = normalize_newlines(text);
    let mut result = LineBlocks::default();

    for block in split_blocks(&normalized) {
        let time_line = block
            .iter()
            .enumerate()
            .find_map(|(i, line)| TIME_RANGE_REGEX.captures(line).map(|caps| (i, caps)));

        let Some((index, caps)) = time_line else {
            result.skipped.push(block.iter().map(|line| line.to_string()).collect());
            continue;
        };

        if index > 0 {
            debug!("Dropping {} leading line(s) before time range: {:?}", index, &block[..index]);
        }

        result.cues.push(RawBlock {
            start: caps[1].to_string(),
            end: caps[2].to_string(),
            body: block[index + 1..].join("\n"),
        });
    }

    debug!(
        "Found {} line cue blocks, skipped {} block(s)",
        result.cues.len(),
        result.skipped.len()
    );
    result
}

/// Convert `\r\n` and lone `\r` to `\n` and drop a leading byte order mark
pub fn normalize_newlines(text: &str) -> String {
    text.trim_start_matches(BYTE_ORDER_MARK)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Group non-blank lines into blocks
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
