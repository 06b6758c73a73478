use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::{Cue, CueList};
use crate::errors::{SubtitleError, SubtitleResult};
use crate::extractor::extract_line_blocks;
use crate::formats::{block_lines, split_body, SubtitleConverter};
use crate::timecode::{format_clock_time, parse_clock_time, DOT};

// @module: WebVTT (.vtt) converter

const HEADER: &str = "WEBVTT";

// @const: Non-cue blocks that may legally appear between cues
const METADATA_BLOCKS: [&str; 4] = [HEADER, "NOTE", "STYLE", "REGION"];

// @const: Leading voice span, e.g. `<v Roger Bingham>` or `<v.loud Esme>`
static VOICE_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<v(?:\.[^\s>]*)?\s+([^>]+)>\s*(.*?)(?:</v>)?$").unwrap()
});

/// WebVTT converter.
///
/// Parsing accepts `MM:SS.mmm` times, cue identifiers (numeric or not),
/// cue settings after the end time and `NOTE`/`STYLE`/`REGION` blocks.
/// Rendering writes the header and bare cues without identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct VttConverter;

/// Fold a leading voice span into plain text: `<v Name>text` becomes `Name text`
fn fold_voice_span(line: &str) -> String {
    match VOICE_SPAN_REGEX.captures(line) {
        Some(caps) => {
            let speaker = caps[1].trim();
            let text = &caps[2];
            if text.is_empty() {
                speaker.to_string()
            } else {
                format!("{} {}", speaker, text)
            }
        }
        None => line.to_string(),
    }
}

fn is_metadata_block(block: &[String]) -> bool {
    block.first().is_some_and(|first| {
        METADATA_BLOCKS.iter().any(|keyword| {
            first
                .strip_prefix(keyword)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
    })
}

impl SubtitleConverter for VttConverter {
    fn parse(&self, text: &str) -> SubtitleResult<CueList> {
        let blocks = extract_line_blocks(text);

        let mut saw_metadata = false;
        for skipped in &blocks.skipped {
            if is_metadata_block(skipped) {
                debug!("Skipping WebVTT block: {:?}", skipped.first());
                saw_metadata = true;
            } else {
                warn!("Skipping WebVTT block without a time range: {:?}", skipped);
            }
        }

        if blocks.cues.is_empty() {
            if text.trim().is_empty() || (saw_metadata && blocks.skipped.iter().all(|b| is_metadata_block(b))) {
                return Ok(Vec::new());
            }
            return Err(SubtitleError::invalid("no WebVTT time ranges found"));
        }

        blocks
            .cues
            .iter()
            .map(|block| {
                Ok(Cue::new(
                    parse_clock_time(&block.start, DOT)?,
                    parse_clock_time(&block.end, DOT)?,
                    split_body(&block.body, "\n").iter().map(|line| fold_voice_span(line)).collect(),
                ))
            })
            .collect()
    }

    fn render(&self, cues: &[Cue]) -> String {
        let mut content = String::from(HEADER);

        for cue in cues {
            content.push_str("\n\n");
            content.push_str(&format_clock_time(cue.start, DOT));
            content.push_str(" --> ");
            content.push_str(&format_clock_time(cue.end, DOT));
            for line in block_lines(cue) {
                content.push('\n');
                content.push_str(line);
            }
        }

        content
    }
}
