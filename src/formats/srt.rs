use log::warn;

use crate::cue::{Cue, CueList};
use crate::errors::{SubtitleError, SubtitleResult};
use crate::extractor::extract_line_blocks;
use crate::formats::{block_lines, split_body, SubtitleConverter};
use crate::timecode::{format_clock_time, parse_clock_time, COMMA};

// @module: SubRip (.srt) converter

/// SubRip converter.
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// First line
/// Second line
///
/// 2
/// 00:00:05,500 --> 00:00:08,000
/// Next cue
/// ```
///
/// Cue numbers are regenerated from 1 on render and ignored on parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct SrtConverter;

impl SubtitleConverter for SrtConverter {
    fn parse(&self, text: &str) -> SubtitleResult<CueList> {
        let blocks = extract_line_blocks(text);

        for skipped in &blocks.skipped {
            warn!("Skipping SRT block without a time range: {:?}", skipped);
        }

        if blocks.cues.is_empty() {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Err(SubtitleError::invalid("no SRT time ranges found"));
        }

        blocks
            .cues
            .iter()
            .map(|block| {
                Ok(Cue::new(
                    parse_clock_time(&block.start, COMMA)?,
                    parse_clock_time(&block.end, COMMA)?,
                    split_body(&block.body, "\n"),
                ))
            })
            .collect()
    }

    fn render(&self, cues: &[Cue]) -> String {
        cues.iter()
            .enumerate()
            .map(|(i, cue)| {
                let mut block = format!(
                    "{}\n{} --> {}",
                    i + 1,
                    format_clock_time(cue.start, COMMA),
                    format_clock_time(cue.end, COMMA)
                );
                for line in block_lines(cue) {
                    block.push('\n');
                    block.push_str(line);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
