use crate::cue::{Cue, CueList};
use crate::errors::{SubtitleError, SubtitleResult};
use crate::extractor::extract_markup_blocks;
use crate::formats::{split_markup_body, to_crlf, SubtitleConverter};
use crate::timecode::{format_offset_time, parse_clock_time, parse_offset_time, parse_time_of_day, DOT};

// @module: TTML converter with offset times

const LINE_BREAK: &str = "<br />";

const HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<tt xmlns="http://www.w3.org/ns/ttml" xmlns:ttp="http://www.w3.org/ns/ttml#parameter" ttp:timeBase="media" xmlns:tts="http://www.w3.org/ns/ttml#style" xml:lang="en" xmlns:ttm="http://www.w3.org/ns/ttml#metadata">
  <head>
    <metadata>
      <ttm:title></ttm:title>
    </metadata>
    <styling>
      <style id="s0" tts:backgroundColor="black" tts:fontStyle="normal" tts:fontSize="16" tts:fontFamily="sansSerif" tts:color="white" />
    </styling>
  </head>
  <body style="s0">
    <div>
"#;

const FOOTER: &str = "    </div>\n  </body>\n</tt>";

/// TTML converter: offset times with one decimal (`12.3s`), `<br />` line
/// breaks, cue ids `p0`, `p1`, ... and CRLF line endings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtmlConverter;

/// Offset times (`12.3s`) are the native form; clock times such as
/// `00:00:12.300` or `00:00:12` are accepted too.
fn parse_ttml_time(text: &str) -> SubtitleResult<f64> {
    if !text.contains(':') {
        return parse_offset_time(text);
    }
    if text.contains(DOT) {
        parse_clock_time(text, DOT)
    } else {
        parse_time_of_day(text).map(f64::from)
    }
}

impl SubtitleConverter for TtmlConverter {
    fn parse(&self, text: &str) -> SubtitleResult<CueList> {
        let blocks = extract_markup_blocks(text)?;

        if blocks.is_empty() && !text.trim().is_empty() {
            return Err(SubtitleError::invalid("no TTML <p> cues found"));
        }

        blocks
            .iter()
            .map(|block| {
                Ok(Cue::new(
                    parse_ttml_time(&block.start)?,
                    parse_ttml_time(&block.end)?,
                    split_markup_body(&block.body, LINE_BREAK),
                ))
            })
            .collect()
    }

    fn render(&self, cues: &[Cue]) -> String {
        let mut content = String::from(HEADER);

        for (i, cue) in cues.iter().enumerate() {
            content.push_str(&format!(
                "      <p begin=\"{}\" id=\"p{}\" end=\"{}\">{}</p>\n",
                format_offset_time(cue.start),
                i,
                format_offset_time(cue.end),
                cue.lines.join(LINE_BREAK)
            ));
        }

        content.push_str(FOOTER);
        to_crlf(&content)
    }
}
