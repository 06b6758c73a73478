use crate::cue::{Cue, CueList};
use crate::errors::{SubtitleError, SubtitleResult};
use crate::extractor::extract_markup_blocks;
use crate::formats::{split_markup_body, to_crlf, SubtitleConverter};
use crate::timecode::{format_clock_time, parse_clock_time, COMMA};

// @module: DFXP (Netflix flavoured TTML) converter

const LINE_BREAK: &str = "<br/>";

const HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<tt xmlns="http://www.w3.org/ns/ttml" xmlns:ttm="http://www.w3.org/ns/ttml#metadata" xmlns:tts="http://www.w3.org/ns/ttml#styling" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <head>
    <metadata>
      <ttm:title>Netflix Subtitle</ttm:title>
    </metadata>
    <styling>
      <style tts:fontStyle="normal" tts:fontWeight="normal" xml:id="s1" tts:color="white" tts:fontFamily="Arial" tts:fontSize="100%"></style>
    </styling>
    <layout>
      <region tts:extent="80% 40%" tts:origin="10% 10%" tts:displayAlign="before" tts:textAlign="center" xml:id="topCenter" />
      <region tts:extent="80% 40%" tts:origin="10% 50%" tts:displayAlign="after" tts:textAlign="center" xml:id="bottomCenter" />
    </layout>
  </head>
  <body>
    <div style="s1" xml:id="d1">
"#;

const FOOTER: &str = "  </div>\n  </body>\n</tt>";

/// DFXP converter: `HH:MM:SS,mmm` clock times, `<br/>` line breaks,
/// cue ids `p1`, `p2`, ... and CRLF line endings.
#[derive(Debug, Default, Clone, Copy)]
pub struct DfxpConverter;

impl SubtitleConverter for DfxpConverter {
    fn parse(&self, text: &str) -> SubtitleResult<CueList> {
        let blocks = extract_markup_blocks(text)?;

        if blocks.is_empty() && !text.trim().is_empty() {
            return Err(SubtitleError::invalid("no DFXP <p> cues found"));
        }

        blocks
            .iter()
            .map(|block| {
                Ok(Cue::new(
                    parse_clock_time(&block.start, COMMA)?,
                    parse_clock_time(&block.end, COMMA)?,
                    split_markup_body(&block.body, LINE_BREAK),
                ))
            })
            .collect()
    }

    fn render(&self, cues: &[Cue]) -> String {
        let mut content = String::from(HEADER);

        for (i, cue) in cues.iter().enumerate() {
            content.push_str(&format!(
                "    <p xml:id=\"p{}\" begin=\"{}\" end=\"{}\" region=\"bottomCenter\">{}</p>\n",
                i + 1,
                format_clock_time(cue.start, COMMA),
                format_clock_time(cue.end, COMMA),
                cue.lines.join(LINE_BREAK)
            ));
        }

        content.push_str(FOOTER);
        to_crlf(&content)
    }
}
