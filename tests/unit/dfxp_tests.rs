/*!
 * Tests for the DFXP converter
 */

use subconv::formats::{DfxpConverter, SubtitleConverter};
use subconv::{Cue, SubtitleError};
use crate::common;

fn expected_document(paragraphs: &[&str]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#,
        r#"<tt xmlns="http://www.w3.org/ns/ttml" xmlns:ttm="http://www.w3.org/ns/ttml#metadata" xmlns:tts="http://www.w3.org/ns/ttml#styling" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        "  <head>",
        "    <metadata>",
        "      <ttm:title>Netflix Subtitle</ttm:title>",
        "    </metadata>",
        "    <styling>",
        r#"      <style tts:fontStyle="normal" tts:fontWeight="normal" xml:id="s1" tts:color="white" tts:fontFamily="Arial" tts:fontSize="100%"></style>"#,
        "    </styling>",
        "    <layout>",
        r#"      <region tts:extent="80% 40%" tts:origin="10% 10%" tts:displayAlign="before" tts:textAlign="center" xml:id="topCenter" />"#,
        r#"      <region tts:extent="80% 40%" tts:origin="10% 50%" tts:displayAlign="after" tts:textAlign="center" xml:id="bottomCenter" />"#,
        "    </layout>",
        "  </head>",
        "  <body>",
        r#"    <div style="s1" xml:id="d1">"#,
    ];
    lines.extend_from_slice(paragraphs);
    lines.extend_from_slice(&["  </div>", "  </body>", "</tt>"]);
    lines.join("\r\n")
}

#[test]
fn test_render_withSampleCues_shouldMatchDocumentByteForByte() {
    let expected = expected_document(&[
        r#"    <p xml:id="p1" begin="00:00:01,000" end="00:00:04,000" region="bottomCenter">This is a test subtitle.</p>"#,
        r#"    <p xml:id="p2" begin="00:00:05,000" end="00:00:09,500" region="bottomCenter">It contains<br/>multiple lines.</p>"#,
        r#"    <p xml:id="p3" begin="00:00:10,250" end="00:00:14,000" region="bottomCenter">For testing purposes.</p>"#,
    ]);
    assert_eq!(DfxpConverter.render(&common::sample_cues()), expected);
}

#[test]
fn test_roundTrip_withRenderedDocument_shouldBeIdempotent() {
    let document = DfxpConverter.render(&common::sample_cues());
    let cues = DfxpConverter.parse(&document).unwrap();
    assert_eq!(cues, common::sample_cues());
    assert_eq!(DfxpConverter.render(&cues), document);
}

#[test]
fn test_parse_withAdjacentCuesOnOneLine_shouldNotMergeThem() {
    let input = r#"<div><p begin="00:00:01,000" end="00:00:02,000">one</p><p begin="00:00:02,000" end="00:00:03,000">two<br/>lines</p></div>"#;
    let cues = DfxpConverter.parse(input).unwrap();
    assert_eq!(
        cues,
        vec![Cue::from_text(1.0, 2.0, "one"), Cue::from_text(2.0, 3.0, "two\nlines")]
    );
}

#[test]
fn test_parse_withEmptyParagraph_shouldGiveEmptyLines() {
    let input = r#"<p begin="00:00:01,000" end="00:00:02,000"></p><p begin="00:00:03,000" end="00:00:04,000"/>"#;
    let cues = DfxpConverter.parse(input).unwrap();
    assert_eq!(cues, vec![Cue::new(1.0, 2.0, Vec::new()), Cue::new(3.0, 4.0, Vec::new())]);
}

#[test]
fn test_parse_withAttributesInAnyOrder_shouldFindTimes() {
    let input = r#"<p end="00:00:02,500" region="bottomCenter" begin="00:00:01,250" xml:id="p9">x</p>"#;
    assert_eq!(DfxpConverter.parse(input).unwrap(), vec![Cue::from_text(1.25, 2.5, "x")]);
}

#[test]
fn test_parse_withMissingClosingTag_shouldReturnInvalidContent() {
    let input = r#"<p begin="00:00:01,000" end="00:00:02,000">never closed"#;
    assert!(matches!(DfxpConverter.parse(input), Err(SubtitleError::InvalidContent(_))));
}

#[test]
fn test_parse_withoutBeginAttribute_shouldReturnInvalidContent() {
    let input = r#"<p end="00:00:02,000">no start</p>"#;
    assert!(matches!(DfxpConverter.parse(input), Err(SubtitleError::InvalidContent(_))));
}

#[test]
fn test_parse_withGarbage_shouldReturnInvalidContent() {
    assert!(matches!(DfxpConverter.parse(common::GARBAGE), Err(SubtitleError::InvalidContent(_))));
    assert!(matches!(
        DfxpConverter.parse("<html><body>nothing</body></html>"),
        Err(SubtitleError::InvalidContent(_))
    ));
}

#[test]
fn test_parse_withBadTime_shouldReturnInvalidContent() {
    let input = r#"<p begin="1.0s" end="2.0s">offset times are TTML</p>"#;
    assert!(matches!(DfxpConverter.parse(input), Err(SubtitleError::InvalidContent(_))));
}
