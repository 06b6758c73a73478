/*!
 * End-to-end conversion tests across every pair of formats
 */

use subconv::{Cue, SubtitleFormat, Subtitles};
use crate::common;

/// Times on a 100 ms grid survive every format, including one-decimal TTML
fn shared_precision_cues() -> Vec<Cue> {
    vec![
        Cue::from_text(0.5, 1.7, "Hello"),
        Cue::from_text(61.2, 64.9, "Two\nlines"),
        Cue::new(3600.1, 3601.0, Vec::new()),
        Cue::from_text(3700.0, 3702.3, "Last one"),
    ]
}

#[test]
fn test_crossFormat_roundTrip_shouldPreserveContent() {
    let cues = shared_precision_cues();

    for format in SubtitleFormat::ALL {
        let rendered = format.render(&cues);
        let parsed = format.parse(&rendered).unwrap_or_else(|e| panic!("{}: {}", format, e));
        common::assert_cues_close(&cues, &parsed);
    }
}

#[test]
fn test_chainedConversion_throughEveryFormat_shouldKeepCues() {
    let mut cues = shared_precision_cues();

    for format in [
        SubtitleFormat::Srt,
        SubtitleFormat::Dfxp,
        SubtitleFormat::Vtt,
        SubtitleFormat::Ttml,
        SubtitleFormat::Srt,
    ] {
        cues = format.parse(&format.render(&cues)).unwrap();
    }

    common::assert_cues_close(&shared_precision_cues(), &cues);
}

#[test]
fn test_renderParseRender_withinEachFormat_shouldBeIdempotent() {
    let source = Subtitles::load(common::SRT_SAMPLE, SubtitleFormat::Srt).unwrap();

    for format in SubtitleFormat::ALL {
        let first = source.content(format);
        let second = Subtitles::load(&first, format).unwrap().content(format);
        assert_eq!(first, second, "{} output is not stable", format);
    }
}

#[test]
fn test_convertFromVttToSrt_shouldMatchSrtDocument() {
    let actual = Subtitles::load(common::VTT_SAMPLE, SubtitleFormat::Vtt)
        .unwrap()
        .content(SubtitleFormat::Srt);
    assert_eq!(actual, common::SRT_SAMPLE);
}

#[test]
fn test_convertFromSrtToVtt_shouldMatchVttDocument() {
    let actual = Subtitles::load(common::SRT_SAMPLE, SubtitleFormat::Srt)
        .unwrap()
        .content(SubtitleFormat::Vtt);
    assert_eq!(actual, common::VTT_SAMPLE);
}

#[test]
fn test_converters_shouldBeUsableFromManyThreads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let format = SubtitleFormat::ALL[i];
                let cues = vec![Cue::from_text(i as f64, i as f64 + 1.0, "threaded")];
                format.parse(&format.render(&cues)).map(|parsed| parsed == cues)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}

/// DFXP paragraph wrapped in a full document
fn dfxp_document(paragraph: &str) -> String {
    format!("<tt><body><div>{}</div></body></tt>", paragraph)
}

#[test]
fn test_markupToLineFormats_withRepeatedBreaks_shouldKeepAllText() {
    let dfxp = dfxp_document(r#"<p begin="00:00:01,000" end="00:00:02,000">a<br/><br/>b</p>"#);
    let cues = SubtitleFormat::Dfxp.parse(&dfxp).unwrap();

    for format in [SubtitleFormat::Srt, SubtitleFormat::Vtt] {
        let reparsed = format.parse(&format.render(&cues)).unwrap();
        assert_eq!(reparsed, vec![Cue::from_text(1.0, 2.0, "a\nb")], "through {}", format);
    }
}

#[test]
fn test_markupToLineFormats_withIndentedParagraph_shouldKeepAllText() {
    let dfxp = dfxp_document("\n    <p begin=\"00:00:01,000\" end=\"00:00:02,000\">\n  Hello<br/>\n  World\n</p>\n");
    let ttml = "<tt><body><div>\r\n      <p begin=\"1.0s\" end=\"2.0s\">\r\n  Hello<br />\r\n  World\r\n</p></div></body></tt>";

    for (source, text) in [(SubtitleFormat::Dfxp, dfxp.as_str()), (SubtitleFormat::Ttml, ttml)] {
        let cues = source.parse(text).unwrap();
        assert_eq!(cues, vec![Cue::from_text(1.0, 2.0, "Hello\nWorld")], "from {}", source);

        for target in [SubtitleFormat::Srt, SubtitleFormat::Vtt] {
            let reparsed = target.parse(&target.render(&cues)).unwrap();
            assert_eq!(reparsed, cues, "{} through {}", source, target);
        }
    }
}

#[test]
fn test_garbage_shouldBeRejectedByEveryFormat() {
    for format in SubtitleFormat::ALL {
        assert!(format.parse(common::GARBAGE).is_err(), "{} accepted garbage", format);
    }
}
