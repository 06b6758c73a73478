/*!
 * Format converters and the closed set of supported formats.
 *
 * Each converter is a stateless unit struct implementing
 * `SubtitleConverter`; `SubtitleFormat::converter` maps a format to its
 * shared static instance.
 */

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cue::{Cue, CueList};
use crate::errors::{SubtitleError, SubtitleResult};

pub mod dfxp;
pub mod srt;
pub mod ttml;
pub mod vtt;

pub use dfxp::DfxpConverter;
pub use srt::SrtConverter;
pub use ttml::TtmlConverter;
pub use vtt::VttConverter;

/// Bidirectional conversion between one file format and the cue model
pub trait SubtitleConverter: Send + Sync {
    /// Parse a whole document into cues
    fn parse(&self, text: &str) -> SubtitleResult<CueList>;

    /// Render cues as a whole document; never fails
    fn render(&self, cues: &[Cue]) -> String;
}

/// Supported subtitle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// SubRip
    #[default]
    Srt,
    /// WebVTT
    Vtt,
    /// Netflix flavoured TTML
    Dfxp,
    /// Timed Text Markup Language with offset times
    Ttml,
}

static SRT: SrtConverter = SrtConverter;
static VTT: VttConverter = VttConverter;
static DFXP: DfxpConverter = DfxpConverter;
static TTML: TtmlConverter = TtmlConverter;

impl SubtitleFormat {
    pub const ALL: [SubtitleFormat; 4] = [Self::Srt, Self::Vtt, Self::Dfxp, Self::Ttml];

    /// Shared converter for this format
    pub fn converter(self) -> &'static dyn SubtitleConverter {
        match self {
            Self::Srt => &SRT,
            Self::Vtt => &VTT,
            Self::Dfxp => &DFXP,
            Self::Ttml => &TTML,
        }
    }

    // @returns: Preferred file extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Dfxp => "dfxp",
            Self::Ttml => "ttml",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Srt => "SubRip",
            Self::Vtt => "WebVTT",
            Self::Dfxp => "DFXP",
            Self::Ttml => "TTML",
        }
    }

    /// Format for a file extension, with or without the leading dot
    pub fn from_extension(extension: &str) -> SubtitleResult<Self> {
        let extension = extension.trim_start_matches('.').to_lowercase();
        match extension.as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::Vtt),
            "dfxp" | "xml" => Ok(Self::Dfxp),
            "ttml" => Ok(Self::Ttml),
            _ => Err(SubtitleError::UnknownFormat(extension)),
        }
    }

    /// Format for a path, judged by its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> SubtitleResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .ok_or_else(|| SubtitleError::UnknownFormat(path.display().to_string()))?;
        Self::from_extension(&extension)
    }

    pub fn parse(self, text: &str) -> SubtitleResult<CueList> {
        self.converter().parse(text)
    }

    pub fn render(self, cues: &[Cue]) -> String {
        self.converter().render(cues)
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

/// Render markup with CRLF line endings regardless of how it was assembled
pub(crate) fn to_crlf(text: &str) -> String {
    text.replace('\r', "").replace('\n', "\r\n")
}

// @const: Source-formatting newlines inside a markup body, with their indentation
static MARKUP_NEWLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*[\r\n]+\s*").unwrap()
});

/// Split a body on its line-break token; an empty body has no lines
pub(crate) fn split_body(body: &str, line_break: &str) -> Vec<String> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split(line_break).map(str::to_string).collect()
}

/// Split a markup body into display lines.
///
/// Newlines in markup are layout, not line breaks: each run collapses to a
/// single space. Lines are trimmed and empty ones (e.g. `<br/><br/>`) dropped.
pub(crate) fn split_markup_body(body: &str, line_break: &str) -> Vec<String> {
    let flattened = MARKUP_NEWLINE_REGEX.replace_all(body, " ");
    flattened
        .split(line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lines a line-based format may write for a cue.
///
/// A blank line would end the cue block, so embedded newlines are split and
/// blank lines skipped.
pub(crate) fn block_lines(cue: &Cue) -> impl Iterator<Item = &str> {
    cue.lines
        .iter()
        .flat_map(|line| line.lines())
        .filter(|line| !line.trim().is_empty())
}
