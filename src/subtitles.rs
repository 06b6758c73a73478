use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::cue::{Cue, CueList};
use crate::errors::SubtitleResult;
use crate::file_utils::FileManager;
use crate::formats::SubtitleFormat;

// @module: Subtitle document facade

/// In-memory subtitle document that can be loaded from and written to any
/// supported format
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtitles {
    cues: CueList,
}

impl Subtitles {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cues(cues: CueList) -> Self {
        Subtitles { cues }
    }

    /// Parse `content` as `format`
    pub fn load(content: &str, format: SubtitleFormat) -> SubtitleResult<Self> {
        let cues = format.parse(content)?;
        debug!("Loaded {} cues as {}", cues.len(), format.display_name());
        Ok(Subtitles { cues })
    }

    /// Read a file, choosing the format from its extension
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = SubtitleFormat::from_path(path)?;
        let content = FileManager::read_to_string(path)?;
        Self::load(&content, format)
            .with_context(|| format!("Failed to parse {} file: {}", format.display_name(), path.display()))
    }

    /// Render the document in `format`
    pub fn content(&self, format: SubtitleFormat) -> String {
        format.render(&self.cues)
    }

    /// Write the document, choosing the format from the path's extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = SubtitleFormat::from_path(path)?;
        FileManager::write_to_file(path, &self.content(format))
    }

    /// Append a cue; `text` is split into lines on `\n`
    pub fn add(&mut self, start: f64, end: f64, text: &str) -> &mut Self {
        self.cues.push(Cue::from_text(start, end, text));
        self
    }

    /// Drop every cue that overlaps `[from, till)`
    pub fn remove(&mut self, from: f64, till: f64) -> &mut Self {
        self.cues.retain(|cue| !cue.overlaps(from, till));
        self
    }

    /// Move every cue by `seconds`, which may be negative
    pub fn shift_time(&mut self, seconds: f64) -> &mut Self {
        for cue in &mut self.cues {
            cue.start += seconds;
            cue.end += seconds;
        }
        self
    }

    /// Keep only cues lying completely inside `[from, till]`
    pub fn trim(&mut self, from: f64, till: f64) -> &mut Self {
        self.cues.retain(|cue| cue.start >= from && cue.end <= till);
        self
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn into_cues(self) -> CueList {
        self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}
