use serde::{Deserialize, Serialize};

// @module: Canonical cue model shared by every format

/// Single subtitle entry, independent of any file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds, not checked against `start`
    pub end: f64,

    /// Display lines in order, possibly none
    pub lines: Vec<String>,
}

/// Ordered cues as they appear in a document
pub type CueList = Vec<Cue>;

impl Cue {
    pub fn new(start: f64, end: f64, lines: Vec<String>) -> Self {
        Cue { start, end, lines }
    }

    /// Creates a cue from newline separated text. Empty text gives no lines.
    pub fn from_text(start: f64, end: f64, text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        Cue { start, end, lines }
    }

    /// Lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when the cue intersects the half-open window `[from, till)`
    pub fn overlaps(&self, from: f64, till: f64) -> bool {
        self.start < till && self.end > from
    }
}
