use std::collections::HashSet;
use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, trace};

// @module: WebVTT cleaning into plain transcript lines

// @const: Markup tag regex (cue timestamps, <c>, </c>, <i>, ...)
static MARKUP_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").unwrap()
});

/// Line prefixes of the WebVTT header block
pub const HEADER_PREFIXES: [&str; 3] = ["WEBVTT", "Kind:", "Language:"];

/// Separator between start and end time on a cue timing line
pub const CUE_TIMING_MARKER: &str = "-->";

// @enum: Classification of a raw VTT line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `WEBVTT`, `Kind:` or `Language:` line
    Header,
    /// Line containing `-->`
    CueTiming,
    /// Empty or whitespace-only line
    Blank,
    /// Anything else, treated as cue text
    Text,
}

impl LineKind {
    // @returns: Kind of the raw line, checked in header, timing, blank order
    pub fn classify(line: &str) -> Self {
        if HEADER_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            LineKind::Header
        } else if line.contains(CUE_TIMING_MARKER) {
            LineKind::CueTiming
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        }
    }
}

/// Remove every `<...>` markup tag from a line
pub fn strip_markup(line: &str) -> String {
    MARKUP_TAG_REGEX.replace_all(line, "").into_owned()
}

/// Collapse whitespace runs into single spaces and trim both ends
pub fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

// @struct: Counters of what the cleaner dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub headers: usize,
    pub cue_timings: usize,
    pub blanks: usize,
    /// Text lines that were empty once tags were stripped
    pub markup_only: usize,
    pub duplicates: usize,
    pub emitted: usize,
}

/// Incremental cleaner for one subtitle track.
///
/// The seen-set lives only as long as the cleaner; `finish` consumes it.
#[derive(Debug, Default)]
pub struct SubtitleCleaner {
    seen: HashSet<String>,
    lines: Vec<String>,
    summary: CleanSummary,
}

impl SubtitleCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line. Returns true when it produced a new output line.
    pub fn push_line(&mut self, line: &str) -> bool {
        match LineKind::classify(line) {
            LineKind::Header => {
                self.summary.headers += 1;
                return false;
            }
            LineKind::CueTiming => {
                self.summary.cue_timings += 1;
                return false;
            }
            LineKind::Blank => {
                self.summary.blanks += 1;
                return false;
            }
            LineKind::Text => {}
        }

        let clean_line = collapse_whitespace(&strip_markup(line));
        if clean_line.is_empty() {
            self.summary.markup_only += 1;
            return false;
        }

        if self.seen.contains(&clean_line) {
            trace!("Dropping repeated line: {}", clean_line);
            self.summary.duplicates += 1;
            return false;
        }

        self.seen.insert(clean_line.clone());
        self.lines.push(clean_line);
        self.summary.emitted += 1;
        true
    }

    pub fn summary(&self) -> CleanSummary {
        self.summary
    }

    // @returns: Emitted lines in first-occurrence order
    pub fn finish(self) -> CleanedTranscript {
        debug!(
            "Cleaned subtitles: {} kept, {} duplicates, {} headers, {} timing lines, {} blank, {} markup-only",
            self.summary.emitted,
            self.summary.duplicates,
            self.summary.headers,
            self.summary.cue_timings,
            self.summary.blanks,
            self.summary.markup_only
        );
        CleanedTranscript { lines: self.lines }
    }
}

/// Plain text produced from a subtitle track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedTranscript {
    pub lines: Vec<String>,
}

impl CleanedTranscript {
    /// Clean a whole VTT document
    pub fn from_vtt(vtt_content: &str) -> Self {
        let mut cleaner = SubtitleCleaner::new();
        for line in vtt_content.split('\n') {
            cleaner.push_line(line);
        }
        cleaner.finish()
    }

    /// Lines joined by `\n`, without a trailing newline
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn stats(&self) -> TranscriptStats {
        TranscriptStats::for_text(&self.text())
    }
}

impl fmt::Display for CleanedTranscript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Clean VTT content into de-duplicated plain text lines joined by `\n`
pub fn clean_vtt(vtt_content: &str) -> String {
    CleanedTranscript::from_vtt(vtt_content).text()
}

/// Size of a cleaned transcript as reported on stderr.
///
/// `line_count` is the number of pieces the text splits into on `\n`, so an
/// empty transcript reports one line. Existing consumers of the report rely on
/// this count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptStats {
    pub line_count: usize,
    pub char_count: usize,
}

impl TranscriptStats {
    pub fn for_text(text: &str) -> Self {
        TranscriptStats {
            line_count: text.split('\n').count(),
            char_count: text.chars().count(),
        }
    }
}

impl fmt::Display for TranscriptStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Statistics ---")?;
        writeln!(f, "Lines: {}", self.line_count)?;
        write!(f, "Characters: {}", self.char_count)
    }
}
