use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single line of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TocLine {
    /// A directory. `level` is its nesting depth below the root, so direct
    /// children of the root get a single `#`.
    Heading { level: usize, name: String },
    /// A file entry, listed by its bare name.
    File { name: String },
    /// One trimmed line of an inlined text file.
    Content { text: String },
    /// The MIME marker that replaces content for binary files.
    Mime { mime: String },
}

impl fmt::Display for TocLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocLine::Heading { level, name } => write!(f, "{} {}", "#".repeat(*level), name),
            TocLine::File { name } => write!(f, "- {}", name),
            TocLine::Content { text } => write!(f, "    {}", text),
            TocLine::Mime { mime } => write!(f, "    (MIME type: {})", mime),
        }
    }
}

/// The complete table of contents for one root directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toc {
    /// The directory that was walked.
    pub root: PathBuf,
    /// Every emitted line, in traversal order.
    pub lines: Vec<TocLine>,
}

/// Counts gathered from a [`Toc`], logged after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocStats {
    pub directories: usize,
    pub text_files: usize,
    pub binary_files: usize,
    pub content_lines: usize,
}

impl Toc {
    pub fn stats(&self) -> TocStats {
        let mut stats = TocStats::default();
        let mut lines = self.lines.iter().peekable();
        while let Some(line) = lines.next() {
            match line {
                TocLine::Heading { .. } => stats.directories += 1,
                TocLine::File { .. } => {
                    if matches!(lines.peek(), Some(TocLine::Mime { .. })) {
                        stats.binary_files += 1;
                    } else {
                        stats.text_files += 1;
                    }
                }
                TocLine::Content { .. } => stats.content_lines += 1,
                TocLine::Mime { .. } => {}
            }
        }
        stats
    }
}
