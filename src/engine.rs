use crate::classify::{TextClassifier, mime_type};
use crate::error::TocError;
use crate::filter::ExclusionMatcher;
use crate::options::TocOptions;
use crate::output::{OverwritePolicy, write_toc};
use crate::types::{Toc, TocLine};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
enum EntryKind {
    Directory,
    File,
    Other,
}
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &TocOptions, matcher: &ExclusionMatcher) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !matcher.is_empty() {
            let matcher = matcher.clone();
            builder.filter_entry(move |entry| !matcher.is_excluded(entry.path()));
        }
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<DirEntry, TocError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => Some(Ok(entry)),
            Err(e) if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping vanished or dangling entry: {}", e);
                None
            }
            Err(e) => Some(Err(TocError::Walk(e.to_string()))),
        })
    }
}
fn entry_kind(entry: &DirEntry) -> EntryKind {
    let Some(file_type) = entry.file_type() else {
        return EntryKind::Other;
    };
    if file_type.is_dir() {
        return EntryKind::Directory;
    }
    if file_type.is_file() {
        return EntryKind::File;
    }
    if file_type.is_symlink() {
        // Only reached when links are not followed: directory targets still
        // get a heading but are not descended.
        return match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => {
                #[cfg(feature = "logging")]
                tracing::debug!("Not descending into symlinked directory: {}", entry.path().display());
                EntryKind::Directory
            }
            Ok(_) => EntryKind::Other,
            Err(_) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping dangling symlink: {}", entry.path().display());
                EntryKind::Other
            }
        };
    }
    EntryKind::Other
}
/// Decodes `bytes` as UTF-8, dropping invalid sequences instead of replacing them.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
/// Splits on `\n`, `\r\n` and lone `\r`. A trailing terminator does not start a new line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
fn read_content_lines(path: &Path) -> Result<Vec<TocLine>, TocError> {
    let bytes = fs::read(path).map_err(|e| TocError::io(path, e))?;
    let text = decode_dropping_invalid(&bytes);
    Ok(split_lines(&text)
        .into_iter()
        .map(|line| TocLine::Content {
            text: line.trim().to_string(),
        })
        .collect())
}
/// Rejects an extra extension that itself matches one of the exclusion patterns.
///
/// The extension is tested exactly as given, so `py` conflicts with `*py`
/// but not with `.*` or `*.py`.
pub fn validate(options: &TocOptions) -> Result<(), TocError> {
    let Some(ext) = options.extra_extension.as_deref() else {
        return Ok(());
    };
    let matcher = ExclusionMatcher::new(&options.root, &options.exclude_patterns);
    if matcher.matches(ext) {
        return Err(TocError::Conflict {
            extension: ext.to_string(),
            patterns: options.exclude_patterns.clone(),
        });
    }
    Ok(())
}
/// Walks `options.root` and builds the table of contents in memory.
pub fn build_toc(options: &TocOptions) -> Result<Toc, TocError> {
    validate(options)?;
    if !options.root.is_dir() {
        return Err(TocError::InvalidPath(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Building TOC for root: {}", options.root.display());
    let matcher = ExclusionMatcher::new(&options.root, &options.exclude_patterns);
    let classifier = TextClassifier::new(options.extra_extension.as_deref());
    let mut lines = Vec::new();
    for entry in Walker::new(options, &matcher).into_iter() {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        match entry_kind(&entry) {
            EntryKind::Directory => lines.push(TocLine::Heading {
                level: entry.depth(),
                name,
            }),
            EntryKind::File => {
                lines.push(TocLine::File { name });
                if classifier.is_text(entry.path()) {
                    lines.extend(read_content_lines(entry.path())?);
                } else {
                    lines.push(TocLine::Mime {
                        mime: mime_type(entry.path()),
                    });
                }
            }
            EntryKind::Other => {}
        }
    }
    Ok(Toc {
        root: options.root.clone(),
        lines,
    })
}
/// Validates, walks and writes the document, returning the path written.
pub fn generate(
    options: &TocOptions,
    output: impl AsRef<Path>,
    policy: OverwritePolicy,
) -> Result<PathBuf, TocError> {
    let toc = build_toc(options)?;
    let path = write_toc(&toc, output, policy)?;
    #[cfg(feature = "logging")]
    {
        let stats = toc.stats();
        tracing::info!(
            "Wrote {} ({} directories, {} text files, {} binary files, {} content lines)",
            path.display(),
            stats.directories,
            stats.text_files,
            stats.binary_files,
            stats.content_lines
        );
    }
    Ok(path)
}
