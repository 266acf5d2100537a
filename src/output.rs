//! Rendering and writing of the generated document.
//!
//! The document is written as UTF-8 Markdown, one [`TocLine`](crate::TocLine) per line.
//! Whether an existing file may be replaced is decided by an [`OverwritePolicy`].

use crate::{Toc, TocError};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverwritePolicy {
    /// Ask on the terminal and proceed only on an answer of exactly `y` or `Y`.
    #[default]
    Ask,
    /// Replace the file without asking.
    Always,
    /// Never replace an existing file.
    Never,
}

/// Appends `.md` to `output` unless it already ends with it.
pub fn resolve_output_path(output: impl AsRef<Path>) -> PathBuf {
    let output = output.as_ref();
    if output.to_string_lossy().ends_with(".md") {
        return output.to_path_buf();
    }
    let mut name = OsString::from(output.as_os_str());
    name.push(".md");
    PathBuf::from(name)
}

/// Renders the table of contents as Markdown, without a trailing newline.
pub fn format_toc(toc: &Toc) -> String {
    toc.lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the document, prompting on the process's stdin/stdout if needed.
pub fn write_toc(
    toc: &Toc,
    output: impl AsRef<Path>,
    policy: OverwritePolicy,
) -> Result<PathBuf, TocError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    write_toc_with(toc, output, policy, &mut stdin.lock(), &mut stdout.lock())
}

/// Writes the document, reading any overwrite confirmation from `input` and
/// printing the question to `prompt`.
///
/// # Errors
///
/// Returns [`TocError::OverwriteDeclined`] when the target exists and the policy
/// or the operator refuses; the existing file is left untouched in that case.
pub fn write_toc_with<R: BufRead, W: Write>(
    toc: &Toc,
    output: impl AsRef<Path>,
    policy: OverwritePolicy,
    input: &mut R,
    prompt: &mut W,
) -> Result<PathBuf, TocError> {
    let path = resolve_output_path(output);
    if path.exists() && !confirm_overwrite(&path, policy, input, prompt)? {
        return Err(TocError::OverwriteDeclined(path));
    }
    fs::write(&path, format_toc(toc)).map_err(|e| TocError::io(&path, e))?;
    Ok(path)
}

// ----------------------- Internal -----------------------

fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    policy: OverwritePolicy,
    input: &mut R,
    prompt: &mut W,
) -> Result<bool, TocError> {
    match policy {
        OverwritePolicy::Always => Ok(true),
        OverwritePolicy::Never => Ok(false),
        OverwritePolicy::Ask => {
            write!(
                prompt,
                "The file {} already exists. Overwrite? (y/n): ",
                path.display()
            )
            .and_then(|_| prompt.flush())
            .map_err(TocError::Prompt)?;
            let mut answer = String::new();
            input.read_line(&mut answer).map_err(TocError::Prompt)?;
            Ok(answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y"))
        }
    }
}
