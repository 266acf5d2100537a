//! Text or binary classification by file extension, plus MIME lookup for the rest.

use std::path::Path;

/// Extensions whose files are inlined as text, compared case-insensitively.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".csv", ".html", ".css", ".js", ".json", ".xml", ".log", ".md", ".yaml", ".yml",
    ".ini", ".cfg", ".conf", ".sh", ".sql", ".php", ".c", ".cpp", ".h", ".hpp", ".java", ".py",
    ".rb", ".pl", ".lua", ".perl", ".bat", ".ps1", ".r", ".scala", ".swift", ".vb", ".ts",
    ".jsx", ".tsx", ".scss", ".sass", ".less", ".coffee", ".ejs", ".handlebars", ".pug",
    ".tmpl",
];

/// Placeholder reported when no MIME type can be guessed.
pub const UNKNOWN_MIME: &str = "unknown";

/// Prefixes `ext` with a dot if it lacks one. Empty input yields `None`.
pub fn normalize_extension(ext: &str) -> Option<String> {
    if ext.is_empty() {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{}", ext))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextClassifier {
    extra: Option<String>,
}

impl TextClassifier {
    pub fn new(extra_extension: Option<&str>) -> Self {
        Self {
            extra: extra_extension
                .and_then(normalize_extension)
                .map(|ext| ext.to_lowercase()),
        }
    }

    /// Whether the file at `path` should have its contents inlined.
    ///
    /// Files without an extension, including dotfiles such as `.bashrc`, are never text.
    pub fn is_text(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
        TEXT_EXTENSIONS.contains(&ext.as_str()) || self.extra.as_deref() == Some(ext.as_str())
    }
}

/// Guesses the MIME type of `path` from its extension.
///
/// `application/octet-stream` carries no information about the file, so it is
/// reported as [`UNKNOWN_MIME`] like a failed lookup.
pub fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .filter(|mime| *mime != mime_guess::mime::APPLICATION_OCTET_STREAM)
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| UNKNOWN_MIME.to_string())
}
