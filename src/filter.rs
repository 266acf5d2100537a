//! Glob-based exclusion of entries, matched on paths relative to the walk root.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// Tests entries against a set of shell-style exclusion patterns.
///
/// Patterns follow `fnmatch` semantics: `*` and `?` also match `/`, so `*.log`
/// excludes log files at any depth. A pattern that fails to compile is dropped
/// with a warning and matches nothing.
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    root: PathBuf,
    set: GlobSet,
}

impl ExclusionMatcher {
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Ignoring invalid exclusion pattern '{}': {}", pattern, _e);
                }
            }
        }
        let set = builder.build().unwrap_or_else(|_e| {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to build exclusion set, nothing will be excluded: {}", _e);
            GlobSet::empty()
        });
        Self {
            root: root.into(),
            set,
        }
    }

    /// Returns true if `path`, taken relative to the root, matches any pattern.
    ///
    /// The root itself is never excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            return false;
        }
        self.set.is_match(relative)
    }

    /// Tests a bare string against the patterns.
    pub fn matches(&self, candidate: &str) -> bool {
        self.set.is_match(candidate)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
