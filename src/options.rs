use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocOptions {
    pub root: PathBuf,
    pub extra_extension: Option<String>,
    pub exclude_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
}
impl Default for TocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extra_extension: None,
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct TocBuilder {
    options: TocOptions,
}
impl TocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extra_extension(mut self, ext: Option<String>) -> Self {
        self.options.extra_extension = ext;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> TocOptions {
        self.options
    }
}
