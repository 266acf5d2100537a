//! # mdtoc
//!
//! `mdtoc` walks a directory tree and renders it as a single Markdown document: every
//! directory becomes a heading, every file a list entry. Recognized text files have their
//! lines inlined underneath; anything else is annotated with its guessed MIME type.
//!
//! Entries are visited depth-first in lexicographic order. Exclusion patterns are shell
//! globs matched against each entry's path relative to the root, and an excluded
//! directory hides its whole subtree.
//!
//! The option, line and result types derive `serde`'s `Serialize`/`Deserialize`, so
//! callers can load [`TocOptions`] from a config file or emit a [`Toc`] in another format.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use mdtoc::{OverwritePolicy, TocBuilder, generate};
//!
//! let options = TocBuilder::new("./project")
//!     .extra_extension(Some("rs".into()))
//!     .exclude_patterns(vec![".git".into(), "target".into()])
//!     .build();
//!
//! let written = generate(&options, "snapshot", OverwritePolicy::Always)
//!     .expect("Failed to generate TOC");
//! println!("Wrote {}", written.display());
//! ```

mod classify;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use classify::{TEXT_EXTENSIONS, TextClassifier, UNKNOWN_MIME, mime_type, normalize_extension};
pub use engine::{build_toc, generate, validate};
pub use error::TocError;
pub use filter::ExclusionMatcher;
pub use options::{TocBuilder, TocOptions};
pub use output::{OverwritePolicy, format_toc, resolve_output_path, write_toc, write_toc_with};
pub use types::{Toc, TocLine, TocStats};
