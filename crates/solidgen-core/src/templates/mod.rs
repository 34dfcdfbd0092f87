//! Source-text templates for generated artifacts
//!
//! This module provides:
//! - The `ArtifactKind` enum (directory root and naming conventions)
//! - The `Template` capability implemented by the two concrete builders
//! - `ComponentTemplate` and `PageTemplate`, which render source text from a
//!   canonical name with no filesystem access

pub mod component;
pub mod page;

pub use component::{ComponentTemplate, ComponentVariant};
pub use page::PageTemplate;

use std::fmt;
use std::path::PathBuf;

/// Indentation width of generated source, in spaces per level
pub(crate) const INDENT_WIDTH: usize = 4;

/// Kinds of artifact this tool can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Component,
    Page,
}

impl ArtifactKind {
    /// User-facing label used in log lines and error messages
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "component",
            ArtifactKind::Page => "page",
        }
    }

    /// Project-relative directory that artifacts of this kind live under
    pub fn base_dir(&self) -> PathBuf {
        match self {
            ArtifactKind::Component => PathBuf::from("src/components"),
            ArtifactKind::Page => PathBuf::from("src/pages"),
        }
    }

    /// Project-relative path of the shared barrel index for this kind
    pub fn index_path(&self) -> PathBuf {
        self.base_dir().join("index.ts")
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Capability shared by the concrete template builders
///
/// `build` is pure and deterministic: the same template value always renders
/// the same source text, and no I/O happens until the scaffolder persists it.
pub trait Template {
    /// Which kind of artifact this template produces
    fn kind(&self) -> ArtifactKind;

    /// Canonical (PascalCase) artifact name, including any kind suffix
    fn name(&self) -> &str;

    /// Render the artifact's source text
    fn build(&self) -> String;
}

/// Line-oriented builder for generated source text
pub(crate) struct SourceWriter {
    buf: String,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Append one line at the given indent level
    pub(crate) fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent * INDENT_WIDTH {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Append an empty line
    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conventions() {
        assert_eq!(ArtifactKind::Component.base_dir(), PathBuf::from("src/components"));
        assert_eq!(ArtifactKind::Page.base_dir(), PathBuf::from("src/pages"));
        assert_eq!(
            ArtifactKind::Page.index_path(),
            PathBuf::from("src/pages/index.ts")
        );
        assert_eq!(ArtifactKind::Component.to_string(), "component");
    }

    #[test]
    fn test_source_writer_indents_by_level() {
        let mut w = SourceWriter::new();
        w.line(0, "a");
        w.line(1, "b");
        w.blank();
        w.line(2, "c");
        assert_eq!(w.finish(), "a\n    b\n\n        c\n");
    }
}
