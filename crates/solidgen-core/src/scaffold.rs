//! Filesystem scaffolding for generated artifacts
//!
//! `scaffold_template` turns a rendered template into an artifact directory
//! (style stub, source file, local barrel index) and appends one export line
//! to the shared root index. Validation happens before any mutation; failures
//! after the artifact directory is created leave partial state on disk and
//! are reported with the offending path, with no rollback.

use crate::format::Formatter;
use crate::templates::{ArtifactKind, Template};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Header comment that stops biome from re-sorting generated barrel imports
pub const BIOME_DISABLE_IMPORT_SORT: &str =
    "/** biome-ignore-all assist/source/organizeImports: false */\n\n";

/// Errors surfaced by scaffolding and initialization
///
/// Formatter unavailability is deliberately absent: it is absorbed as a
/// fallback to unformatted text (see [`crate::format::FormatOutcome`]) and
/// never fails a generation.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("artifact name is empty after normalization")]
    EmptyName,

    #[error("target directory '{}' does not exist; run `solidgen init` first", path.display())]
    TargetMissing { path: PathBuf },

    #[error("{kind} already exists at '{}'", path.display())]
    AlreadyExists { kind: ArtifactKind, path: PathBuf },

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The three pieces of text a generation produces, rendered once and
/// consumed exactly once by the write step
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// The artifact's source text (pre-formatting)
    pub source_text: String,
    /// Contents of the style stub (always empty)
    pub style_stub_text: String,
    /// Contents of the per-artifact barrel index
    pub local_index_text: String,
}

impl GeneratedArtifact {
    pub fn render<T: Template>(template: &T) -> Self {
        Self {
            source_text: template.build(),
            style_stub_text: String::new(),
            local_index_text: format!(
                "{}{}",
                BIOME_DISABLE_IMPORT_SORT,
                export_line(template.name())
            ),
        }
    }
}

/// Paths created by a successful generation
#[derive(Debug, Clone)]
pub struct CreatedPaths {
    pub dir: PathBuf,
    pub style_stub: PathBuf,
    pub source: PathBuf,
    pub local_index: PathBuf,
}

fn export_line(name: &str) -> String {
    format!("export * from './{}';\n", name)
}

/// Scaffold one artifact under `base_dir` and register it in the shared
/// index at `root_index_path`.
///
/// `base_dir` must already exist (it is created by the explicit init step,
/// never here). The existence check on the artifact directory is
/// check-then-act: a concurrent external mutation can race it, which is
/// accepted for a single-user CLI.
pub async fn scaffold_template<T: Template>(
    template: &T,
    base_dir: &Path,
    root_index_path: &Path,
    formatter: &Formatter,
) -> Result<CreatedPaths, ScaffoldError> {
    let name = template.name();
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    if !base_dir.exists() {
        return Err(ScaffoldError::TargetMissing {
            path: base_dir.to_path_buf(),
        });
    }

    let artifact_dir = base_dir.join(name);
    if artifact_dir.exists() {
        return Err(ScaffoldError::AlreadyExists {
            kind: template.kind(),
            path: artifact_dir,
        });
    }

    fs::create_dir(&artifact_dir)
        .await
        .map_err(ScaffoldError::io(&artifact_dir))?;

    let artifact = GeneratedArtifact::render(template);
    let source_text = formatter.format(&artifact.source_text).await.into_text();

    let style_stub = artifact_dir.join(format!("{}.module.css", name));
    fs::write(&style_stub, &artifact.style_stub_text)
        .await
        .map_err(ScaffoldError::io(&style_stub))?;

    let source = artifact_dir.join(format!("{}.tsx", name));
    fs::write(&source, &source_text)
        .await
        .map_err(ScaffoldError::io(&source))?;

    let local_index = artifact_dir.join("index.ts");
    fs::write(&local_index, &artifact.local_index_text)
        .await
        .map_err(ScaffoldError::io(&local_index))?;

    append_export_line(root_index_path, name).await?;

    Ok(CreatedPaths {
        dir: artifact_dir,
        style_stub,
        source,
        local_index,
    })
}

/// Append exactly one export line to the shared index. Never truncates or
/// rewrites existing lines.
async fn append_export_line(root_index_path: &Path, name: &str) -> Result<(), ScaffoldError> {
    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(root_index_path)
        .await
        .map_err(ScaffoldError::io(root_index_path))?;

    file.write_all(export_line(name).as_bytes())
        .await
        .map_err(ScaffoldError::io(root_index_path))?;

    // tokio's File buffers writes internally; without a flush the append may
    // still be in flight when this returns.
    file.flush()
        .await
        .map_err(ScaffoldError::io(root_index_path))?;

    Ok(())
}

/// Render the artifact's (best-effort formatted) source text without any
/// filesystem mutation. This is the dry-run path.
pub async fn preview_template<T: Template>(template: &T, formatter: &Formatter) -> String {
    formatter.format(&template.build()).await.into_text()
}

/// Initialize the root directory for an artifact kind at `base_dir`,
/// creating any missing ancestors and a header-only shared index.
///
/// Returns the path of the created index file.
pub async fn init_kind(kind: ArtifactKind, base_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    if base_dir.exists() {
        return Err(ScaffoldError::AlreadyExists {
            kind,
            path: base_dir.to_path_buf(),
        });
    }

    fs::create_dir_all(base_dir)
        .await
        .map_err(ScaffoldError::io(base_dir))?;

    let index_path = base_dir.join("index.ts");
    fs::write(&index_path, BIOME_DISABLE_IMPORT_SORT)
        .await
        .map_err(ScaffoldError::io(&index_path))?;

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ComponentTemplate, ComponentVariant, PageTemplate};
    use tempfile::TempDir;

    /// A formatter that never resolves, so tests deterministically exercise
    /// the unformatted fallback and persist the template text verbatim.
    fn no_formatter() -> Formatter {
        Formatter::new("solidgen-test-no-such-formatter", vec![])
    }

    fn badge(variant: ComponentVariant) -> ComponentTemplate {
        ComponentTemplate::new("Badge".to_string(), variant)
    }

    async fn init_tmp(kind: ArtifactKind) -> (TempDir, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let base_dir = tmp.path().join(kind.base_dir());
        let index_path = init_kind(kind, &base_dir).await.unwrap();
        (tmp, base_dir, index_path)
    }

    #[tokio::test]
    async fn test_scaffold_creates_all_files() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Component).await;

        let created = scaffold_template(
            &badge(ComponentVariant::Void),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap();

        assert_eq!(created.dir, base_dir.join("Badge"));
        assert_eq!(
            std::fs::read_to_string(&created.style_stub).unwrap(),
            ""
        );

        let source = std::fs::read_to_string(&created.source).unwrap();
        assert!(source.contains("export const Badge: VoidComponent<Props>"));

        let local_index = std::fs::read_to_string(&created.local_index).unwrap();
        assert_eq!(
            local_index,
            format!("{}export * from './Badge';\n", BIOME_DISABLE_IMPORT_SORT)
        );
    }

    #[tokio::test]
    async fn test_root_index_is_appended_byte_for_byte() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Component).await;
        let before = std::fs::read_to_string(&index_path).unwrap();

        scaffold_template(
            &badge(ComponentVariant::Void),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap();

        let after = std::fs::read_to_string(&index_path).unwrap();
        assert_eq!(after, format!("{}export * from './Badge';\n", before));
    }

    #[tokio::test]
    async fn test_second_scaffold_fails_and_leaves_first_untouched() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Component).await;

        let created = scaffold_template(
            &badge(ComponentVariant::Base),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap();
        let first_source = std::fs::read_to_string(&created.source).unwrap();
        let first_index = std::fs::read_to_string(&index_path).unwrap();

        let err = scaffold_template(
            &badge(ComponentVariant::Parent),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));

        assert_eq!(std::fs::read_to_string(&created.source).unwrap(), first_source);
        assert_eq!(std::fs::read_to_string(&index_path).unwrap(), first_index);
    }

    #[tokio::test]
    async fn test_missing_target_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let base_dir = tmp.path().join("src/components");
        let index_path = base_dir.join("index.ts");

        let err = scaffold_template(
            &badge(ComponentVariant::Base),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::TargetMissing { .. }));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_mutation() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Component).await;
        let before = std::fs::read_to_string(&index_path).unwrap();

        let err = scaffold_template(
            &ComponentTemplate::new(String::new(), ComponentVariant::Base),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::EmptyName));
        assert_eq!(std::fs::read_to_string(&index_path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_page_scaffold_uses_suffixed_name() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Page).await;

        let created = scaffold_template(
            &PageTemplate::new("User".to_string()),
            &base_dir,
            &index_path,
            &no_formatter(),
        )
        .await
        .unwrap();

        assert_eq!(created.dir, base_dir.join("UserPage"));
        assert!(created.source.ends_with("UserPage.tsx"));
        assert!(std::fs::read_to_string(&index_path)
            .unwrap()
            .ends_with("export * from './UserPage';\n"));
    }

    #[tokio::test]
    async fn test_preview_renders_without_touching_the_filesystem() {
        let tmp = TempDir::new().unwrap();

        let name = crate::name::to_pascal_case("shopping cart");
        let template = ComponentTemplate::new(name, ComponentVariant::Parent);
        let text = preview_template(&template, &no_formatter()).await;

        assert!(text.contains("export const ShoppingCart: ParentComponent<Props>"));
        assert!(text.contains("children: JSX.Element;"));
        assert!(!text.contains("children?:"));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_init_creates_header_only_index() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Component).await;

        assert!(base_dir.is_dir());
        assert_eq!(
            std::fs::read_to_string(&index_path).unwrap(),
            BIOME_DISABLE_IMPORT_SORT
        );
    }

    #[tokio::test]
    async fn test_init_twice_fails_and_keeps_index() {
        let (_tmp, base_dir, index_path) = init_tmp(ArtifactKind::Page).await;
        let before = std::fs::read_to_string(&index_path).unwrap();

        let err = init_kind(ArtifactKind::Page, &base_dir).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&index_path).unwrap(), before);
    }
}
