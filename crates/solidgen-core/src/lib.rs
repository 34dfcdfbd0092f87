//! Solidgen Core - Shared library for SolidJS scaffolding
//!
//! This library provides the core functionality for generating SolidJS
//! component and page boilerplate. It is designed to be used by a thin CLI
//! binary (`solidgen`) that handles argument parsing, prompts, and exit
//! codes, while everything that produces or persists source text lives here.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure Text** - Name normalization and source-text templates
//!   (no filesystem access, deterministic)
//! - **Layer 2: Collaborators** - Best-effort external formatting via a
//!   subprocess
//! - **Layer 3: Filesystem** - The scaffolding routine that turns generated
//!   text into an artifact directory and merges into the shared barrel index
//!
//! # Example Usage
//!
//! ```ignore
//! use solidgen_core::{to_pascal_case, ComponentTemplate, ComponentVariant};
//! use solidgen_core::{scaffold_template, Formatter};
//!
//! let name = to_pascal_case("shopping cart");
//! let template = ComponentTemplate::new(name, ComponentVariant::Parent);
//! let formatter = Formatter::biome("ShoppingCart.tsx");
//! let created = scaffold_template(&template, base_dir, index_path, &formatter).await?;
//! ```

pub mod format;
pub mod name;
pub mod scaffold;
pub mod templates;

// Re-export main types for convenience
pub use format::{FormatOutcome, Formatter};
pub use name::to_pascal_case;
pub use scaffold::{
    init_kind, preview_template, scaffold_template, CreatedPaths, GeneratedArtifact,
    ScaffoldError, BIOME_DISABLE_IMPORT_SORT,
};
pub use templates::{ArtifactKind, ComponentTemplate, ComponentVariant, PageTemplate, Template};
