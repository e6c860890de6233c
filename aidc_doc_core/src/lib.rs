//! `aidc_doc_core` generates the application extension section of the AIDC
//! Toolkit documentation site. It walks a catalog of spreadsheet function
//! descriptors and writes one localized Markdown page per function and
//! locale, an index page per namespace, and a sidebar JSON file per locale
//! for the site generator.
//!
//! ## Processing Pipeline
//!
//! ```text
//! aidc-doc.toml + catalog (JSON / TOML / YAML)
//!   → generate (walks namespaces, categories, classes and methods)
//!   → DocumentationRenderer (GeneratorCallbacks)
//!       on_initialize  resets every locale's output directory
//!       on_namespace   writes index.md per locale
//!       on_category    records sidebar groups
//!       on_method      writes <name>.md per locale
//!       on_finalize    writes the sidebar per locale
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `aidc-doc.toml` and catalog loading.
//! - [`descriptor`] — Catalog, class, method and parameter descriptors.
//! - [`locale`] — Per-locale resource strings and `{{placeholder}}` interpolation.
//! - [`generator`] — The callback interface and the traversal driving it.
//! - [`renderer`] — The callback implementation that writes the site.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aidc_doc_core::DocConfig;
//! use aidc_doc_core::DocumentationRenderer;
//! use aidc_doc_core::generate;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = DocConfig::load_or_default(root).unwrap();
//! let catalog = config.load_catalog(root).unwrap();
//!
//! let mut renderer = DocumentationRenderer::new(root, &config);
//! generate(&catalog, &mut renderer).unwrap();
//! println!("{} page(s) written", renderer.pages_written());
//! ```

pub use config::*;
pub use descriptor::*;
pub use error::*;
pub use generator::*;
pub use locale::*;
pub use renderer::*;
pub use tree::*;

pub mod config;
pub mod descriptor;
mod error;
pub mod generator;
pub mod locale;
pub(crate) mod markdown;
pub mod renderer;
mod tree;

#[cfg(test)]
mod __fixtures;
