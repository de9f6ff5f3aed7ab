//! Nexo resource pack to furnace armor mapping converter
//!
//! Nexo item definitions declare armor textures per item. Furnace wants a
//! single `furnace.json` that maps each vanilla material to the armor layer
//! texture used for every `custom_model_data` id, plus the textures copied
//! into its own `textures/models` tree.
//!
//! # Pipeline
//!
//! 1. Extract the resource pack archive ([`archive`])
//! 2. Load each `.yml`/`.json` item definition ([`document`])
//! 3. Pick the armor items and their texture references ([`item`])
//! 4. Derive the canonical `*_armor_layer_N.png` path ([`texture`])
//! 5. Find the actual file, falling back to a tolerant search ([`locate`])
//! 6. Copy it into the output tree ([`copy`])
//! 7. Record it in the furnace mapping ([`furnace`])
//!
//! [`convert::Converter`] drives the whole thing, isolating failures per file.

pub mod archive;
pub mod convert;
pub mod copy;
pub mod document;
mod file_utils;
pub mod furnace;
pub mod item;
pub mod locate;
pub mod report;
pub mod texture;
pub mod value;

use std::path::PathBuf;

// Re-export main types
pub use convert::{ConversionSummary, Converter, Layout};
pub use furnace::{ArmorLayer, FurnaceData};
pub use item::{ArmorSlot, ArmorTexture, ItemScan};
pub use locate::{AssetLocator, FallbackSearch, GlobSearch, ResolvedAsset};
pub use report::{Diagnostic, DiagnosticKind, Reporter, TracingReporter};
pub use texture::build_texture_path;
pub use value::Value;

/// Errors from pack conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to extract {archive:?}: {source}")]
    Extraction {
        archive: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("Malformed texture reference '{0}': expected at most one ':'")]
    MalformedReference(String),

    #[error("Unsupported document format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
