//! Pack conversion driver
//!
//! Extracts the pack archive once, then walks every item definition file,
//! resolving and copying armor textures and recording them in the furnace
//! mapping. A failure inside one file is reported and the next file is
//! processed; textures that file already contributed stay recorded.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::extract_archive;
use crate::copy::copy_texture;
use crate::document::{load_document, write_json, DocumentFormat};
use crate::file_utils::collect_files_with_extension;
use crate::furnace::FurnaceData;
use crate::item::{ArmorTexture, ItemScan};
use crate::locate::{AssetLocator, FallbackSearch, GlobSearch};
use crate::report::{Diagnostic, DiagnosticKind, Reporter};
use crate::texture::build_texture_path;
use crate::{Error, Result};

/// Where the pack comes from and where the furnace output goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Resource pack archive
    pub archive: PathBuf,
    /// Directory the archive is extracted into
    pub extract_dir: PathBuf,
    /// Asset root inside the extracted pack
    pub assets: PathBuf,
    /// Root of the item definition files
    pub items: PathBuf,
    /// Output root; textures land in `<output>/textures/models`
    pub output: PathBuf,
    /// Name of the mapping file written into `output`
    pub output_file: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            archive: PathBuf::from("Nexo/pack/pack.zip"),
            extract_dir: PathBuf::from("Nexo/pack"),
            assets: PathBuf::from("Nexo/pack/assets"),
            items: PathBuf::from("Nexo/items"),
            output: PathBuf::from("output/nexo"),
            output_file: "furnace.json".to_string(),
        }
    }
}

impl Layout {
    /// Re-base every relative path onto `base`
    pub fn rooted(&self, base: &Path) -> Self {
        Self {
            archive: base.join(&self.archive),
            extract_dir: base.join(&self.extract_dir),
            assets: base.join(&self.assets),
            items: base.join(&self.items),
            output: base.join(&self.output),
            output_file: self.output_file.clone(),
        }
    }

    /// Full path of the mapping file
    pub fn furnace_file(&self) -> PathBuf {
        self.output.join(&self.output_file)
    }
}

/// Counters for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub entries_skipped: usize,
    pub textures_copied: usize,
    pub textures_missing: usize,
}

impl std::fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Files: {} processed, {} skipped, {} failed; Textures: {} copied, {} missing; Entries skipped: {}",
            self.files_processed,
            self.files_skipped,
            self.files_failed,
            self.textures_copied,
            self.textures_missing,
            self.entries_skipped
        )
    }
}

/// Converts one pack layout into a furnace mapping
pub struct Converter<S = GlobSearch> {
    layout: Layout,
    locator: AssetLocator<S>,
    furnace: FurnaceData,
    summary: ConversionSummary,
    skip_extract: bool,
}

impl Converter<GlobSearch> {
    pub fn new(layout: Layout) -> Self {
        Self::with_search(layout, GlobSearch)
    }
}

impl<S: FallbackSearch> Converter<S> {
    /// Use a custom fallback strategy for missing canonical textures
    pub fn with_search(layout: Layout, search: S) -> Self {
        let locator = AssetLocator::with_search(layout.assets.clone(), search);
        Self {
            layout,
            locator,
            furnace: FurnaceData::new(),
            summary: ConversionSummary::default(),
            skip_extract: false,
        }
    }

    /// Reuse an already extracted pack instead of unpacking the archive
    pub fn skip_extract(mut self, skip: bool) -> Self {
        self.skip_extract = skip;
        self
    }

    pub fn furnace(&self) -> &FurnaceData {
        &self.furnace
    }

    /// Run the full conversion and write the mapping file.
    ///
    /// Only archive extraction and the final write are fatal.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<ConversionSummary> {
        fs::create_dir_all(&self.layout.output)?;

        if self.skip_extract {
            tracing::info!("Using extracted pack at {}", self.layout.extract_dir.display());
        } else {
            let archive = &self.layout.archive;
            let written = extract_archive(archive, &self.layout.extract_dir).map_err(|e| {
                Error::Extraction {
                    archive: archive.clone(),
                    source: Box::new(e),
                }
            })?;
            tracing::info!("Extracted {} files from {}", written, archive.display());
        }

        let files = collect_files_with_extension(&self.layout.items, DocumentFormat::EXTENSIONS);
        tracing::info!(
            "Found {} item definition files in {}",
            files.len(),
            self.layout.items.display()
        );

        for file in &files {
            tracing::debug!("Processing {}", file.display());
            if let Err(e) = self.process_file(file, reporter) {
                self.summary.files_failed += 1;
                reporter.report(Diagnostic::new(
                    file,
                    DiagnosticKind::FileProcessing,
                    e.to_string(),
                ));
            }
        }

        let furnace_file = self.layout.furnace_file();
        write_json(&furnace_file, &self.furnace)?;
        tracing::info!(
            "Wrote {} armor mappings to {}",
            self.furnace.len(),
            furnace_file.display()
        );

        Ok(self.summary.clone())
    }

    /// Load one definition file and process its armor textures
    pub fn process_file(&mut self, file: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        let document = load_document(file)?;

        let Some(scan) = ItemScan::from_document(&document) else {
            self.summary.files_skipped += 1;
            reporter.report(Diagnostic::new(
                file,
                DiagnosticKind::Structural,
                format!("expected a mapping of items, found {}", document.type_name()),
            ));
            return Ok(());
        };

        for skipped in &scan.skipped {
            self.summary.entries_skipped += 1;
            reporter.report(Diagnostic::new(
                file,
                DiagnosticKind::Structural,
                format!("{}: {}", skipped.item_id, skipped.reason),
            ));
        }

        for texture in &scan.textures {
            self.process_texture(file, texture, reporter)?;
        }

        self.summary.files_processed += 1;
        Ok(())
    }

    fn process_texture(
        &mut self,
        file: &Path,
        texture: &ArmorTexture,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let canonical = build_texture_path(&texture.reference, texture.slot)?;

        let Some(asset) = self.locator.locate(&canonical) else {
            self.summary.textures_missing += 1;
            reporter.report(Diagnostic::new(
                file,
                DiagnosticKind::MissingAsset,
                format!(
                    "{} (item {}, texture {})",
                    canonical, texture.item_id, texture.reference
                ),
            ));
            return Ok(());
        };

        copy_texture(&asset, &self.layout.output)?;
        self.furnace
            .merge(&texture.material, texture.model_id, texture.slot, &asset.relative);
        self.summary.textures_copied += 1;
        Ok(())
    }
}
