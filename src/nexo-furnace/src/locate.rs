//! Finding armor layer textures inside the extracted pack
//!
//! The canonical path derived by [`crate::texture::build_texture_path`] is
//! only a naming convention. Packs often insert an extra token into the file
//! name (`iron_chain_armor_layer_1.png` instead of `iron_armor_layer_1.png`),
//! so when the canonical file is missing a [`FallbackSearch`] looks for
//! `<head>*_<tail>` in the same directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An asset that exists on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Absolute (or asset-root-joined) location of the file
    pub source: PathBuf,
    /// Location relative to the asset root, `/`-separated
    pub relative: String,
}

/// Strategy used when the canonical texture path does not exist
pub trait FallbackSearch {
    /// Find a substitute for `canonical` (relative to `asset_root`)
    fn search(&self, asset_root: &Path, canonical: &str) -> Option<PathBuf>;
}

/// Tolerant file name search using glob patterns.
///
/// For `dir/iron_armor_layer_1.png` this matches `dir/iron*_armor_layer_1.png`.
/// Candidates are visited in filesystem enumeration order, which is not
/// sorted; the first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobSearch;

impl GlobSearch {
    /// Pattern matched against asset-root-relative paths
    pub fn pattern(canonical: &str) -> String {
        let (dir, file_name) = canonical.rsplit_once('/').unwrap_or(("", canonical));
        let head = file_name.split('_').next().unwrap_or(file_name);
        let tail = file_name.split_once('_').map_or(file_name, |(_, rest)| rest);

        if dir.is_empty() {
            format!("{head}*_{tail}")
        } else {
            format!("{dir}/{head}*_{tail}")
        }
    }
}

impl FallbackSearch for GlobSearch {
    fn search(&self, asset_root: &Path, canonical: &str) -> Option<PathBuf> {
        let pattern = Self::pattern(canonical);
        let dir = canonical.rsplit_once('/').map_or("", |(dir, _)| dir);
        let search_root = asset_root.join(dir);

        if !search_root.is_dir() {
            return None;
        }

        // `*` never matches `/`, so only direct children can match
        WalkDir::new(&search_root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .find(|e| {
                relative_path(asset_root, e.path())
                    .is_some_and(|rel| glob_match::glob_match(&pattern, &rel))
            })
            .map(walkdir::DirEntry::into_path)
    }
}

/// Resolves canonical texture paths against an asset root
#[derive(Debug, Clone)]
pub struct AssetLocator<S = GlobSearch> {
    root: PathBuf,
    search: S,
}

impl AssetLocator<GlobSearch> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_search(root, GlobSearch)
    }
}

impl<S: FallbackSearch> AssetLocator<S> {
    pub fn with_search(root: impl Into<PathBuf>, search: S) -> Self {
        Self {
            root: root.into(),
            search,
        }
    }

    /// Locate `canonical`, falling back to the search strategy only when the
    /// canonical file does not exist
    pub fn locate(&self, canonical: &str) -> Option<ResolvedAsset> {
        let direct = self.root.join(canonical);
        if direct.exists() {
            return Some(ResolvedAsset {
                source: direct,
                relative: canonical.to_string(),
            });
        }

        let source = self.search.search(&self.root, canonical)?;
        let relative = relative_path(&self.root, &source)?;
        tracing::debug!("Resolved {} via fallback as {}", canonical, relative);
        Some(ResolvedAsset { source, relative })
    }
}

/// `path` relative to `root`, joined with `/` on every platform
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = rel.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}
