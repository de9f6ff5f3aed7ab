//! Copying resolved textures into the furnace output tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::locate::ResolvedAsset;
use crate::Result;

/// Directory (relative to the output root) that receives copied textures
pub const TEXTURE_DIR: &str = "textures/models";

/// Copy a resolved asset to `<output_root>/textures/models/<relative>`,
/// creating parent directories. Returns the destination path.
pub fn copy_texture(asset: &ResolvedAsset, output_root: &Path) -> Result<PathBuf> {
    let destination = output_root.join(TEXTURE_DIR).join(&asset.relative);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&asset.source, &destination)?;
    Ok(destination)
}

/// Texture path as furnace expects it in the mapping
pub fn furnace_texture_path(relative: &str) -> String {
    format!("{TEXTURE_DIR}/{relative}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_creates_mirrored_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("assets/armor/textures/item/iron_armor_layer_1.png");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, b"pixels").unwrap();

        let asset = ResolvedAsset {
            source,
            relative: "armor/textures/item/iron_armor_layer_1.png".into(),
        };
        let output = temp_dir.path().join("output");
        let destination = copy_texture(&asset, &output).unwrap();

        assert_eq!(
            destination,
            output.join("textures/models/armor/textures/item/iron_armor_layer_1.png")
        );
        assert_eq!(fs::read(&destination).unwrap(), b"pixels");
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let asset = ResolvedAsset {
            source: temp_dir.path().join("gone.png"),
            relative: "a/gone.png".into(),
        };
        assert!(copy_texture(&asset, temp_dir.path()).is_err());
    }

    #[test]
    fn test_furnace_texture_path() {
        assert_eq!(
            furnace_texture_path("armor/textures/item/iron_armor_layer_1.png"),
            "textures/models/armor/textures/item/iron_armor_layer_1.png"
        );
    }
}
