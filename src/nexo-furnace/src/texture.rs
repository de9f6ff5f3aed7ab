//! Canonical armor texture paths
//!
//! Nexo items point at an item texture such as `armor:item/iron_helmet`. The
//! matching armor layer lives next to it, named after the first `_` token of
//! the file name:
//!
//! ```text
//! armor:item/iron_helmet  (helmet)   -> armor/textures/item/iron_armor_layer_1.png
//! armor:item/iron_legs    (leggings) -> armor/textures/item/iron_armor_layer_2.png
//! copper_boots            (boots)    -> minecraft/textures/copper_armor_layer_1.png
//! ```

use crate::item::ArmorSlot;
use crate::{Error, Result};

/// Namespace used for references without a `namespace:` prefix
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Derive the canonical layer texture path (relative to the assets root).
///
/// References with more than one `:` are rejected.
pub fn build_texture_path(reference: &str, slot: ArmorSlot) -> Result<String> {
    let base = match reference.split_once(':') {
        Some((_, path)) if path.contains(':') => {
            return Err(Error::MalformedReference(reference.to_string()));
        }
        Some((namespace, path)) => format!("{namespace}/textures/{path}"),
        None => format!("{DEFAULT_NAMESPACE}/textures/{reference}"),
    };

    let (dir, file_name) = base.rsplit_once('/').unwrap_or(("", base.as_str()));
    let prefix = file_name.split('_').next().unwrap_or(file_name);

    Ok(format!("{dir}/{prefix}_armor_{}.png", slot.layer()))
}
