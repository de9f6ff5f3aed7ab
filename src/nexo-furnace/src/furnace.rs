//! Furnace armor mapping aggregation
//!
//! Output shape:
//!
//! ```json
//! {
//!   "items": {
//!     "minecraft:iron_boots": {
//!       "custom_model_data": {
//!         "5": {
//!           "armor_layer": {
//!             "type": "boots",
//!             "texture": "textures/models/armor/textures/item/iron_armor_layer_1.png",
//!             "auto_copy_texture": false
//!           }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::copy::furnace_texture_path;
use crate::item::ArmorSlot;

/// Armor layer assignment for one model id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorLayer {
    #[serde(rename = "type")]
    pub slot: String,
    pub texture: String,
    pub auto_copy_texture: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub armor_layer: ArmorLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub custom_model_data: BTreeMap<i64, ModelEntry>,
}

/// The whole `furnace.json` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnaceData {
    items: BTreeMap<String, MaterialEntry>,
}

impl FurnaceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// `minecraft:<material>`, lower-cased
    pub fn material_key(material: &str) -> String {
        format!("minecraft:{material}").to_lowercase()
    }

    /// Record a texture for `(material, model_id)`. A later merge for the
    /// same pair replaces the earlier one.
    pub fn merge(&mut self, material: &str, model_id: i64, slot: ArmorSlot, relative: &str) {
        let layer = ArmorLayer {
            slot: slot.label().to_string(),
            texture: furnace_texture_path(relative),
            auto_copy_texture: false,
        };

        let previous = self
            .items
            .entry(Self::material_key(material))
            .or_default()
            .custom_model_data
            .insert(model_id, ModelEntry { armor_layer: layer });

        if let Some(previous) = previous {
            tracing::debug!(
                "Replacing {} model {} (was {})",
                material,
                model_id,
                previous.armor_layer.texture
            );
        }
    }

    /// Armor layer recorded for a material key and model id
    pub fn get(&self, material_key: &str, model_id: i64) -> Option<&ArmorLayer> {
        self.items
            .get(material_key)?
            .custom_model_data
            .get(&model_id)
            .map(|entry| &entry.armor_layer)
    }

    /// Total number of model id assignments
    pub fn len(&self) -> usize {
        self.items.values().map(|m| m.custom_model_data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_key() {
        assert_eq!(FurnaceData::material_key("IRON_BOOTS"), "minecraft:iron_boots");
    }

    #[test]
    fn test_merge() {
        let mut data = FurnaceData::new();
        data.merge("IRON_BOOTS", 5, ArmorSlot::Boots, "armor/textures/item/iron_armor_layer_1.png");

        assert_eq!(
            data.get("minecraft:iron_boots", 5),
            Some(&ArmorLayer {
                slot: "boots".into(),
                texture: "textures/models/armor/textures/item/iron_armor_layer_1.png".into(),
                auto_copy_texture: false,
            })
        );
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut data = FurnaceData::new();
        data.merge("IRON_CHESTPLATE", 1, ArmorSlot::Chestplate, "p1.png");
        data.merge("IRON_CHESTPLATE", 1, ArmorSlot::Leggings, "p2.png");
        data.merge("IRON_CHESTPLATE", 2, ArmorSlot::Chestplate, "p3.png");

        let layer = data.get("minecraft:iron_chestplate", 1).unwrap();
        assert_eq!(layer.slot, "leggings");
        assert_eq!(layer.texture, "textures/models/p2.png");
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let mut data = FurnaceData::new();
        data.merge("IRON_BOOTS", 5, ArmorSlot::Boots, "a/b_armor_layer_1.png");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": {
                    "minecraft:iron_boots": {
                        "custom_model_data": {
                            "5": {
                                "armor_layer": {
                                    "type": "boots",
                                    "texture": "textures/models/a/b_armor_layer_1.png",
                                    "auto_copy_texture": false
                                }
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_empty_serializes_to_empty_items() {
        let json = serde_json::to_value(FurnaceData::new()).unwrap();
        assert_eq!(json, serde_json::json!({"items": {}}));
    }
}
