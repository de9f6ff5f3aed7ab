//! Armor item selection from Nexo item definitions
//!
//! A definition file maps item ids to item bodies:
//!
//! ```yaml
//! ruby_helmet:
//!   material: DIAMOND_HELMET
//!   Pack:
//!     custom_model_data: 12
//!     texture: armor:item/ruby_helmet
//! ```
//!
//! Only entries with a truthy `custom_model_data`, a material naming one of
//! the four armor slots, and at least one texture reference are kept.

use crate::value::Value;

/// Armor body slot, detected from the material name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorSlot {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Unknown,
}

impl ArmorSlot {
    /// Recognised slots paired with the material token that selects them, in
    /// match priority order
    const TOKENS: [(&'static str, ArmorSlot); 4] = [
        ("HELMET", ArmorSlot::Helmet),
        ("CHESTPLATE", ArmorSlot::Chestplate),
        ("LEGGINGS", ArmorSlot::Leggings),
        ("BOOTS", ArmorSlot::Boots),
    ];

    /// First slot token (case-sensitive) contained in the material name
    pub fn from_material(material: &str) -> Self {
        Self::TOKENS
            .iter()
            .find(|(token, _)| material.contains(token))
            .map_or(ArmorSlot::Unknown, |(_, slot)| *slot)
    }

    /// Lower-case label written to the furnace mapping
    pub fn label(self) -> &'static str {
        match self {
            ArmorSlot::Helmet => "helmet",
            ArmorSlot::Chestplate => "chestplate",
            ArmorSlot::Leggings => "leggings",
            ArmorSlot::Boots => "boots",
            ArmorSlot::Unknown => "unknown",
        }
    }

    /// Armor model layer holding this slot's texture
    pub fn layer(self) -> &'static str {
        match self {
            ArmorSlot::Leggings => "layer_2",
            _ => "layer_1",
        }
    }
}

impl std::fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One texture reference of one armor item, ready for resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorTexture {
    pub item_id: String,
    pub material: String,
    pub model_id: i64,
    pub slot: ArmorSlot,
    pub reference: String,
}

/// Entry that was skipped because it had the wrong shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub item_id: String,
    pub reason: String,
}

/// Result of scanning one definition document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemScan {
    /// Texture references in document order
    pub textures: Vec<ArmorTexture>,
    pub skipped: Vec<SkippedEntry>,
}

impl ItemScan {
    /// Scan a loaded document. Returns `None` when the document is not a
    /// mapping of item ids.
    pub fn from_document(document: &Value) -> Option<Self> {
        let entries = document.as_mapping()?;
        let mut scan = ItemScan::default();

        for (item_id, body) in entries {
            if !body.is_mapping() {
                scan.skipped.push(SkippedEntry {
                    item_id: item_id.clone(),
                    reason: format!("expected a mapping, found {}", body.type_name()),
                });
                continue;
            }

            match armor_textures(item_id, body) {
                Ok(textures) => scan.textures.extend(textures),
                Err(reason) => scan.skipped.push(SkippedEntry {
                    item_id: item_id.clone(),
                    reason,
                }),
            }
        }

        Some(scan)
    }
}

/// Texture references of one item body. Non-armor items yield nothing;
/// `Err` carries the reason an item could not be read.
fn armor_textures(item_id: &str, body: &Value) -> Result<Vec<ArmorTexture>, String> {
    let material = body.get("material").and_then(Value::as_str).unwrap_or("");
    let Some(pack) = body
        .get("Pack")
        .filter(|p| p.is_mapping())
        .or_else(|| body.get("pack"))
    else {
        return Ok(Vec::new());
    };

    let model_id = match pack.get("custom_model_data") {
        Some(value) if value.is_truthy() => value.as_i64().ok_or_else(|| {
            format!(
                "custom_model_data must be an integer, found {}",
                value.type_name()
            )
        })?,
        _ => return Ok(Vec::new()),
    };

    let slot = ArmorSlot::from_material(material);
    if slot == ArmorSlot::Unknown {
        return Ok(Vec::new());
    }

    let references: Vec<&Value> = match pack.get("textures").and_then(Value::as_sequence) {
        Some(list) if !list.is_empty() => list.iter().collect(),
        _ => pack.get("texture").into_iter().collect(),
    };

    Ok(references
        .into_iter()
        .filter(|r| r.is_truthy())
        .filter_map(Value::as_str)
        .map(|reference| ArmorTexture {
            item_id: item_id.to_string(),
            material: material.to_string(),
            model_id,
            slot,
            reference: reference.to_string(),
        })
        .collect())
}
