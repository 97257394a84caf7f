use serde::{Deserialize, Serialize};

/// One garment or accessory inside an outfit. Owned entirely by its parent
/// record; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub image: String,
    pub link: String,
    pub alt_text: String,
    pub is_accessory: bool,
    pub category: String,
}

/// Canonical flattened outfit record consumed by the site build. Every field
/// is always present in the serialized form; absent source fields are filled
/// with per-field defaults during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: String,
    pub main_image: String,
    pub season: String,
    pub slug: String,
    pub seo_title: String,
    pub meta_description: String,
    pub main_image_alt: String,
    pub full_seo_description: String,
    pub outfit_code: String,
    pub date_added: String,
    pub items: Vec<Item>,
}
