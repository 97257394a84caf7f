//! Serde model for the document store's tagged-value wire format.
//!
//! The listing endpoint wraps documents in an envelope; each document field
//! is a tagged union carrying exactly one of a handful of value kinds. Only
//! the tags this feed consumes are modeled (string, boolean,
//! array-of-map); any other tag deserializes to an empty `FieldValue` and
//! reads as absent through the typed accessors.
use serde::Deserialize;
use std::collections::HashMap;

/// Envelope returned by the document-listing endpoint. A missing
/// `documents` key means the collection is empty, not that the response is
/// malformed.
#[derive(Deserialize, Debug, Default)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// One raw document: a full resource path plus its field map.
#[derive(Deserialize, Debug)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
}

/// Field map of a document or of a nested map value, keyed by field name.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct Fields(HashMap<String, FieldValue>);

/// Tagged value: at most one of the optionals is set.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub string_value: Option<String>,
    pub boolean_value: Option<bool>,
    pub array_value: Option<ArrayValue>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<ArrayEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArrayEntry {
    pub map_value: Option<MapValue>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct MapValue {
    #[serde(default)]
    pub fields: Fields,
}

impl Fields {
    /// String-tagged field, or `None` when the field or tag is absent.
    pub fn str_opt(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.string_value.as_deref()
    }

    /// String-tagged field with a default for absent fields or tags.
    pub fn str_or(&self, name: &str, default: &str) -> String {
        self.str_opt(name).unwrap_or(default).to_string()
    }

    /// Boolean-tagged field with a default for absent fields or tags.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.0
            .get(name)
            .and_then(|v| v.boolean_value)
            .unwrap_or(default)
    }

    /// Field maps of an array-of-map field, in source order. Absent fields,
    /// absent tags, and non-map array entries all read as empty.
    pub fn maps<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Fields> + 'a {
        self.0
            .get(name)
            .and_then(|v| v.array_value.as_ref())
            .map(|a| a.values.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| entry.map_value.as_ref())
            .map(|m| &m.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_fields() -> Fields {
        serde_json::from_value(json!({
            "slug": { "stringValue": "cozy-fall" },
            "featured": { "booleanValue": true },
            "rating": { "integerValue": "5" },
            "items": { "arrayValue": { "values": [
                { "mapValue": { "fields": { "name": { "stringValue": "Wool coat" } } } },
                { "mapValue": { "fields": {} } }
            ] } }
        }))
        .unwrap()
    }

    #[test]
    fn string_accessor_defaults_when_absent() {
        let f = sample_fields();
        assert_eq!(f.str_or("slug", ""), "cozy-fall");
        assert_eq!(f.str_or("season", "fall"), "fall");
        // Wrong tag reads as absent.
        assert_eq!(f.str_or("featured", "nope"), "nope");
    }

    #[test]
    fn bool_accessor_defaults_when_absent() {
        let f = sample_fields();
        assert!(f.bool_or("featured", false));
        assert!(!f.bool_or("isAccessory", false));
    }

    #[test]
    fn maps_accessor_walks_array_entries() {
        let f = sample_fields();
        let names: Vec<String> = f.maps("items").map(|m| m.str_or("name", "")).collect();
        assert_eq!(names, vec!["Wool coat".to_string(), String::new()]);
        assert_eq!(f.maps("missing").count(), 0);
    }

    #[test]
    fn unknown_tag_is_tolerated() {
        let f = sample_fields();
        assert_eq!(f.str_opt("rating"), None);
    }

    #[test]
    fn envelope_without_documents_is_empty() {
        let resp: ListDocumentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.documents.is_empty());
    }

    #[test]
    fn document_without_fields_is_empty() {
        let doc: Document =
            serde_json::from_value(json!({ "name": "projects/p/documents/outfits/x" })).unwrap();
        assert_eq!(doc.fields.str_opt("slug"), None);
    }
}
