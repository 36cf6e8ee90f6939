//! Domain DTOs for the items service.
//!
//! # Design
//! Field names follow the existing JSON surface (`createdAt`, `isActive`).
//! `isActive` is left out of the output when false, and both creation fields
//! default when absent or `null` so a missing name is reported by the
//! validator rather than by the decoder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store. Always greater than zero.
pub type ItemId = i64;

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_active: bool,
}

impl Item {
    /// Label used by the HTML list page.
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Request payload for creating a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(is_active: bool) -> Item {
        Item {
            id: 1,
            name: "Foo".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            is_active,
        }
    }

    #[test]
    fn item_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample(true)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Foo");
        assert_eq!(json["createdAt"], "2024-05-01T12:30:00Z");
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn inactive_item_omits_is_active() {
        let json = serde_json::to_value(sample(false)).unwrap();
        assert!(json.get("isActive").is_none());
    }

    #[test]
    fn item_without_is_active_deserializes_as_inactive() {
        let item: Item =
            serde_json::from_str(r#"{"id":3,"name":"Bar","createdAt":"2024-05-01T12:30:00Z"}"#)
                .unwrap();
        assert!(!item.is_active);
        assert_eq!(item.status_label(), "Inactive");
    }

    #[test]
    fn new_item_input_defaults_missing_fields() {
        let input: NewItemInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, NewItemInput::default());
    }

    #[test]
    fn new_item_input_accepts_explicit_active() {
        let input: NewItemInput =
            serde_json::from_str(r#"{"name":"Foo","isActive":true}"#).unwrap();
        assert_eq!(input.name, "Foo");
        assert!(input.is_active);
    }

    #[test]
    fn new_item_input_treats_null_as_default() {
        let input: NewItemInput =
            serde_json::from_str(r#"{"name":null,"isActive":null}"#).unwrap();
        assert_eq!(input, NewItemInput::default());
    }

    #[test]
    fn new_item_input_rejects_wrong_types() {
        let result: Result<NewItemInput, _> = serde_json::from_str(r#"{"name":42}"#);
        assert!(result.is_err());
    }
}
