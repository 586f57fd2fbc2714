//! Local repair vendor types.
//!
//! Vendor listings come back from the LLM as loosely structured JSON;
//! deserialization is lenient so one malformed entry never sinks the
//! whole search.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local repair shop suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalVendor {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub specialization: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub rating: f64,
    pub reviews_count: i64,
    pub distance: String,
    pub estimated_cost: String,
    pub hours: String,
    pub website: Option<String>,
}

impl Default for LocalVendor {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            specialization: String::new(),
            address: String::new(),
            phone: String::new(),
            email: None,
            rating: 4.0,
            reviews_count: 0,
            distance: "Unknown".to_string(),
            estimated_cost: "Call for quote".to_string(),
            hours: "Call for hours".to_string(),
            website: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_entry_fills_defaults() {
        let vendor: LocalVendor =
            serde_json::from_str(r#"{"name": "Ace Phone Repair"}"#).unwrap();
        assert_eq!(vendor.name, "Ace Phone Repair");
        assert!((vendor.rating - 4.0).abs() < f64::EPSILON);
        assert_eq!(vendor.estimated_cost, "Call for quote");
    }

    #[test]
    fn array_of_entries_parses() {
        let vendors: Vec<LocalVendor> = serde_json::from_str(
            r#"[{"name": "A", "rating": 4.7, "reviews_count": 12}, {"name": "B"}]"#,
        )
        .unwrap();
        assert_eq!(vendors.len(), 2);
        assert!((vendors[0].rating - 4.7).abs() < f64::EPSILON);
    }
}
