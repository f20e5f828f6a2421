use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::HabitatRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub climate: Option<String>,
    pub key_characteristics: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitatDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub climate: Option<String>,
    pub geography: Option<String>,
    pub key_characteristics: Vec<String>,
    pub map_coordinates: Option<JsonValue>,
    pub image_url: Option<String>,
}

impl From<HabitatRecord> for HabitatSummary {
    fn from(record: HabitatRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            climate: record.climate,
            key_characteristics: record.key_characteristics.unwrap_or_default(),
            image_url: record.image_url,
        }
    }
}

impl From<HabitatRecord> for HabitatDetail {
    fn from(record: HabitatRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            climate: record.climate,
            geography: record.geography,
            key_characteristics: record.key_characteristics.unwrap_or_default(),
            map_coordinates: record.map_coordinates,
            image_url: record.image_url,
        }
    }
}
