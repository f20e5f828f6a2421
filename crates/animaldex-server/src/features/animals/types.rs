//! Response shapes for animals
//!
//! Optional columns always serialize, as `null` when unset, and list
//! columns serialize as `[]` when NULL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::{AnimalRecord, ConservationStatus};

/// Card-sized projection used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSummary {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub conservation_status: Option<ConservationStatus>,
    pub image_urls: Vec<String>,
    pub diet: Option<String>,
}

/// Every public field of an animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalDetail {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub classification: Option<JsonValue>,
    pub conservation_status: Option<ConservationStatus>,
    pub description: Option<String>,
    pub fun_facts: Vec<String>,
    pub diet: Option<String>,
    pub lifespan: Option<String>,
    pub size_info: Option<JsonValue>,
    pub image_urls: Vec<String>,
    pub video_urls: Vec<String>,
    pub audio_urls: Vec<String>,
    pub external_api_id: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl From<AnimalRecord> for AnimalSummary {
    fn from(record: AnimalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            scientific_name: record.scientific_name,
            conservation_status: record.conservation_status,
            image_urls: record.image_urls.unwrap_or_default(),
            diet: record.diet,
        }
    }
}

impl From<AnimalRecord> for AnimalDetail {
    fn from(record: AnimalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            scientific_name: record.scientific_name,
            common_names: record.common_names.unwrap_or_default(),
            classification: record.classification,
            conservation_status: record.conservation_status,
            description: record.description,
            fun_facts: record.fun_facts.unwrap_or_default(),
            diet: record.diet,
            lifespan: record.lifespan,
            size_info: record.size_info,
            image_urls: record.image_urls.unwrap_or_default(),
            video_urls: record.video_urls.unwrap_or_default(),
            audio_urls: record.audio_urls.unwrap_or_default(),
            external_api_id: record.external_api_id,
            last_updated: record.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AnimalRecord {
        AnimalRecord {
            id: 7,
            name: "Honeybee".to_string(),
            scientific_name: "Apis mellifera".to_string(),
            common_names: None,
            classification: None,
            conservation_status: Some(ConservationStatus::Vulnerable),
            description: None,
            fun_facts: None,
            diet: Some("Herbivore (nectar and pollen)".to_string()),
            lifespan: None,
            size_info: None,
            image_urls: None,
            video_urls: Some(vec!["https://example.test/bee.mp4".to_string()]),
            audio_urls: None,
            external_api_id: Some("gbif:1341976".to_string()),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_null_lists_become_empty_arrays() {
        let detail = AnimalDetail::from(record());
        assert!(detail.common_names.is_empty());
        assert!(detail.fun_facts.is_empty());
        assert_eq!(detail.video_urls.len(), 1);
    }

    #[test]
    fn test_summary_serializes_explicit_nulls() {
        let mut rec = record();
        rec.conservation_status = None;
        rec.diet = None;
        let json = serde_json::to_value(AnimalSummary::from(rec)).unwrap();

        assert_eq!(json["conservation_status"], JsonValue::Null);
        assert_eq!(json["diet"], JsonValue::Null);
        assert_eq!(json["image_urls"], serde_json::json!([]));
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_detail_serializes_status_label() {
        let json = serde_json::to_value(AnimalDetail::from(record())).unwrap();
        assert_eq!(json["conservation_status"], "Vulnerable");
        assert_eq!(json["description"], JsonValue::Null);
        assert_eq!(json["external_api_id"], "gbif:1341976");
    }

    #[test]
    fn test_detail_carries_every_column() {
        let mut rec = record();
        rec.external_api_id = None;
        let json = serde_json::to_value(AnimalDetail::from(rec)).unwrap();

        assert_eq!(json["external_api_id"], JsonValue::Null);
        assert_eq!(json.as_object().unwrap().len(), 16);
    }
}
