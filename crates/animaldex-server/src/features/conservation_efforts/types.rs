use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::ConservationEffortRecord;

/// Projection shown on the conservation action center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationEffortSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub organization_name: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,
    pub conservation_problem: Option<String>,
    pub current_status: Option<String>,
    pub petition_url: Option<String>,
    pub volunteer_url: Option<String>,
    pub donation_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationEffortDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub organization_name: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub conservation_problem: Option<String>,
    pub proposed_solutions: Option<JsonValue>,
    pub success_metrics: Option<JsonValue>,
    pub current_status: Option<String>,
    pub petition_url: Option<String>,
    pub volunteer_url: Option<String>,
    pub donation_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<ConservationEffortRecord> for ConservationEffortSummary {
    fn from(record: ConservationEffortRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            organization_name: record.organization_name,
            website_url: record.website_url,
            location: record.location,
            conservation_problem: record.conservation_problem,
            current_status: record.current_status,
            petition_url: record.petition_url,
            volunteer_url: record.volunteer_url,
            donation_url: record.donation_url,
            image_url: record.image_url,
        }
    }
}

impl From<ConservationEffortRecord> for ConservationEffortDetail {
    fn from(record: ConservationEffortRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            organization_name: record.organization_name,
            website_url: record.website_url,
            location: record.location,
            image_url: record.image_url,
            conservation_problem: record.conservation_problem,
            proposed_solutions: record.proposed_solutions,
            success_metrics: record.success_metrics,
            current_status: record.current_status,
            petition_url: record.petition_url,
            volunteer_url: record.volunteer_url,
            donation_url: record.donation_url,
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}
