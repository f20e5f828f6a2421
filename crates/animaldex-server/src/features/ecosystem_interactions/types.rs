use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EcosystemInteractionRecord, InteractionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemInteraction {
    pub id: i64,
    pub predator_id: Option<i64>,
    pub prey_id: Option<i64>,
    pub interaction_type: InteractionType,
    pub habitat_id: i64,
    pub description: Option<String>,
    pub strength: i32,
    pub created_by_id: Option<i64>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<EcosystemInteractionRecord> for EcosystemInteraction {
    fn from(record: EcosystemInteractionRecord) -> Self {
        Self {
            id: record.id,
            predator_id: record.predator_id,
            prey_id: record.prey_id,
            interaction_type: record.interaction_type,
            habitat_id: record.habitat_id,
            description: record.description,
            strength: record.strength,
            created_by_id: record.created_by_id,
            is_verified: record.is_verified,
            created_at: record.created_at,
        }
    }
}
