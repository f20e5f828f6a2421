//! Response shapes for learners and their activity
//!
//! The password hash stays on [`UserRecord`]; no shape here carries it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    AnimalDiscoveryRecord, UserConservationActionRecord, UserProgressRecord, UserRecord, UserRole,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub school: Option<String>,
    pub grade_level: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<UserRecord> for UserSummary {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            full_name: record.full_name,
            role: record.role,
        }
    }
}

impl From<UserRecord> for UserDetail {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            username: record.username,
            full_name: record.full_name,
            role: record.role,
            school: record.school,
            grade_level: record.grade_level,
            location: record.location,
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}

/// Activity counters without the NGSS breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgressSummary {
    pub user_id: i64,
    pub animals_discovered: i32,
    pub habitats_explored: i32,
    pub interactions_created: i32,
    pub conservation_actions_taken: i32,
    pub badges_earned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgressDetail {
    pub id: i64,
    pub user_id: i64,
    pub animals_discovered: i32,
    pub habitats_explored: i32,
    pub interactions_created: i32,
    pub conservation_actions_taken: i32,
    pub ms_ls2_2_activities: i32,
    pub ms_ls2_5_activities: i32,
    pub badges_earned: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl From<UserProgressRecord> for UserProgressSummary {
    fn from(record: UserProgressRecord) -> Self {
        Self {
            user_id: record.user_id,
            animals_discovered: record.animals_discovered,
            habitats_explored: record.habitats_explored,
            interactions_created: record.interactions_created,
            conservation_actions_taken: record.conservation_actions_taken,
            badges_earned: record.badges_earned,
        }
    }
}

impl From<UserProgressRecord> for UserProgressDetail {
    fn from(record: UserProgressRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            animals_discovered: record.animals_discovered,
            habitats_explored: record.habitats_explored,
            interactions_created: record.interactions_created,
            conservation_actions_taken: record.conservation_actions_taken,
            ms_ls2_2_activities: record.ms_ls2_2_activities,
            ms_ls2_5_activities: record.ms_ls2_5_activities,
            badges_earned: record.badges_earned,
            last_updated: record.last_updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationActionSummary {
    pub id: i64,
    pub conservation_effort_id: i64,
    pub action_type: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationActionDetail {
    pub id: i64,
    pub user_id: i64,
    pub conservation_effort_id: i64,
    pub action_type: String,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<UserConservationActionRecord> for ConservationActionSummary {
    fn from(record: UserConservationActionRecord) -> Self {
        Self {
            id: record.id,
            conservation_effort_id: record.conservation_effort_id,
            action_type: record.action_type,
            completed_at: record.completed_at,
        }
    }
}

impl From<UserConservationActionRecord> for ConservationActionDetail {
    fn from(record: UserConservationActionRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            conservation_effort_id: record.conservation_effort_id,
            action_type: record.action_type,
            completed_at: record.completed_at,
            notes: record.notes,
        }
    }
}

/// An animal a learner has discovered; summary and full shape coincide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalDiscovery {
    pub user_id: i64,
    pub animal_id: i64,
    pub discovered_at: DateTime<Utc>,
}

impl From<AnimalDiscoveryRecord> for AnimalDiscovery {
    fn from(record: AnimalDiscoveryRecord) -> Self {
        Self {
            user_id: record.user_id,
            animal_id: record.animal_id,
            discovered_at: record.discovered_at,
        }
    }
}
