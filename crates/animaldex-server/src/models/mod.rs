//! Database row records
//!
//! One struct per table as read back with `SELECT *`-style column lists.
//! Response shapes live next to the feature that returns them and convert
//! from these records.

pub mod enums;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

pub use enums::{ConservationStatus, InteractionType, ParseEnumError, UserRole};

/// Columns of `animals`, in table order
pub const ANIMAL_COLUMNS: &str = "id, name, scientific_name, common_names, classification, \
    conservation_status, description, fun_facts, diet, lifespan, size_info, image_urls, \
    video_urls, audio_urls, external_api_id, last_updated";

pub const HABITAT_COLUMNS: &str =
    "id, name, description, climate, geography, key_characteristics, map_coordinates, image_url";

pub const CONSERVATION_EFFORT_COLUMNS: &str = "id, title, description, organization_name, \
    website_url, location, image_url, conservation_problem, proposed_solutions, \
    success_metrics, current_status, petition_url, volunteer_url, donation_url, created_at, \
    is_active";

pub const USER_COLUMNS: &str = "id, email, username, hashed_password, full_name, role, school, \
    grade_level, location, created_at, is_active";

pub const USER_PROGRESS_COLUMNS: &str = "id, user_id, animals_discovered, habitats_explored, \
    interactions_created, conservation_actions_taken, ms_ls2_2_activities, ms_ls2_5_activities, \
    badges_earned, last_updated";

pub const USER_CONSERVATION_ACTION_COLUMNS: &str =
    "id, user_id, conservation_effort_id, action_type, completed_at, notes";

pub const QUIZ_COLUMNS: &str = "id, title, description, ngss_standard, difficulty_level, \
    questions, created_by_id, is_published, created_at";

pub const QUIZ_ATTEMPT_COLUMNS: &str =
    "id, user_id, quiz_id, score, max_score, answers, completed_at, time_taken";

pub const ANIMAL_DISCOVERY_COLUMNS: &str = "user_id, animal_id, discovered_at";

pub const ECOSYSTEM_INTERACTION_COLUMNS: &str = "id, predator_id, prey_id, interaction_type, \
    habitat_id, description, strength, created_by_id, is_verified, created_at";

#[derive(Debug, Clone, FromRow)]
pub struct AnimalRecord {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub common_names: Option<Vec<String>>,
    pub classification: Option<JsonValue>,
    pub conservation_status: Option<ConservationStatus>,
    pub description: Option<String>,
    pub fun_facts: Option<Vec<String>>,
    pub diet: Option<String>,
    pub lifespan: Option<String>,
    pub size_info: Option<JsonValue>,
    pub image_urls: Option<Vec<String>>,
    pub video_urls: Option<Vec<String>>,
    pub audio_urls: Option<Vec<String>>,
    pub external_api_id: Option<String>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HabitatRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub climate: Option<String>,
    pub geography: Option<String>,
    pub key_characteristics: Option<Vec<String>>,
    pub map_coordinates: Option<JsonValue>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ConservationEffortRecord {
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

#[derive(Debug, Clone, FromRow)]
pub struct EcosystemInteractionRecord {
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

/// Row of `users`; `hashed_password` never leaves the server
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub school: Option<String>,
    pub grade_level: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserProgressRecord {
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

#[derive(Debug, Clone, FromRow)]
pub struct UserConservationActionRecord {
    pub id: i64,
    pub user_id: i64,
    pub conservation_effort_id: i64,
    pub action_type: String,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct QuizRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ngss_standard: Option<String>,
    pub difficulty_level: Option<String>,
    pub questions: JsonValue,
    pub created_by_id: Option<i64>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct QuizAttemptRecord {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub answers: Option<JsonValue>,
    pub completed_at: DateTime<Utc>,
    /// Seconds
    pub time_taken: Option<i32>,
}

/// Row of the `user_animal_discoveries` join table
#[derive(Debug, Clone, FromRow)]
pub struct AnimalDiscoveryRecord {
    pub user_id: i64,
    pub animal_id: i64,
    pub discovered_at: DateTime<Utc>,
}
