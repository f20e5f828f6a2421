use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::{QuizAttemptRecord, QuizRecord};

/// Quiz card without its questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub ngss_standard: Option<String>,
    pub difficulty_level: Option<String>,
    pub question_count: usize,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDetail {
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

impl From<QuizRecord> for QuizSummary {
    fn from(record: QuizRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            ngss_standard: record.ngss_standard,
            difficulty_level: record.difficulty_level,
            question_count: record.questions.as_array().map_or(0, Vec::len),
            is_published: record.is_published,
        }
    }
}

impl From<QuizRecord> for QuizDetail {
    fn from(record: QuizRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            ngss_standard: record.ngss_standard,
            difficulty_level: record.difficulty_level,
            questions: record.questions,
            created_by_id: record.created_by_id,
            is_published: record.is_published,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttemptSummary {
    pub id: i64,
    pub quiz_id: i64,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttemptDetail {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub answers: Option<JsonValue>,
    pub completed_at: DateTime<Utc>,
    pub time_taken: Option<i32>,
}

impl From<QuizAttemptRecord> for QuizAttemptSummary {
    fn from(record: QuizAttemptRecord) -> Self {
        Self {
            id: record.id,
            quiz_id: record.quiz_id,
            score: record.score,
            max_score: record.max_score,
            completed_at: record.completed_at,
        }
    }
}

impl From<QuizAttemptRecord> for QuizAttemptDetail {
    fn from(record: QuizAttemptRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            quiz_id: record.quiz_id,
            score: record.score,
            max_score: record.max_score,
            answers: record.answers,
            completed_at: record.completed_at,
            time_taken: record.time_taken,
        }
    }
}
