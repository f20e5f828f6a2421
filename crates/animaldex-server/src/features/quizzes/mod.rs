//! NGSS-aligned quizzes and learner attempts
//!
//! Shapes only; no quiz endpoints are mounted.

pub mod types;

pub use types::{QuizAttemptDetail, QuizAttemptSummary, QuizDetail, QuizSummary};
