//! Closed enumerations stored as TEXT columns
//!
//! Each enum serializes to the exact string kept in the database, so the
//! JSON representation and the CHECK constraints in the migrations agree.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Returned when a stored or submitted string is not a known variant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `Display`, `FromStr` and the SQLx TEXT mapping for an enum
/// with an `as_str` method and an `ALL` table.
macro_rules! text_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <&str as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
                Ok(raw.parse::<$ty>()?)
            }
        }
    };
}

/// IUCN-style extinction risk, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConservationStatus {
    #[serde(rename = "Least Concern")]
    LeastConcern,
    #[serde(rename = "Near Threatened")]
    NearThreatened,
    #[serde(rename = "Vulnerable")]
    Vulnerable,
    #[serde(rename = "Endangered")]
    Endangered,
    #[serde(rename = "Critically Endangered")]
    CriticallyEndangered,
    #[serde(rename = "Extinct in the Wild")]
    ExtinctInTheWild,
    #[serde(rename = "Extinct")]
    Extinct,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 7] = [
        Self::LeastConcern,
        Self::NearThreatened,
        Self::Vulnerable,
        Self::Endangered,
        Self::CriticallyEndangered,
        Self::ExtinctInTheWild,
        Self::Extinct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeastConcern => "Least Concern",
            Self::NearThreatened => "Near Threatened",
            Self::Vulnerable => "Vulnerable",
            Self::Endangered => "Endangered",
            Self::CriticallyEndangered => "Critically Endangered",
            Self::ExtinctInTheWild => "Extinct in the Wild",
            Self::Extinct => "Extinct",
        }
    }
}

text_enum!(ConservationStatus, "conservation status");

/// Kind of relationship recorded between two animals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    #[serde(alias = "predator-prey")]
    PredatorPrey,
    Competition,
    Mutualism,
    Commensalism,
    Parasitism,
}

impl InteractionType {
    pub const ALL: [InteractionType; 5] = [
        Self::PredatorPrey,
        Self::Competition,
        Self::Mutualism,
        Self::Commensalism,
        Self::Parasitism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PredatorPrey => "predator_prey",
            Self::Competition => "competition",
            Self::Mutualism => "mutualism",
            Self::Commensalism => "commensalism",
            Self::Parasitism => "parasitism",
        }
    }
}

text_enum!(InteractionType, "interaction type");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Student, Self::Teacher, Self::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

text_enum!(UserRole, "user role");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conservation_status_serde_matches_as_str() {
        for status in ConservationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_conservation_status_ordering() {
        assert!(ConservationStatus::LeastConcern < ConservationStatus::NearThreatened);
        assert!(ConservationStatus::CriticallyEndangered < ConservationStatus::ExtinctInTheWild);
        assert!(ConservationStatus::ExtinctInTheWild < ConservationStatus::Extinct);
    }

    #[test]
    fn test_conservation_status_from_str() {
        assert_eq!(
            "Extinct in the Wild".parse::<ConservationStatus>().unwrap(),
            ConservationStatus::ExtinctInTheWild
        );
        let err = "Endangered-ish".parse::<ConservationStatus>().unwrap_err();
        assert_eq!(err.kind, "conservation status");
        assert!(err.to_string().contains("Endangered-ish"));
    }

    #[test]
    fn test_conservation_status_rejects_enum_names() {
        assert!(serde_json::from_str::<ConservationStatus>("\"ENDANGERED\"").is_err());
        assert!("LeastConcern".parse::<ConservationStatus>().is_err());
    }

    #[test]
    fn test_interaction_type_accepts_hyphenated_alias() {
        let parsed: InteractionType = serde_json::from_str("\"predator-prey\"").unwrap();
        assert_eq!(parsed, InteractionType::PredatorPrey);
        assert_eq!(
            serde_json::to_string(&InteractionType::PredatorPrey).unwrap(),
            "\"predator_prey\""
        );
    }

    #[test]
    fn test_interaction_type_round_trips_through_str() {
        for kind in InteractionType::ALL {
            assert_eq!(kind.as_str().parse::<InteractionType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_user_role_defaults_to_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
        assert_eq!("teacher".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
