//! Test helpers and fixtures for database tests
//!
//! Provides utilities to reduce boilerplate in test setup.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::features::shared::test_helpers::*;
//!
//! #[sqlx::test(migrations = "../../migrations")]
//! async fn test_something(pool: PgPool) -> sqlx::Result<()> {
//!     let tundra = TestHabitat::new("Arctic Tundra").insert(&pool).await?;
//!     let fox = TestAnimal::new("Arctic Fox", "Vulpes lagopus")
//!         .with_status(ConservationStatus::LeastConcern)
//!         .insert(&pool)
//!         .await?;
//!     link_animal_habitat(&pool, fox.id, tundra.id).await?;
//!     Ok(())
//! }
//! ```

use sqlx::PgPool;

use crate::models::{ConservationStatus, UserRole};

/// Builder for creating test animals
#[derive(Debug, Clone)]
pub struct TestAnimal {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub conservation_status: Option<ConservationStatus>,
    pub fun_facts: Vec<String>,
    pub diet: Option<String>,
}

impl TestAnimal {
    pub fn new(name: &str, scientific_name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            scientific_name: scientific_name.to_string(),
            conservation_status: None,
            fun_facts: Vec::new(),
            diet: None,
        }
    }

    pub fn with_status(mut self, status: ConservationStatus) -> Self {
        self.conservation_status = Some(status);
        self
    }

    pub fn with_fun_facts(mut self, facts: &[&str]) -> Self {
        self.fun_facts = facts.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_diet(mut self, diet: &str) -> Self {
        self.diet = Some(diet.to_string());
        self
    }

    /// Insert the animal, returning the builder with its assigned id
    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO animals (name, scientific_name, conservation_status, fun_facts, diet)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&self.name)
        .bind(&self.scientific_name)
        .bind(self.conservation_status)
        .bind(&self.fun_facts)
        .bind(&self.diet)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

/// Builder for creating test habitats
#[derive(Debug, Clone)]
pub struct TestHabitat {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
}

impl TestHabitat {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            climate: None,
        }
    }

    pub fn with_climate(mut self, climate: &str) -> Self {
        self.climate = Some(climate.to_string());
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO habitats (name, climate) VALUES ($1, $2) RETURNING id",
        )
        .bind(&self.name)
        .bind(&self.climate)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

/// Builder for creating test conservation efforts
#[derive(Debug, Clone)]
pub struct TestConservationEffort {
    pub id: i64,
    pub title: String,
    pub organization_name: Option<String>,
    pub is_active: bool,
}

impl TestConservationEffort {
    pub fn new(title: &str) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            organization_name: None,
            is_active: true,
        }
    }

    pub fn with_organization(mut self, organization_name: &str) -> Self {
        self.organization_name = Some(organization_name.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO conservation_efforts (title, organization_name, is_active)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&self.title)
        .bind(&self.organization_name)
        .bind(self.is_active)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

/// Builder for creating test users
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

impl TestUser {
    pub fn new(username: &str) -> Self {
        Self {
            id: 0,
            username: username.to_string(),
            role: UserRole::default(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub async fn insert(self, pool: &PgPool) -> sqlx::Result<Self> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, username, hashed_password, role)
            VALUES ($1, $2, 'not-a-real-hash', $3)
            RETURNING id
            "#,
        )
        .bind(format!("{}@example.test", self.username))
        .bind(&self.username)
        .bind(self.role)
        .fetch_one(pool)
        .await?;

        Ok(Self { id, ..self })
    }
}

pub async fn link_animal_habitat(pool: &PgPool, animal_id: i64, habitat_id: i64) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO animal_habitats (animal_id, habitat_id) VALUES ($1, $2)")
        .bind(animal_id)
        .bind(habitat_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn link_animal_effort(pool: &PgPool, animal_id: i64, effort_id: i64) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO animal_conservation_efforts (animal_id, conservation_effort_id) VALUES ($1, $2)",
    )
    .bind(animal_id)
    .bind(effort_id)
    .execute(pool)
    .await?;
    Ok(())
}
