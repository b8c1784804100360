//! PostgreSQL connection handling

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::infrastructure::config::DatabaseConfig;

/// Shared handle to the PostgreSQL pool.
///
/// The pool connects lazily: no connection is opened until a request needs
/// one, so the server comes up even while the database is unreachable and
/// each affected request gets the connection-failure response instead.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the pokemon table if it does not exist.
    ///
    /// Column set matches the assembled dataset; the API only ever projects
    /// name, sprite_front_default, primary_type and secondary_type, plus
    /// "order" for sorting. Seeding is a separate concern.
    pub async fn initialize_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pokemon (
                id INTEGER PRIMARY KEY,
                base_experience INTEGER,
                height INTEGER,
                weight INTEGER,
                "order" INTEGER,
                primary_ability INTEGER,
                secondary_ability INTEGER,
                hidden_ability INTEGER,
                species INTEGER,
                hp INTEGER,
                hp_effort INTEGER,
                attack INTEGER,
                attack_effort INTEGER,
                defense INTEGER,
                defense_effort INTEGER,
                special_attack INTEGER,
                special_attack_effort INTEGER,
                special_defense INTEGER,
                special_defense_effort INTEGER,
                speed INTEGER,
                speed_effort INTEGER,
                sprite_front_default TEXT,
                sprite_front_female TEXT,
                sprite_front_shiny_female TEXT,
                sprite_front_shiny TEXT,
                sprite_back_default TEXT,
                sprite_back_female TEXT,
                sprite_back_shiny_female TEXT,
                sprite_back_shiny TEXT,
                cry TEXT,
                cry_legacy TEXT,
                name TEXT,
                primary_type TEXT,
                secondary_type TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create pokemon table")?;

        Ok(())
    }
}
