//! PostgreSQL adapter for the Pokemon repository port

use async_trait::async_trait;
use sqlx::FromRow;

use crate::application::ports::outbound::{PokemonRepositoryPort, RepositoryError};
use crate::domain::entities::Pokemon;
use crate::domain::value_objects::{PokemonQuery, SelectionMode};
use crate::infrastructure::persistence::PgDatabase;

/// Row shape returned by the search projection
#[derive(Debug, FromRow)]
struct PokemonRow {
    name: String,
    sprite_front_default: Option<String>,
    primary_type: String,
    secondary_type: Option<String>,
}

impl From<PokemonRow> for Pokemon {
    fn from(row: PokemonRow) -> Self {
        Self {
            name: row.name,
            sprite_front_default: row.sprite_front_default,
            primary_type: row.primary_type,
            secondary_type: row.secondary_type,
        }
    }
}

/// Build the search statement and its bind value.
///
/// The filter value travels as a bound parameter, never in the SQL text.
fn build_search_sql(query: &PokemonQuery) -> (String, Option<String>) {
    let mut sql = String::from(
        "SELECT name, sprite_front_default, primary_type, secondary_type FROM pokemon",
    );

    let pattern = query.name_filter().map(|filter| format!("%{filter}%"));
    if pattern.is_some() {
        sql.push_str(" WHERE LOWER(name) LIKE LOWER($1)");
    }

    match query.selection() {
        SelectionMode::RandomOne => sql.push_str(" ORDER BY RANDOM() LIMIT 1"),
        SelectionMode::All => sql.push_str(" ORDER BY \"order\" ASC"),
    }

    (sql, pattern)
}

/// Repository adapter over the shared pool
pub struct PgPokemonRepository {
    database: PgDatabase,
}

impl PgPokemonRepository {
    pub fn new(database: PgDatabase) -> Self {
        Self { database }
    }
}

#[async_trait]
impl PokemonRepositoryPort for PgPokemonRepository {
    async fn search(&self, query: &PokemonQuery) -> Result<Vec<Pokemon>, RepositoryError> {
        let (sql, pattern) = build_search_sql(query);

        // Acquire explicitly: a failure here is a connection error, anything
        // past this point is a query error
        let mut conn = self
            .database
            .pool()
            .acquire()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        let mut stmt = sqlx::query_as::<_, PokemonRow>(&sql);
        if let Some(pattern) = pattern {
            stmt = stmt.bind(pattern);
        }

        let rows = stmt
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Pokemon::from).collect())
    }
}
