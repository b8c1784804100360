//! Pokemon API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::application::ports::outbound::RepositoryError;
use crate::application::services::PokedexService;
use crate::domain::value_objects::{PokemonQuery, SelectionMode};
use crate::infrastructure::http::xml::{render_error, render_search_result, Xml};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GetPokemonParams {
    /// Case-insensitive substring filter on the name
    pub pokemon: Option<String>,
    /// Raw flag; only the exact literal "true" selects random mode
    pub random: Option<String>,
}

fn is_random_selection(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// List, filter, or randomly pick pokemon, rendered as XML
pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GetPokemonParams>,
) -> Result<Xml, (StatusCode, Xml)> {
    let random = is_random_selection(params.random.as_deref());
    let selection = if random {
        SelectionMode::RandomOne
    } else {
        SelectionMode::All
    };
    let query = PokemonQuery::new(params.pokemon, selection);

    match state.pokedex_service.search(query).await {
        Ok(pokemon) => Ok(Xml(render_search_result(&pokemon, random))),
        // A failed query reads exactly like zero rows; only the log tells
        // them apart
        Err(RepositoryError::Query(reason)) => {
            warn!(%reason, "Pokemon query failed, returning empty list");
            Ok(Xml(render_search_result(&[], random)))
        }
        Err(RepositoryError::Connection(reason)) => {
            warn!(%reason, "Database connection failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Xml(render_error("Database connection failed.")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::application::ports::outbound::PokemonRepositoryPort;
    use crate::application::services::PokedexServiceImpl;
    use crate::domain::entities::Pokemon;
    use crate::infrastructure::config::{AppConfig, DatabaseConfig};
    use crate::infrastructure::http::xml::XML_DECLARATION;

    struct FakeRepository {
        result: Result<Vec<Pokemon>, RepositoryError>,
    }

    #[async_trait]
    impl PokemonRepositoryPort for FakeRepository {
        async fn search(&self, _query: &PokemonQuery) -> Result<Vec<Pokemon>, RepositoryError> {
            match &self.result {
                Ok(rows) => Ok(rows.clone()),
                Err(RepositoryError::Connection(e)) => {
                    Err(RepositoryError::Connection(e.clone()))
                }
                Err(RepositoryError::Query(e)) => Err(RepositoryError::Query(e.clone())),
            }
        }
    }

    fn test_state(result: Result<Vec<Pokemon>, RepositoryError>) -> Arc<AppState> {
        let config = AppConfig {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                name: "pokemondb".to_string(),
                user: "postgres".to_string(),
                password: String::new(),
                max_connections: 5,
            },
            server_port: 8000,
        };
        Arc::new(AppState {
            config,
            pokedex_service: PokedexServiceImpl::new(Arc::new(FakeRepository { result })),
        })
    }

    fn params(pokemon: Option<&str>, random: Option<&str>) -> Query<GetPokemonParams> {
        Query(GetPokemonParams {
            pokemon: pokemon.map(str::to_string),
            random: random.map(str::to_string),
        })
    }

    #[test]
    fn test_random_requires_the_exact_literal() {
        assert!(is_random_selection(Some("true")));
        assert!(!is_random_selection(Some("TRUE")));
        assert!(!is_random_selection(Some("1")));
        assert!(!is_random_selection(Some("")));
        assert!(!is_random_selection(None));
    }

    #[tokio::test]
    async fn test_list_mode_response() {
        let state = test_state(Ok(vec![
            Pokemon::new("Pikachu", "Electric").with_sprite("pikachu.png"),
        ]));
        let body = get_pokemon(State(state), params(Some("pika"), None))
            .await
            .unwrap()
            .0;
        assert!(body.starts_with(XML_DECLARATION));
        assert!(body.contains("<pokemon_list><pokemon><name>Pikachu</name>"));
        assert!(body.ends_with("</pokemon_list>"));
    }

    #[tokio::test]
    async fn test_random_mode_response_is_unwrapped() {
        let state = test_state(Ok(vec![Pokemon::new("Mew", "Psychic")]));
        let body = get_pokemon(State(state), params(None, Some("true")))
            .await
            .unwrap()
            .0;
        assert!(!body.contains("<pokemon_list>"));
        assert!(body.contains("<pokemon><name>Mew</name>"));
    }

    #[tokio::test]
    async fn test_no_matches_yields_empty_list_even_in_random_mode() {
        let state = test_state(Ok(vec![]));
        let body = get_pokemon(State(state), params(Some("zzzznotfound"), Some("true")))
            .await
            .unwrap()
            .0;
        assert_eq!(
            body,
            format!("{XML_DECLARATION}<pokemon_list></pokemon_list>")
        );
    }

    #[tokio::test]
    async fn test_query_failure_conflates_to_empty_list() {
        let state = test_state(Err(RepositoryError::Query("relation missing".to_string())));
        let body = get_pokemon(State(state), params(None, None)).await.unwrap().0;
        assert_eq!(
            body,
            format!("{XML_DECLARATION}<pokemon_list></pokemon_list>")
        );
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_500_with_fixed_body() {
        let state = test_state(Err(RepositoryError::Connection("refused".to_string())));
        let (status, body) = get_pokemon(State(state), params(None, None))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.0,
            format!("{XML_DECLARATION}<error>Database connection failed.</error>")
        );
    }
}
