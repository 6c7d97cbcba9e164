use std::path::Path;

use api::{AppConfig, AppState};
use async_graphql::{EmptySubscription, Request, Schema, Variables};

pub type TestSchema = Schema<api::gql::QueryRoot, api::gql::MutationRoot, EmptySubscription>;

pub const MATCHES_JSON: &str = r#"[
    {"match_id": 1, "team_a": "Lions", "team_b": "Tigers"},
    {"match_id": 2, "team_a": "Panthers", "team_b": "Royals"}
]"#;

pub const PLAYERS_JSON: &str = r#"{
    "Lions": ["Asha", "Bala", "Chandra", "Devi", "Eshan", "Farhan", "Gita",
              "Hari", "Indu", "Jay", "Kiran"],
    "Tigers": ["Lata", "Mohan", "Nila", "Omar", "Priya", "Qadir", "Ravi",
               "Sita", "Tara", "Uma", "Vikram"],
    "Panthers": ["Wasim", "Xavier", "Yash"],
    "Royals": ["Zara", "Anil", "Bina"]
}"#;

/// Build an AppState over a temp data directory seeded with the reference
/// fixtures above.
pub fn setup_state(data_dir: &Path, squad_size: usize) -> AppState {
    std::fs::write(data_dir.join("matches.json"), MATCHES_JSON)
        .expect("failed to write matches fixture");
    std::fs::write(data_dir.join("players.json"), PLAYERS_JSON)
        .expect("failed to write players fixture");

    let config = AppConfig {
        data_dir: data_dir.to_path_buf(),
        squad_size,
        port: 0,
    };
    AppState::new(&config).expect("failed to create AppState")
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &TestSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}
