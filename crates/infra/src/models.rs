use serde::{Deserialize, Deserializer, Serialize};

/// Accept a match id written as either a JSON number or a string and
/// canonicalize to a string, so `1` and `"1"` name the same match.
fn match_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// One fixture from `matches.json`. Immutable after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    #[serde(deserialize_with = "match_id")]
    pub match_id: String,
    pub team_a: String,
    pub team_b: String,
}

impl MatchRow {
    pub fn label(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }
}

/// One selected player from `teams.csv`. A logical team is the set of rows
/// sharing `(match_id, name, mobile)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub match_id: String,
    pub name: String,
    pub mobile: String,
    pub player: String,
}

/// One externally produced score line from `results.csv`. Points arrive
/// pre-computed and may be fractional; rows for the same mobile are summed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(deserialize_with = "match_id")]
    pub match_id: String,
    pub mobile: String,
    pub points: f64,
}
