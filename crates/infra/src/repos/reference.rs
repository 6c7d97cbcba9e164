use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};
use crate::models::MatchRow;

pub const MATCHES_FILE: &str = "matches.json";
pub const PLAYERS_FILE: &str = "players.json";

/// Read-only catalog of matches and per-team rosters, loaded once at startup.
///
/// Reference data is the source of every choice the API offers, so a missing
/// or unreadable file here is fatal rather than a degraded state.
#[derive(Debug)]
pub struct ReferenceStore {
    matches: Vec<MatchRow>,
    rosters: BTreeMap<String, Vec<String>>,
}

impl ReferenceStore {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let matches: Vec<MatchRow> = read_json(&data_dir.join(MATCHES_FILE))?;
        let rosters: BTreeMap<String, Vec<String>> = read_json(&data_dir.join(PLAYERS_FILE))?;

        tracing::info!(
            matches = matches.len(),
            teams = rosters.len(),
            "reference data loaded"
        );

        Ok(Self { matches, rosters })
    }

    pub fn matches(&self) -> &[MatchRow] {
        &self.matches
    }

    pub fn find_match(&self, match_id: &str) -> Option<&MatchRow> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }

    pub fn roster(&self, team: &str) -> Option<&[String]> {
        self.rosters.get(team).map(Vec::as_slice)
    }

    /// `"TeamA vs TeamB"` for a known match id, `None` otherwise. Unknown ids
    /// must not error: submission logs can outlive the fixture list.
    pub fn match_label(&self, match_id: &str) -> Option<String> {
        self.find_match(match_id).map(MatchRow::label)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::MissingReferenceFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::MalformedReference {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
