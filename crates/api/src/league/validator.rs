use std::collections::HashSet;

use infra::models::SubmissionRow;
use infra::repos::SubmissionRepo;
use infra::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("please enter your name and mobile number")]
    MissingIdentity,

    #[error("please select exactly {expected} players (got {actual})")]
    WrongSquadSize { expected: usize, actual: usize },

    #[error("player {0:?} was selected more than once")]
    DuplicatePlayer(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A candidate submission as it arrives from the client.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub match_id: String,
    pub name: String,
    pub mobile: String,
    pub players: Vec<String>,
}

/// A submission that passed validation and was persisted.
#[derive(Debug, Clone)]
pub struct AcceptedTeam {
    pub match_id: String,
    pub name: String,
    pub mobile: String,
    pub player_count: usize,
}

/// Validate a candidate team and, on accept, append its rows to the
/// submission log as one atomic batch.
///
/// Roster membership is not checked here: the choice set offered to clients
/// comes from the reference rosters, so membership is enforced by
/// construction at the API boundary. Re-submission by the same identity is
/// allowed and creates an additional independent team.
pub fn submit_team(
    repo: &SubmissionRepo,
    squad_size: usize,
    team: NewTeam,
) -> Result<AcceptedTeam, SubmitError> {
    let name = team.name.trim();
    let mobile = team.mobile.trim();

    if name.is_empty() || mobile.is_empty() {
        return Err(SubmitError::MissingIdentity);
    }

    if team.players.len() != squad_size {
        return Err(SubmitError::WrongSquadSize {
            expected: squad_size,
            actual: team.players.len(),
        });
    }

    let mut seen = HashSet::new();
    for player in &team.players {
        if !seen.insert(player.as_str()) {
            return Err(SubmitError::DuplicatePlayer(player.clone()));
        }
    }

    let rows: Vec<SubmissionRow> = team
        .players
        .iter()
        .map(|player| SubmissionRow {
            match_id: team.match_id.clone(),
            name: name.to_string(),
            mobile: mobile.to_string(),
            player: player.clone(),
        })
        .collect();
    repo.append_team(&rows)?;

    Ok(AcceptedTeam {
        match_id: team.match_id,
        name: name.to_string(),
        mobile: mobile.to_string(),
        player_count: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: usize = 3;

    fn repo(dir: &tempfile::TempDir) -> SubmissionRepo {
        SubmissionRepo::new(dir.path())
    }

    fn team(name: &str, mobile: &str, players: &[&str]) -> NewTeam {
        NewTeam {
            match_id: "1".into(),
            name: name.into(),
            mobile: mobile.into(),
            players: players.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_a_full_squad_and_persists_k_rows() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let accepted =
            submit_team(&repo, K, team("Asha", "9000000001", &["A", "B", "C"])).unwrap();
        assert_eq!(accepted.player_count, K);

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows.len(), K);
        assert!(rows
            .iter()
            .all(|r| r.name == "Asha" && r.mobile == "9000000001" && r.match_id == "1"));
    }

    #[test]
    fn rejects_blank_identity_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let err = submit_team(&repo, K, team("  ", "9000000001", &["A", "B", "C"])).unwrap_err();
        assert!(matches!(err, SubmitError::MissingIdentity));

        let err = submit_team(&repo, K, team("Asha", "", &["A", "B", "C"])).unwrap_err();
        assert!(matches!(err, SubmitError::MissingIdentity));

        assert!(repo.all_rows().unwrap().is_none());
    }

    #[test]
    fn rejects_wrong_squad_size_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let err = submit_team(&repo, K, team("Asha", "9000000001", &["A", "B"])).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::WrongSquadSize {
                expected: 3,
                actual: 2
            }
        ));
        assert!(repo.all_rows().unwrap().is_none());
    }

    #[test]
    fn rejects_a_repeated_player() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let err = submit_team(&repo, K, team("Asha", "9000000001", &["A", "B", "A"])).unwrap_err();
        assert!(matches!(err, SubmitError::DuplicatePlayer(p) if p == "A"));
        assert!(repo.all_rows().unwrap().is_none());
    }

    #[test]
    fn resubmission_creates_an_independent_team() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        submit_team(&repo, K, team("Asha", "9000000001", &["A", "B", "C"])).unwrap();
        submit_team(&repo, K, team("Asha", "9000000001", &["A", "B", "C"])).unwrap();

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows.len(), 2 * K);
    }

    #[test]
    fn identity_is_trimmed_before_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        submit_team(&repo, K, team(" Asha ", " 9000000001 ", &["A", "B", "C"])).unwrap();

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows[0].name, "Asha");
        assert_eq!(rows[0].mobile, "9000000001");
    }
}
