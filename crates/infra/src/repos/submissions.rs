use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::csv_file;
use crate::error::Result;
use crate::models::SubmissionRow;

pub const TEAMS_FILE: &str = "teams.csv";

const COLUMNS: &[&str] = &["match_id", "name", "mobile", "player"];

/// Append-only log of team selections, one row per selected player.
///
/// Rows are never mutated or deleted once written. Appends are serialized
/// through a lock and flushed as one buffered write, so two simultaneous
/// submitters cannot interleave the rows of their logical teams.
#[derive(Clone)]
pub struct SubmissionRepo {
    path: PathBuf,
    append_lock: Arc<Mutex<()>>,
}

impl SubmissionRepo {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TEAMS_FILE),
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append one logical team's rows atomically.
    pub fn append_team(&self, rows: &[SubmissionRow]) -> Result<()> {
        let _guard = self.append_lock.lock();
        csv_file::append_rows(&self.path, rows)
    }

    /// Full log state at the time of the read; `None` until the first team
    /// has been submitted.
    pub fn all_rows(&self) -> Result<Option<Vec<SubmissionRow>>> {
        csv_file::read_rows(&self.path, COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(match_id: &str, name: &str, mobile: &str, player: &str) -> SubmissionRow {
        SubmissionRow {
            match_id: match_id.into(),
            name: name.into(),
            mobile: mobile.into(),
            player: player.into(),
        }
    }

    #[test]
    fn absent_log_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SubmissionRepo::new(dir.path());
        assert!(repo.all_rows().unwrap().is_none());
    }

    #[test]
    fn append_team_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SubmissionRepo::new(dir.path());

        let team: Vec<SubmissionRow> = ["Asha", "Bala", "Chitra"]
            .iter()
            .map(|p| row("1", "Ravi", "9000000001", p))
            .collect();
        repo.append_team(&team).unwrap();

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.mobile == "9000000001"));
        assert_eq!(rows[2].player, "Chitra");
    }

    #[test]
    fn later_teams_append_without_a_second_header() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SubmissionRepo::new(dir.path());

        repo.append_team(&[row("1", "Ravi", "9000000001", "Asha")])
            .unwrap();
        repo.append_team(&[row("2", "Sita", "9000000002", "Dev")])
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join(TEAMS_FILE)).unwrap();
        assert_eq!(content.matches("match_id").count(), 1);

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Sita");
    }

    #[test]
    fn quoted_mobile_survives_the_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SubmissionRepo::new(dir.path());

        repo.append_team(&[row("1", "Ravi", "9876,543210", "Asha")])
            .unwrap();

        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows[0].mobile, "9876,543210");
    }
}
