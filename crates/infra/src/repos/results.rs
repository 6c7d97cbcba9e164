use std::path::{Path, PathBuf};

use crate::csv_file;
use crate::error::Result;
use crate::models::ResultRow;

pub const RESULTS_FILE: &str = "results.csv";

const COLUMNS: &[&str] = &["match_id", "mobile", "points"];

/// Externally produced per-submitter points log. This system only reads it;
/// an absent file simply means no results have been uploaded yet.
#[derive(Clone)]
pub struct ResultRepo {
    path: PathBuf,
}

impl ResultRepo {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(RESULTS_FILE),
        }
    }

    pub fn all_rows(&self) -> Result<Option<Vec<ResultRow>>> {
        csv_file::read_rows(&self.path, COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn absent_log_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ResultRepo::new(dir.path());
        assert!(repo.all_rows().unwrap().is_none());
    }

    #[test]
    fn reads_externally_written_rows() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(RESULTS_FILE),
            "match_id,mobile,points\n1,9000000001,10\n1,9000000001,5.5\n",
        )
        .unwrap();

        let repo = ResultRepo::new(dir.path());
        let rows = repo.all_rows().unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].points, 10.0);
        assert_eq!(rows[1].points, 5.5);
    }

    #[test]
    fn non_numeric_points_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(RESULTS_FILE),
            "match_id,mobile,points\n1,9000000001,abc\n",
        )
        .unwrap();

        let repo = ResultRepo::new(dir.path());
        let err = repo.all_rows().unwrap_err();
        assert!(matches!(err, StoreError::MalformedRow { line: 2, .. }));
    }
}
