use std::sync::Arc;

use infra::repos::{ReferenceStore, ResultRepo, SubmissionRepo};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    reference: Arc<ReferenceStore>,
    pub submissions: SubmissionRepo,
    pub results: ResultRepo,
    squad_size: usize,
}

impl AppState {
    /// Loads the reference catalog eagerly; a missing or malformed reference
    /// file fails startup since there would be nothing to offer users.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let reference = ReferenceStore::load(&config.data_dir)?;

        Ok(Self {
            reference: Arc::new(reference),
            submissions: SubmissionRepo::new(&config.data_dir),
            results: ResultRepo::new(&config.data_dir),
            squad_size: config.squad_size,
        })
    }

    pub fn reference(&self) -> &ReferenceStore {
        &self.reference
    }

    pub fn squad_size(&self) -> usize {
        self.squad_size
    }
}
