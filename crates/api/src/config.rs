use std::env;
use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding the reference files and the tabular logs.
    pub data_dir: PathBuf,
    /// Required squad size K. The 7-player and 11-player league variants are
    /// the same code path with a different K.
    pub squad_size: usize,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            squad_size: env::var("SQUAD_SIZE")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}
