pub mod csv_file;
pub mod error;
pub mod models;
pub mod repos;

pub use error::{Result, StoreError};
