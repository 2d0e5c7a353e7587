pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::CliConfig;

pub use crate::core::{migration::MigrationRunner, rewriter::Rewriter};
pub use domain::model::{FileReport, MigrationSummary};
pub use utils::error::{MigrateError, Result};
