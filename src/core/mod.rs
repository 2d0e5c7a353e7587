pub mod migration;
pub mod rewriter;

pub use crate::domain::model::{FileReport, MigrationSummary, RewriteOutcome, RuleOutcome};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
