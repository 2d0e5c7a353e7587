use crate::core::rewriter::Rewriter;
use crate::core::{FileReport, MigrationSummary, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct MigrationRunner<S: Storage> {
    storage: S,
    rewriter: Rewriter,
    dry_run: bool,
}

impl<S: Storage> MigrationRunner<S> {
    pub fn new(storage: S) -> Result<Self> {
        Ok(Self {
            storage,
            rewriter: Rewriter::new()?,
            dry_run: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrites every target in order, writing one status line per target to `out`.
    ///
    /// A failing target is reported and skipped; it never stops the remaining ones.
    pub fn run<W: Write>(&self, targets: &[String], out: &mut W) -> MigrationSummary {
        let mut summary = MigrationSummary::default();

        for target in targets {
            let report = match self.migrate_file(target) {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!("❌ {}: {}", target, e.user_friendly_message());
                    tracing::debug!("💡 {}", e.recovery_suggestion());
                    FileReport::Failed {
                        path: target.clone(),
                        error: e.to_string(),
                    }
                }
            };

            if let Err(e) = writeln!(out, "{}", self.status_line(&report)) {
                tracing::error!("Failed to write status for {}: {}", target, e);
            }
            summary.reports.push(report);
        }

        tracing::info!(
            "📊 {} updated, {} unchanged, {} failed",
            summary.updated(),
            summary.unchanged(),
            summary.failed()
        );

        summary
    }

    fn migrate_file(&self, target: &str) -> Result<FileReport> {
        let source = self.storage.read_text(target)?;
        let outcome = self.rewriter.rewrite(&source);

        tracing::debug!(
            "{}: {} replacement(s) across {} rules",
            target,
            outcome.total_replacements(),
            outcome.rules.len()
        );

        if !self.dry_run {
            // 即使內容未變也寫回
            self.storage.write_text(target, &outcome.content)?;
        }

        if outcome.changed() {
            Ok(FileReport::Updated {
                path: target.to_string(),
                rules: outcome.rules,
            })
        } else {
            tracing::debug!("{}: no rule matched, content unchanged", target);
            Ok(FileReport::Unchanged {
                path: target.to_string(),
            })
        }
    }

    fn status_line(&self, report: &FileReport) -> String {
        match report {
            FileReport::Failed { path, error } => format!("✗ Error updating {}: {}", path, error),
            FileReport::Updated { path, .. } if self.dry_run => format!("✓ Would update {}", path),
            FileReport::Unchanged { path } if self.dry_run => {
                format!("✓ Nothing to change in {}", path)
            }
            FileReport::Updated { path, .. } | FileReport::Unchanged { path } => {
                format!("✓ Updated {}", path)
            }
        }
    }
}
