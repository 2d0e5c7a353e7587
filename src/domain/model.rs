/// 單一規則在一次改寫中的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub replacements: usize,
}

#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub content: String,
    pub rules: Vec<RuleOutcome>,
    changed: bool,
}

impl RewriteOutcome {
    pub fn new(content: String, rules: Vec<RuleOutcome>, changed: bool) -> Self {
        Self {
            content,
            rules,
            changed,
        }
    }

    /// True when the rewritten content differs from the input.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn total_replacements(&self) -> usize {
        self.rules.iter().map(|r| r.replacements).sum()
    }
}

#[derive(Debug, Clone)]
pub enum FileReport {
    Updated { path: String, rules: Vec<RuleOutcome> },
    Unchanged { path: String },
    Failed { path: String, error: String },
}

impl FileReport {
    pub fn path(&self) -> &str {
        match self {
            FileReport::Updated { path, .. }
            | FileReport::Unchanged { path }
            | FileReport::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileReport::Failed { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    pub reports: Vec<FileReport>,
}

impl MigrationSummary {
    pub fn updated(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r, FileReport::Updated { .. }))
            .count()
    }

    pub fn unchanged(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r, FileReport::Unchanged { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }
}
