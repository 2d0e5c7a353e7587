pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_paths, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// Pages still using the sibling `<Menu />` layout.
pub const DEFAULT_TARGETS: [&str; 4] = [
    "src/components/MyContractsPage.tsx",
    "src/components/UsersPage.tsx",
    "src/components/UsersMappingPage.tsx",
    "src/components/PVPage.tsx",
];

pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "menu-migrate"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Rewrite React pages to use Menu as a wrapper instead of a sibling")
)]
pub struct CliConfig {
    /// Directory the target paths are relative to
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub root: String,

    /// TOML file overriding the target list and options
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Rewrite in memory only and report what would change
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    /// Write through a temp file and rename it over the target
    #[cfg_attr(feature = "cli", arg(long))]
    pub atomic: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(skip = default_targets()))]
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            config: None,
            dry_run: false,
            atomic: false,
            verbose: false,
            targets: default_targets(),
        }
    }
}

impl CliConfig {
    /// 套用 TOML 設定：目標清單與根目錄直接覆蓋，布林選項取聯集
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if let Some(targets) = &toml.targets {
            if let Some(base_dir) = &targets.base_dir {
                self.root = base_dir.clone();
            }
            if let Some(files) = &targets.files {
                self.targets = files.clone();
            }
        }

        if let Some(options) = &toml.options {
            self.dry_run |= options.dry_run.unwrap_or(false);
            self.atomic |= options.atomic_writes.unwrap_or(false);
        }
    }

    pub fn load_toml(&mut self) -> Result<Option<String>> {
        let Some(path) = self.config.clone() else {
            return Ok(None);
        };

        let toml = TomlConfig::from_file(&path)?;
        toml.validate()?;
        self.merge_toml(&toml);
        Ok(Some(toml.migration.name))
    }
}

impl ConfigProvider for CliConfig {
    fn root(&self) -> &str {
        &self.root
    }

    fn targets(&self) -> &[String] {
        &self.targets
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn atomic_writes(&self) -> bool {
        self.atomic
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root)?;
        validate_paths("targets", &self.targets)
    }
}
