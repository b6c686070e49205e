use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use wordcount_engine::{CountSettings, DEFAULT_COMMAND};
use wordcount_logging::{wc_info, wc_warn};

use crate::cli::Cli;

pub const CONFIG_FILENAME: &str = ".tex-wordcount.ron";
pub const DEFAULT_TEMPLATE: &str = "${words} words";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub template: String,
    pub command: String,
    pub args: Vec<String>,
    pub merge: bool,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            command: DEFAULT_COMMAND.to_string(),
            args: Vec::new(),
            merge: false,
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Resolve configuration for `cli.file`, then apply command-line overrides.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::load_beside(&cli.file),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Load an explicitly requested file; failing to read or parse it is fatal.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config = ron::from_str(&content)
            .with_context(|| format!("cannot parse config file {}", path.display()))?;
        wc_info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Look for `.tex-wordcount.ron` next to the document, falling back to defaults.
    pub fn load_beside(document: &Path) -> Self {
        let path = config_path_for(document);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                wc_warn!("Failed to read configuration from {:?}: {}", path, err);
                return Self::default();
            }
        };

        match ron::from_str(&content) {
            Ok(config) => {
                wc_info!("Loaded configuration from {:?}", path);
                config
            }
            Err(err) => {
                wc_warn!("Failed to parse configuration from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(template) = &cli.template {
            self.template = template.clone();
        }
        if let Some(command) = &cli.command {
            self.command = command.clone();
        }
        if !cli.args.is_empty() {
            self.args = cli.args.clone();
        }
        if cli.merge {
            self.merge = true;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
    }

    pub fn count_settings(&self) -> CountSettings {
        CountSettings {
            command: self.command.clone(),
            args: self.args.clone(),
            merge: self.merge,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn config_path_for(document: &Path) -> PathBuf {
    match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(CONFIG_FILENAME),
        _ => PathBuf::from(CONFIG_FILENAME),
    }
}
