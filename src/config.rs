use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::{DemoError, Result};

pub const CONFIG_ENV: &str = "OOP_INTRO_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Colored headings in the all-demos runner.
    pub color: bool,
    /// Demo names to run, in order.
    pub demos: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            demos: crate::Demo::ALL.iter().map(|d| d.name().to_string()).collect(),
        }
    }
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::config_read(path, err))?;
        log::info!("Loaded config from {}", path.display());
        Self::parse(&content)
    }

    /// Reads the file named by `OOP_INTRO_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_path_var(env::var_os(CONFIG_ENV))
    }

    // Empty counts as unset
    fn from_path_var(value: Option<OsString>) -> Result<Self> {
        match value {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
