use crate::converter::{Mode, Style};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casefmt.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub style: Style,
    pub mode: Mode,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::Camel,
            mode: Mode::Lenient,
            color: true,
        }
    }
}

/// One config file; anything left out falls through to the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    style: Option<Style>,
    mode: Option<Mode>,
    color: Option<bool>,
}

impl Config {
    /// Load configuration with priority: CLI args > explicit file > local config > global config > defaults
    pub fn load(
        explicit_path: Option<&Path>,
        style: Option<Style>,
        mode: Option<Mode>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::layer_from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::layer_from_file(&local_path)?);
        }

        // An explicitly requested file must exist
        if let Some(path) = explicit_path {
            config = config.merge(Self::layer_from_file(path)?);
        }

        if let Some(style) = style {
            config.style = style;
        }
        if let Some(mode) = mode {
            config.mode = mode;
        }

        log::debug!(
            "Effective config: style={} mode={} color={}",
            config.style,
            config.mode,
            config.color
        );

        Ok(config)
    }

    fn layer_from_file(path: &Path) -> Result<ConfigLayer> {
        log::debug!("Reading config layer {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(mode) = layer.mode {
            self.mode = mode;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casefmt").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
