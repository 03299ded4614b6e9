use crate::error::Error;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// The prompt shown before each input line.
    pub prompt: String,
    /// Use the line editor (arrow-key recall) instead of plain stdin.
    pub line_editing: bool,
    /// How many typed lines the line editor remembers.
    pub recall_size: usize,
    /// Print the welcome banner on start.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            line_editing: true,
            recall_size: 100,
            banner: true,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or use the defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}.", path.display());
                let config_data = fs::read_to_string(path)?;
                Self::parse(&config_data)
            }
            None => Ok(Self::default()),
        }
    }

    fn parse(config_data: &str) -> Result<Self, Error> {
        Ok(toml::from_str(config_data)?)
    }
}
