use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::generator::GenerationMode;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation_mode: GenerationMode,
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_char_length")]
    pub char_length: usize,
    #[serde(default)]
    pub stats_file: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_word_count() -> usize {
    8
}
fn default_char_length() -> usize {
    40
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_mode: GenerationMode::default(),
            word_count: default_word_count(),
            char_length: default_char_length(),
            stats_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homerow")
            .join("config.toml")
    }

    /// Clamp out-of-range values from hand-edited configs or CLI flags.
    pub fn validate(&mut self) {
        self.word_count = self.word_count.clamp(1, 50);
        self.char_length = self.char_length.clamp(5, 200);
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
    }

    /// Words per exercise in word mode, symbols per exercise in character mode.
    pub fn exercise_size(&self) -> usize {
        match self.generation_mode {
            GenerationMode::Word => self.word_count,
            GenerationMode::Character => self.char_length,
        }
    }
}
