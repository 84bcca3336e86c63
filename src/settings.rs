use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use serde::Deserialize;

const DEFAULT_SETTINGS: &str = include_str!("../settings-default.toml");

#[derive(Debug, Deserialize)]
pub struct GeneralSettings {
    pub debug: bool,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClassificationSettings {
    /// Rules that extend the built-in table.
    pub rules_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    pub format: String,
    /// Prefix for the subject of documents read from a local path; the file identifier is appended.
    pub base_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    pub timeout_seconds: u64,
}

/// This struct stores the program settings.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    #[serde(default)]
    pub classification: ClassificationSettings,
    pub output: OutputSettings,
    pub fetch: FetchSettings,
}

impl Settings {
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut s = ConfigBuilder::<DefaultState>::default();
        s = s.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));
        s = s.add_source(File::new("settings.toml", FileFormat::Toml).required(false));
        if let Some(path) = path {
            s = s.add_source(File::from(path));
        }

        let config = s.build()?;

        config.try_deserialize()
    }
}
