use lifegrid_core::Pattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("unknown pattern `{name}` (available: {available})")]
    UnknownPattern { name: String, available: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UniverseConfig {
    pub width: i32,
    pub height: i32,
    /// Fixed seed for randomize sweeps; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub generations: u64,
    /// Built-in pattern stamped at the origin before the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub randomize: bool,
    /// Progress log interval in generations; 0 disables it.
    pub log_every: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub universe: UniverseConfig,
    pub run: RunConfig,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 1000,
            pattern: None,
            randomize: true,
            log_every: 100,
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, &path.display().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// The configured seed pattern, if any.
    pub fn pattern(&self) -> Result<Option<&'static Pattern>, ConfigError> {
        let Some(name) = &self.run.pattern else {
            return Ok(None);
        };
        Pattern::by_name(name)
            .map(Some)
            .ok_or_else(|| ConfigError::UnknownPattern {
                name: name.clone(),
                available: Pattern::names().collect::<Vec<_>>().join(", "),
            })
    }
}
