use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for running operation scripts.
///
/// This struct holds settings that control how a [`Runner`](crate::Runner)
/// reacts to failed lookups and how results are rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether an out-of-bounds lookup aborts the run.
    ///
    /// When `false`, the failure is recorded in the transcript and the
    /// remaining operations still execute.
    pub stop_on_error: bool,

    /// Whether text output echoes each operation before its result.
    pub echo: bool,

    /// How an absent result (`head`/`tail`/`remove-first` on an empty list)
    /// is printed in text output.
    empty_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            echo: false,
            empty_marker: default_empty_marker(),
        }
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The config file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(Error::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(Error::Write)
    }

    /// Returns the marker printed for absent results.
    #[must_use]
    pub fn empty_marker(&self) -> &str {
        &self.empty_marker
    }

    /// Sets the marker printed for absent results.
    ///
    /// An empty marker falls back to the default.
    pub fn set_empty_marker(&mut self, marker: String) {
        self.empty_marker = if marker.is_empty() {
            default_empty_marker()
        } else {
            marker
        };
    }
}

const fn default_stop_on_error() -> bool {
    true
}

fn default_empty_marker() -> String {
    "(empty)".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_stop_on_error")]
        stop_on_error: bool,

        #[serde(default)]
        echo: bool,

        #[serde(default = "default_empty_marker")]
        empty_marker: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                stop_on_error,
                echo,
                empty_marker,
            } => {
                let mut config = Self {
                    stop_on_error,
                    echo,
                    empty_marker: String::new(),
                };
                config.set_empty_marker(empty_marker);
                config
            }
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            stop_on_error: config.stop_on_error,
            echo: config.echo,
            empty_marker: config.empty_marker,
        }
    }
}
