use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Configuration for fetching the masterlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterlistConfig {
    /// Where the binary masterlist is served from.
    #[serde(default = "MasterlistConfig::default_url")]
    pub url: String,

    /// How long to wait for the master server before falling back to the cache, in seconds.
    #[serde(default = "MasterlistConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    /// The last masterlist successfully fetched is kept here, and used when the master server is unreachable.
    #[serde(default = "MasterlistConfig::default_cache_path")]
    pub cache_path: PathBuf,

    /// Decoded servers are written here as JSON.
    #[serde(default = "MasterlistConfig::default_json_path")]
    pub json_path: PathBuf,
}

impl Default for MasterlistConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout_secs: Self::default_timeout_secs(),
            cache_path: Self::default_cache_path(),
            json_path: Self::default_json_path(),
        }
    }
}

impl MasterlistConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn default_url() -> String {
        "https://master.multitheftauto.com/ase/mta/".to_string()
    }

    fn default_timeout_secs() -> u64 {
        5
    }

    fn default_cache_path() -> PathBuf {
        PathBuf::from("output/masterlist.bin")
    }

    fn default_json_path() -> PathBuf {
        PathBuf::from("output/masterlist.json")
    }
}

/// Global and all-encompassing config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub masterlist: MasterlistConfig,
}

/// Reads `config.yaml` from the working directory. A missing or unreadable config results in the defaults.
pub fn get_config() -> Config {
    let Ok(data) = std::fs::read_to_string("config.yaml") else {
        return Config::default();
    };

    match serde_yaml_ng::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse config.yaml, using the defaults: {err}");
            Config::default()
        }
    }
}
