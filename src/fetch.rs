use std::path::Path;

use crate::{config::MasterlistConfig, error::Error};

/// Where a masterlist came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Freshly downloaded from the master server.
    Remote,
    /// Loaded from the cache because the master server couldn't be reached.
    Cache,
}

#[derive(Debug, Clone)]
pub struct FetchedList {
    pub data: Vec<u8>,
    pub source: ListSource,
}

async fn download(config: &MasterlistConfig) -> Result<Vec<u8>, Error> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()?;

    let response = client.get(&config.url).send().await?.error_for_status()?;

    Ok(response.bytes().await?.to_vec())
}

/// Downloads the masterlist, or falls back to the cached copy if the master server can't be reached.
pub async fn fetch_masterlist(config: &MasterlistConfig) -> Result<FetchedList, Error> {
    tracing::info!(
        "Fetching masterlist from {} (timeout {}s)...",
        config.url,
        config.timeout_secs
    );

    match download(config).await {
        Ok(data) => {
            tracing::info!("Fetched {} bytes from {}", data.len(), config.url);
            return Ok(FetchedList {
                data,
                source: ListSource::Remote,
            });
        }
        Err(err) => tracing::warn!("Failed to fetch from {}: {err}", config.url),
    }

    let path = &config.cache_path;
    if !path.exists() {
        return Err(Error::NoSource { path: path.clone() });
    }

    let data = std::fs::read(path).map_err(Error::io(path))?;
    tracing::info!("Loaded masterlist from {}", path.display());

    Ok(FetchedList {
        data,
        source: ListSource::Cache,
    })
}

/// Writes `data` to `path`, creating any missing directories.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }

    std::fs::write(path, data).map_err(Error::io(path))
}

/// Keeps a copy of a freshly downloaded masterlist for the next time the master server is unreachable.
pub fn save_cache(config: &MasterlistConfig, list: &FetchedList) -> Result<(), Error> {
    if list.source != ListSource::Remote {
        return Ok(());
    }

    write_file(&config.cache_path, &list.data)?;
    tracing::info!("Saved received data to {}", config.cache_path.display());

    Ok(())
}
