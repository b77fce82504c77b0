//! Service Configuration
//!
//! Everything is read from the environment at startup, with working defaults
//! for the public list endpoints. `--bind` on the command line overrides
//! `BIND_ADDRESS`.

use std::env;
use std::time::Duration;

use anyhow::Context;

use crate::data::downloader::DownloadConfig;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8084";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 43_200;
const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DOWNLOAD_RETRIES: u32 = 3;

const DEFAULT_SDN_URL: &str = "https://www.treasury.gov/ofac/downloads/sdn.csv";
const DEFAULT_ALT_URL: &str = "https://www.treasury.gov/ofac/downloads/alt.csv";
const DEFAULT_ADD_URL: &str = "https://www.treasury.gov/ofac/downloads/add.csv";
const DEFAULT_DPL_URL: &str = "https://www.bis.doc.gov/dpl/dpl.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub refresh_interval: Duration,
    pub download: DownloadConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let refresh_secs = env_parse("DATA_REFRESH_INTERVAL", DEFAULT_REFRESH_INTERVAL_SECS)?;
        let timeout_secs = env_parse("DOWNLOAD_TIMEOUT", DEFAULT_DOWNLOAD_TIMEOUT_SECS)?;
        let retries = env_parse("DOWNLOAD_RETRIES", DEFAULT_DOWNLOAD_RETRIES)?;

        Ok(Self {
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            refresh_interval: Duration::from_secs(refresh_secs),
            download: DownloadConfig {
                sdn_url: env_or("SDN_DATA_URL", DEFAULT_SDN_URL),
                alt_url: env_or("ALT_DATA_URL", DEFAULT_ALT_URL),
                add_url: env_or("ADD_DATA_URL", DEFAULT_ADD_URL),
                dpl_url: env_or("DPL_DATA_URL", DEFAULT_DPL_URL),
                timeout: Duration::from_secs(timeout_secs),
                retries,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
