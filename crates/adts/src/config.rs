use std::path::Path;

use adts_codec::aac::AudioConfig;
use anyhow::Result;
use serde::Deserialize;


const CONFIG_FILE: &str = "adts.toml";


#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
}

/// Loads `adts.toml` from `config_dir`, using defaults if the file doesn't exist.
pub fn from_path<P>(config_dir: P) -> Result<Config>
where
    P: AsRef<Path>,
{
    let path = config_dir.as_ref().join(CONFIG_FILE);

    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .build()?;

    Ok(config.try_deserialize()?)
}
