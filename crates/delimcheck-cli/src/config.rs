//! Configuration file loading.

use std::{
    fs,
    path::{Path, PathBuf},
};

use delimcheck_core::Config;

use crate::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "delimcheck.toml";

/// Parse a TOML configuration.
///
/// Delimiter tables are validated later, once command line overrides are
/// applied.
pub fn parse_config(text: &str) -> Result<Config, Error> {
    Ok(toml::from_str(text)?)
}

/// Load the configuration from `explicit`, else from [`CONFIG_FILE`] in
/// `dir`, else fall back to defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, Error> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let text = fs::read_to_string(&path)?;
    parse_config(&text)
}
