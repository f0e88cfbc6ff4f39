// Config loading: a small JSON file naming the Jira instance and the
// credentials used for both requests.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of `config.json`. Unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub jira_url: String,
    pub auth: String,
}

impl Config {
    /// Read and decode the config file at `path`. Nothing is validated; an
    /// empty `jira_url` only shows up later as a bad request URL.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::parse(&self.auth)
    }
}

/// `~/.config/jiraattach/config.json`, or an empty path when there is no
/// home directory.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".config").join("jiraattach").join("config.json"),
        None => PathBuf::new(),
    }
}
