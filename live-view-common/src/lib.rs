use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_APP_ROOT: &str = ".";
pub const DEFAULT_RESULT_PATH: &str = "outputs/latest_result.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Runtime settings for the viewer, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub app_root: PathBuf,
    /// Relative to `app_root` unless absolute.
    pub result_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                debug!("{key} not set, using default '{default}'");
                default.to_string()
            }
        };

        let app_root = PathBuf::from(read("APP_ROOT", DEFAULT_APP_ROOT));
        let result_path = PathBuf::from(read("RESULT_PATH", DEFAULT_RESULT_PATH));
        let bind_addr = read("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))?;

        Ok(Self {
            app_root,
            result_path,
            bind_addr,
        })
    }

    /// Location of the result file on disk.
    pub fn result_file(&self) -> PathBuf {
        // join() keeps an absolute result_path as-is
        self.app_root.join(&self.result_path)
    }

    /// Path shown to the user in the page's instructions.
    pub fn result_label(&self) -> String {
        self.result_path.display().to_string()
    }
}
