//! Server configuration from the environment

use std::env;

/// Fallback port when `PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 3000;

/// Fixed relative name of the data file
pub const DATA_FILE: &str = "data.json";

/// Runtime configuration for the board server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Path of the JSON data file
    pub data_file: String,
}

impl ServerConfig {
    /// Read configuration from the environment (`PORT`, default 3000)
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            data_file: DATA_FILE.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: DATA_FILE.to_string(),
        }
    }
}
