//! Configuration management for the server binary

use anyhow::Result;
use serde::Deserialize;

use crate::catalog::CATALOG_BASE_URL;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream catalog API that /api/* is proxied to
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

fn default_port() -> u16 {
    8080
}

fn default_catalog_url() -> String {
    CATALOG_BASE_URL.to_string()
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("TVDASH_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/tvshow-dashboard");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("tvshow-dashboard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/tvshow-dashboard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("tvshow-dashboard");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        .set_default("catalog_url", default_catalog_url())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (TVDASH_PORT, TVDASH_CATALOG_URL)
        .add_source(
            ::config::Environment::with_prefix("TVDASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: TVDASH_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("TVDASH_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
