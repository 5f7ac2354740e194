//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Environment variable holding the contact endpoint URL
pub const ENV_API_URL: &str = "REACHOUT_API_URL";

/// Environment variable holding the contact endpoint API key
pub const ENV_API_KEY: &str = "REACHOUT_API_KEY";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".reachout";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Log file written to the working directory
pub const LOG_FILE: &str = "reachout.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Reachout TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
