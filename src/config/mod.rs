//! Configuration file management and credential resolution.

mod manager;

pub use manager::{ConfigFile, ConfigManager, Credentials, DlbConfig, resolve_credentials};
