use std::sync::LazyLock;
use tracing::warn;

/// Environment variables the application reads its settings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationKey {
    DataDir,
    StoreKey,
    LogFilter,
}

impl ConfigurationKey {
    pub const fn variable_name(self) -> &'static str {
        match self {
            Self::DataDir => "PERSONNEL_DATA_DIR",
            Self::StoreKey => "PERSONNEL_STORE_KEY",
            Self::LogFilter => "PERSONNEL_LOG",
        }
    }

    pub const fn default_value(self) -> &'static str {
        match self {
            Self::DataDir => "data",
            Self::StoreKey => "persons",
            Self::LogFilter => "personnel_records=info",
        }
    }
}

/// The value set for `key`, ignoring blank ones.
pub fn value(key: ConfigurationKey) -> Option<String> {
    match std::env::var(key.variable_name()) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(err) => {
            warn!("ignoring {}: {err}", key.variable_name());
            None
        }
    }
}

fn value_or_default(key: ConfigurationKey) -> String {
    value(key).unwrap_or_else(|| key.default_value().to_string())
}

/// Directory the file slot keeps its documents in.
pub static DATA_DIR: LazyLock<String> =
    LazyLock::new(|| value_or_default(ConfigurationKey::DataDir));

/// Slot key the personnel collection is stored under.
pub static STORE_KEY: LazyLock<String> =
    LazyLock::new(|| value_or_default(ConfigurationKey::StoreKey));

pub static LOG_FILTER: LazyLock<String> =
    LazyLock::new(|| value_or_default(ConfigurationKey::LogFilter));
