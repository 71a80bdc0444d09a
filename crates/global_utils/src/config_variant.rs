use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub const APP_CONFIGURATION_NAME: &str = "APP_ENVIRONMENT";

/// Selects which `<variant>.toml` is merged over `base.toml`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigVariant {
    #[strum(serialize = "production")]
    Production,
    #[strum(serialize = "local")]
    Local,
}

impl ConfigVariant {
    /// Reads `APP_ENVIRONMENT`, anything except `production` means [`ConfigVariant::Local`]
    #[instrument(level = "trace", ret)]
    pub fn init() -> ConfigVariant {
        let raw = std::env::var(APP_CONFIGURATION_NAME).ok();
        debug!(value = ?raw, "Resolving {APP_CONFIGURATION_NAME}");
        Self::from_raw(raw.as_deref())
    }

    pub fn from_raw(raw: Option<&str>) -> ConfigVariant {
        match raw {
            Some(x) if x.trim().eq_ignore_ascii_case(&ConfigVariant::Production.to_string()) => {
                ConfigVariant::Production
            }
            _ => ConfigVariant::Local,
        }
    }
}
