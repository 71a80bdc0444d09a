use config::{Config, Environment};
use d4sign_client::D4SignConfig;
use global_utils::config_path::ConfigPath;
use global_utils::config_variant::ConfigVariant;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, instrument, trace};

use crate::error::ConfigParserError;

const CONFIG_FOLDER_NAME: &str = "../../../infrastructure/configurations/report_proxy";
const PRODUCTION_CONFIG_FOLDER_NAME: &str = "/configuration_report_proxy";
const DEFAULT_APP_LOCAL_BASE_FILENAME: &str = "base.toml";
const ENV_OVERRIDE_PREFIX: &str = "REPORT_PROXY";
const ENV_OVERRIDE_SEPARATOR: &str = "__";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(rename = "http_server_ip")]
    pub ip: String,
    #[serde(rename = "http_server_port")]
    pub port: u16,
    /// When false, a process without credentials still starts and answers every route with 500
    pub fail_fast_on_missing_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AggregationConfig {
    /// Upper bound of pages fetched for one safe
    pub max_pages: u32,
    /// How many safes are paginated at once during an all-safes aggregation
    pub safe_concurrency: usize,
    #[serde(default)]
    pub excluded_document_names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    pub enabled: bool,
    /// `0` keeps the aggregated listing for the whole process lifetime
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        (self.ttl_secs > 0).then(|| Duration::from_secs(self.ttl_secs))
    }
}

/// Struct used for initialization of different kinds of configurations
///
/// Example of using local configuration:
/// ```rust
/// use global_utils::config_variant::ConfigVariant;
/// use report_proxy_config_parser::config::ServerConfig;
/// let config = ServerConfig::init_config(ConfigVariant::Local);
/// assert!(config.is_ok())
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(rename(deserialize = "application"))]
    pub app_config: AppConfig,
    pub d4sign: D4SignConfig,
    pub aggregation: AggregationConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    #[inline]
    pub fn get_app_binding_url(&self) -> crate::error::Result<SocketAddr> {
        Ok(SocketAddr::from_str(&format!("{}:{}", self.ip, self.port))?)
    }
}

impl ServerConfig {
    #[instrument(level = "debug", ret)]
    pub fn init_config(config_variant: ConfigVariant) -> crate::error::Result<Self> {
        trace!("Initializing, {config_variant}...");
        let folder_path = match config_variant {
            ConfigVariant::Production => ConfigPath::from_env_or(PRODUCTION_CONFIG_FOLDER_NAME).path,
            ConfigVariant::Local => {
                let _ = dotenvy::dotenv();
                format!("{}/{CONFIG_FOLDER_NAME}", env!("CARGO_MANIFEST_DIR"))
            }
        };
        Self::init_config_from_folder(&folder_path, config_variant)
    }

    /// Merges `base.toml`, the optional `<variant>.toml` and `REPORT_PROXY__*` env overrides,
    /// e.g. `REPORT_PROXY__CACHE__TTL_SECS=60`
    #[instrument(level = "debug", ret)]
    pub fn init_config_from_folder(folder_path: &str, config_variant: ConfigVariant) -> crate::error::Result<Self> {
        debug!("Configuration folder lookup path: {folder_path}");
        let (path_to_base, path_to_another_config_to_merge) = (
            format!("{folder_path}/{DEFAULT_APP_LOCAL_BASE_FILENAME}"),
            format!("{folder_path}/{config_variant}.toml"),
        );
        trace!(
            "Paths to resolve: path_to_base: '{path_to_base}', path_to_another_config: '{path_to_another_config_to_merge}'",
        );
        let config = Config::builder()
            .add_source(config::File::with_name(&path_to_base))
            .add_source(config::File::with_name(&path_to_another_config_to_merge).required(false))
            .add_source(
                Environment::with_prefix(ENV_OVERRIDE_PREFIX)
                    .prefix_separator(ENV_OVERRIDE_SEPARATOR)
                    .separator(ENV_OVERRIDE_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("aggregation.excluded_document_names")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<ServerConfig>()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.aggregation.max_pages == 0 {
            return Err(ConfigParserError::InvalidValue {
                field: "aggregation.max_pages",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.aggregation.safe_concurrency == 0 {
            return Err(ConfigParserError::InvalidValue {
                field: "aggregation.safe_concurrency",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.d4sign.timeout_secs == 0 {
            return Err(ConfigParserError::InvalidValue {
                field: "d4sign.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
