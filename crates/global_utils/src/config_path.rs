use crate::env_parser::{EnvParser, EnvParserError};

pub struct ConfigPath {
    pub path: String,
}
impl EnvParser for ConfigPath {
    const ENV_NAME: &'static str = "CONFIG_PATH";
}
impl ConfigPath {
    /// Reads `CONFIG_PATH` env
    pub fn from_env() -> Result<Self, EnvParserError> {
        Ok(Self {
            path: ConfigPath::obtain_env_value()?,
        })
    }

    /// Reads `CONFIG_PATH` env, falling back to `default` when it is not set
    pub fn from_env_or(default: impl Into<String>) -> Self {
        Self::from_env().unwrap_or_else(|_| Self { path: default.into() })
    }
}
