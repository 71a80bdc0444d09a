use std::env::VarError;

use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum EnvParserError {
    #[error("Failed to parse env variable {missing_var_name}, err: {err}, check if it exists and is valid")]
    ConfigEnvParseError { missing_var_name: String, err: VarError },
    #[error("Env variable {var_name} is set but empty")]
    EmptyEnvValue { var_name: String },
}

pub trait EnvParser {
    const ENV_NAME: &'static str;
    fn obtain_env_value() -> Result<String, EnvParserError> {
        obtain_env_value(Self::ENV_NAME)
    }
    fn obtain_non_empty_env_value() -> Result<String, EnvParserError> {
        obtain_non_empty_env_value(Self::ENV_NAME)
    }
}

#[instrument(level = "debug", skip(name), fields(name = name.as_ref()))]
pub fn obtain_env_value(name: impl AsRef<str>) -> Result<String, EnvParserError> {
    std::env::var(name.as_ref()).map_err(|err| EnvParserError::ConfigEnvParseError {
        missing_var_name: name.as_ref().to_string(),
        err,
    })
}

/// Same as [`obtain_env_value`], but whitespace-only values count as absent.
/// The value itself is never logged, secrets go through here.
#[instrument(level = "debug", skip(name), fields(name = name.as_ref()))]
pub fn obtain_non_empty_env_value(name: impl AsRef<str>) -> Result<String, EnvParserError> {
    let value = obtain_env_value(name.as_ref())?;
    if value.trim().is_empty() {
        return Err(EnvParserError::EmptyEnvValue {
            var_name: name.as_ref().to_string(),
        });
    }
    Ok(value.trim().to_string())
}
