use crate::error::Result;
use d4sign_client::D4SignCredentials;
use global_utils::env_parser::EnvParser;
use tracing::instrument;

pub struct TokenApi;
impl EnvParser for TokenApi {
    const ENV_NAME: &'static str = "TOKEN_API";
}

pub struct CryptKey;
impl EnvParser for CryptKey {
    const ENV_NAME: &'static str = "CRYPT_KEY";
}

/// Reads `TOKEN_API` and `CRYPT_KEY` envs, both must be present and non-blank
#[instrument(level = "debug")]
pub fn load_credentials() -> Result<D4SignCredentials> {
    Ok(D4SignCredentials {
        token_api: TokenApi::obtain_non_empty_env_value()?,
        crypt_key: CryptKey::obtain_non_empty_env_value()?,
    })
}
