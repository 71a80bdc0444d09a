use std::fmt;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use axum_test::TestServer;
use d4sign_client::models::{RawPage, Safe};
use d4sign_client::{D4SignApi, D4SignClientError};
use eyre::eyre;
use global_utils::config_variant::ConfigVariant;
use global_utils::logger::{LoggerGuard, init_logger};
use mockall::mock;
use report_proxy_config_parser::config::ServerConfig;
use report_proxy_server::init::{create_app_with_api, create_degraded_app};
use serde_json::{Value, json};
use tracing::info;

pub static TEST_LOGGER: LazyLock<LoggerGuard> = LazyLock::new(init_logger);

mock! {
    pub D4Sign {}

    #[async_trait]
    impl D4SignApi for D4Sign {
        async fn list_safes(&self) -> Result<Vec<Safe>, D4SignClientError>;
        async fn list_safe_documents_page(&self, safe_id: &str, page: u32) -> Result<RawPage, D4SignClientError>;
        async fn list_account_documents_page(&self, page: u32) -> Result<RawPage, D4SignClientError>;
        async fn list_signers(&self, document_id: &str) -> Result<Value, D4SignClientError>;
    }
}

impl fmt::Debug for MockD4Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockD4Sign").finish_non_exhaustive()
    }
}

pub fn safe(id: &str, name: &str) -> Safe {
    Safe {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn doc(id: &str, name: &str) -> Value {
    json!({ "uuidDoc": id, "nameDoc": name })
}

pub fn test_config() -> eyre::Result<ServerConfig> {
    let mut config = ServerConfig::init_config(ConfigVariant::Local)?;
    config.cache.enabled = true;
    config.cache.ttl_secs = 300;
    config.aggregation.max_pages = 10;
    config.aggregation.excluded_document_names = vec![];
    Ok(config)
}

pub fn init_mocked_test_server(mock: MockD4Sign) -> eyre::Result<TestServer> {
    let app = create_app_with_api(Arc::new(mock), &test_config()?);
    let test_server = TestServer::new(app).map_err(|err| eyre!(err.to_string()))?;
    info!("Mocked report proxy test server is ready");
    Ok(test_server)
}

pub fn init_degraded_test_server() -> eyre::Result<TestServer> {
    let app = create_degraded_app("Missing env variable 'TOKEN_API'");
    TestServer::new(app).map_err(|err| eyre!(err.to_string()))
}
