use crate::error::ServerError;
use crate::handlers;
use crate::headers::shared_cache_control;
use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::get;
use d4sign_client::{D4SignApi, D4SignClient, D4SignClientError, D4SignCredentials};
use report_proxy_config_parser::config::ServerConfig;
use report_proxy_document_aggregator::aggregator::DocumentAggregator;
use report_proxy_document_aggregator::signer_lookup::SignerLookup;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::OpenApi;

#[cfg(feature = "swagger")]
use utoipa_swagger_ui::SwaggerUi;

pub struct ReportApi;

impl ReportApi {
    /// Every route is served at the root and once more under this prefix
    pub const API_PREFIX: &'static str = "/api";
    pub const HEALTHCHECK_ENDPOINT: &'static str = "/health";
    pub const LIST_DOCUMENTS_ENDPOINT: &'static str = "/documents";
    pub const DOCUMENT_SIGNERS_ENDPOINT: &'static str = "/documents/{uuidDoc}/signers";
    pub const DOCUMENT_CONTACTS_ENDPOINT: &'static str = "/documents/{uuidDoc}/contacts";
    pub const LIST_SAFES_ENDPOINT: &'static str = "/safes";
    pub const SAFE_DOCUMENTS_ENDPOINT: &'static str = "/safes/{uuidSafe}/documents";
    pub const ACCOUNT_DOCUMENTS_ENDPOINT: &'static str = "/account/documents";
}

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<DocumentAggregator>,
    pub signer_lookup: Arc<SignerLookup>,
    pub shared_cache_control: HeaderValue,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::healthcheck::handle,
        handlers::list_documents::handle,
        handlers::get_document_signers::handle,
        handlers::get_document_contacts::handle,
        handlers::list_safes::handle,
        handlers::list_safe_documents::handle,
        handlers::list_account_documents::handle,
    ),
    components(schemas(
        d4sign_client::models::Safe,
        d4sign_client::models::DocumentSummary,
        d4sign_client::models::SignerRecord,
        global_utils::common_resp::ErrorResponse,
        global_utils::common_resp::Empty,
    ))
)]
pub struct ApiDoc;

#[instrument(level = "debug", skip(config, credentials), err)]
pub fn create_app(config: &ServerConfig, credentials: D4SignCredentials) -> Result<Router, D4SignClientError> {
    let client = D4SignClient::new(config.d4sign.clone(), credentials)?;
    info!("D4Sign client created for {}", config.d4sign.base_url);
    Ok(create_app_with_api(Arc::new(client), config))
}

/// Builds the router over any [`D4SignApi`] implementation
pub fn create_app_with_api(api: Arc<dyn D4SignApi>, config: &ServerConfig) -> Router {
    let state = AppState {
        aggregator: Arc::new(DocumentAggregator::new(
            api.clone(),
            config.aggregation.clone(),
            &config.cache,
        )),
        signer_lookup: Arc::new(SignerLookup::new(api)),
        shared_cache_control: shared_cache_control(config.cache.ttl_secs),
    };
    let routes = Router::new()
        .route(ReportApi::HEALTHCHECK_ENDPOINT, get(handlers::healthcheck::handle))
        .route(ReportApi::LIST_DOCUMENTS_ENDPOINT, get(handlers::list_documents::handle))
        .route(
            ReportApi::DOCUMENT_SIGNERS_ENDPOINT,
            get(handlers::get_document_signers::handle),
        )
        .route(
            ReportApi::DOCUMENT_CONTACTS_ENDPOINT,
            get(handlers::get_document_contacts::handle),
        )
        .route(ReportApi::LIST_SAFES_ENDPOINT, get(handlers::list_safes::handle))
        .route(
            ReportApi::SAFE_DOCUMENTS_ENDPOINT,
            get(handlers::list_safe_documents::handle),
        )
        .route(
            ReportApi::ACCOUNT_DOCUMENTS_ENDPOINT,
            get(handlers::list_account_documents::handle),
        )
        .with_state(state);

    let app = Router::new()
        .merge(routes.clone())
        .nest(ReportApi::API_PREFIX, routes)
        .fallback(not_found);

    #[cfg(feature = "swagger")]
    let app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    app
}

/// App used when the process runs without D4Sign credentials: every path answers 500.
pub fn create_degraded_app(reason: impl ToString) -> Router {
    let reason = reason.to_string();
    warn!("Starting in degraded mode: {reason}");
    Router::new().fallback(move || {
        let reason = reason.clone();
        async move { ServerError::MissingCredentials(reason) }
    })
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
