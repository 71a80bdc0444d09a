use eyre::{WrapErr, eyre};
use global_utils::config_variant::ConfigVariant;
use global_utils::logger::init_logger;
use report_proxy_config_parser::config::ServerConfig;
use report_proxy_config_parser::credentials::load_credentials;
use report_proxy_server::init::{create_app, create_degraded_app};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

#[instrument(level = "debug", ret)]
#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _ = dotenvy::dotenv();
    let _logger_guard = init_logger();

    let app_config = ServerConfig::init_config(ConfigVariant::init())?;
    tracing::debug!("App config: {:?}", app_config);

    let app = match load_credentials() {
        Ok(credentials) => create_app(&app_config, credentials)?,
        Err(err) if app_config.app_config.fail_fast_on_missing_credentials => {
            return Err(eyre!(err).wrap_err("D4Sign credentials are required, set TOKEN_API and CRYPT_KEY"));
        }
        Err(err) => {
            warn!("Serving without D4Sign credentials, every route will answer 500");
            create_degraded_app(err)
        }
    };

    let addr_to_listen = app_config.app_config.get_app_binding_url()?;
    let listener = TcpListener::bind(addr_to_listen)
        .await
        .wrap_err_with(|| format!("Failed to bind to address {addr_to_listen}"))?;
    info!("Report proxy listening on {addr_to_listen}");
    #[cfg(feature = "swagger")]
    {
        info!("Swagger UI available at http://{addr_to_listen}/swagger-ui/");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Failed to serve: {e}"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received, stopping report proxy");
}
