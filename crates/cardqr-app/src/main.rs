use salvo::conn::TcpListener;
use salvo::{Listener, Server};
use cardqr_app::app::router;
use cardqr_core::config::load_config;
use cardqr_rfc::rfc::vcard::property_names;
use cardqr_service::card::{CardService, default_record};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(filter_layer).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    tracing::info!("Starting cardqr server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let service = CardService::from_settings(&config)?;

    match default_record(&config) {
        Ok(Some(record)) => tracing::info!(properties = ?property_names(&record), "Default card configured"),
        Ok(None) => tracing::debug!("No default card configured"),
        Err(e) => tracing::warn!(error = %e, "Default card is invalid; /api/qr/default will fail"),
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    tracing::info!(origin = %config.server.origin(), "Share links use this origin");

    let router = router(config, service);

    tracing::info!("Server listening on {bind_addr}");

    Server::new(acceptor).serve(router).await;

    Ok(())
}
