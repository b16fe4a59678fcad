//! Purchase relay server binary.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use purchase_relay::adapters::country::StaticCountryDirectory;
use purchase_relay::adapters::http::{webhook_router, WebhooksAppState};
use purchase_relay::adapters::notifier::LoggingNotifier;
use purchase_relay::adapters::revenuecat::BearerTokenVerifier;
use purchase_relay::adapters::telegram::{TelegramConfig as TelegramClientConfig, TelegramNotifier};
use purchase_relay::application::handlers::purchase::SendPurchaseNotificationHandler;
use purchase_relay::config::{AppConfig, ConfigError, ValidationError};
use purchase_relay::domain::purchase::EventNormalizer;
use purchase_relay::logging::init_tracing;
use purchase_relay::ports::{NotificationDestination, Notifier};

/// Chat name used by the log-only notifier.
const LOG_DESTINATION: &str = "log";

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build Telegram client: {0}")]
    TelegramClient(#[from] reqwest::Error),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        Self::Config(ConfigError::from(err))
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("purchase-relay: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let (notifier, destination) = build_notifier(&config)?;
    let normalizer = EventNormalizer::new(
        config.notification.locale,
        Arc::new(StaticCountryDirectory::new()),
    );
    let handler = SendPurchaseNotificationHandler::new(
        normalizer,
        notifier,
        destination,
        config.notification.delivery_timeout(),
    );

    let bearer_token = config
        .revenuecat
        .bearer_token
        .clone()
        .ok_or(ValidationError::MissingRequired("REVENUECAT__BEARER_TOKEN"))?;

    let state = WebhooksAppState {
        notification_handler: Arc::new(handler),
        revenuecat_auth: BearerTokenVerifier::new(bearer_token),
    };

    let app = webhook_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = %config.server.environment,
        locale = ?config.notification.locale,
        "Purchase relay listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Telegram when a bot token is configured, log-only otherwise.
fn build_notifier(
    config: &AppConfig,
) -> Result<(Arc<dyn Notifier>, NotificationDestination), StartupError> {
    let telegram = &config.telegram;

    match (telegram.bot_token(), telegram.chat_id()) {
        (Some(token), Some(chat_id)) => {
            let client_config = TelegramClientConfig::from_secret(token.clone())
                .with_base_url(telegram.api_base_url.clone())
                .with_timeout(config.notification.delivery_timeout());
            let notifier = TelegramNotifier::new(client_config)?;
            tracing::info!(chat_id, "Delivering notifications to Telegram");
            Ok((Arc::new(notifier), NotificationDestination::new(chat_id)))
        }
        _ => {
            tracing::warn!("No Telegram bot token configured; notifications are only logged");
            Ok((
                Arc::new(LoggingNotifier::new()),
                NotificationDestination::new(LOG_DESTINATION),
            ))
        }
    }
}
