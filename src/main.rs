use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use resend_client::{Config, WebhookHeaders, WebhookVerifier};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct AppState {
    pub webhook_secret: String,
    pub verifier: WebhookVerifier,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let webhook_secret = config
        .webhook_secret
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("RESEND_WEBHOOK_SECRET not set"))?;

    let state = AppState {
        webhook_secret,
        verifier: WebhookVerifier::with_tolerance(config.webhook_tolerance_secs),
    };

    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(
        "Webhook receiver listening on http://{}/webhook (tolerance {}s)",
        config.bind_address, config.webhook_tolerance_secs
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    // The body must stay untouched until it has been verified.
    let envelope = WebhookHeaders::from_fn(|name| headers.get(name).and_then(|v| v.to_str().ok()));

    if let Err(e) = state
        .verifier
        .verify(&body, &envelope, &state.webhook_secret)
    {
        warn!("Webhook verification failed: {}", e);
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": e.to_string() })),
        );
    }

    let event_type = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|payload| payload["type"].as_str().map(str::to_string));
    info!(
        "Webhook verified: id={} type={}",
        envelope.id.unwrap_or_default(),
        event_type.as_deref().unwrap_or("unknown")
    );

    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now()
    }))
}
