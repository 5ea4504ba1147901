//! HTTP + WebSocket API for the gesture engine
//!
//! Endpoints:
//! - POST /tick - Feed one `HandsFrame`, returns the `TickReport`
//! - GET /hands/{side} - Latest report for `left` or `right`
//! - GET /gestures - Gesture flags for both hands
//! - GET /projectiles - Live projectiles
//! - GET /config - Active configuration
//! - WS /ws - Live tick reports
//! - GET /health - Health check

use axum::{
    extract::{ws::{Message, WebSocket}, Path, State, WebSocketUpgrade},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::core::{Clock, FrameOrchestrator, MonotonicClock};
use crate::types::{GestureConfig, GestureSummary, HandReport, HandSide, HandsFrame, ProjectileView, TickReport};

/// Broadcast buffer for live tick reports
const UPDATE_CHANNEL_CAPACITY: usize = 100;

/// App state
pub struct AppState {
    /// Ticks are serialised through the write lock
    pub orchestrator: RwLock<FrameOrchestrator>,
    pub update_tx: broadcast::Sender<TickReport>,
    /// Server uptime, reported by `/health`
    pub clock: MonotonicClock,
}

impl AppState {
    pub fn new(config: GestureConfig) -> Self {
        let (update_tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            orchestrator: RwLock::new(FrameOrchestrator::new(config)),
            update_tx,
            clock: MonotonicClock::new(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ticks: u64,
    pub uptime_secs: f64,
}

/// Create the API router
pub fn create_router(config: GestureConfig) -> Router {
    router_with_state(Arc::new(AppState::new(config)))
}

/// Router over an existing state (lets callers keep a handle)
pub fn router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tick", post(tick))
        .route("/hands/:side", get(get_hand))
        .route("/gestures", get(get_gestures))
        .route("/projectiles", get(get_projectiles))
        .route("/config", get(get_config))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let orchestrator = state.orchestrator.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        ticks: orchestrator.tick_count(),
        uptime_secs: state.clock.now(),
    })
}

/// Run one tick on the posted frame
async fn tick(State(state): State<Arc<AppState>>, Json(frame): Json<HandsFrame>) -> Json<TickReport> {
    let report = {
        let mut orchestrator = state.orchestrator.write().await;
        orchestrator.tick_at(&frame, frame.time)
    };

    // No subscribers is fine
    let _ = state.update_tx.send(report.clone());
    Json(report)
}

/// Latest report for one hand
async fn get_hand(
    State(state): State<Arc<AppState>>,
    Path(side): Path<String>,
) -> Result<Json<HandReport>, StatusCode> {
    let side: HandSide = side.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let orchestrator = state.orchestrator.read().await;
    Ok(Json(orchestrator.hand_report(side)))
}

async fn get_gestures(State(state): State<Arc<AppState>>) -> Json<GestureSummary> {
    let orchestrator = state.orchestrator.read().await;
    Json(orchestrator.gestures())
}

async fn get_projectiles(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectileView>> {
    let orchestrator = state.orchestrator.read().await;
    Json(orchestrator.active_projectiles())
}

async fn get_config(State(state): State<Arc<AppState>>) -> Json<GestureConfig> {
    let orchestrator = state.orchestrator.read().await;
    Json(orchestrator.config().clone())
}

/// WebSocket handler for live updates
async fn websocket_handler(State(state): State<Arc<AppState>>, ws: WebSocketUpgrade) -> impl IntoResponse {
    let rx = state.update_tx.subscribe();
    ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    })
}

/// Handle WebSocket connection
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<TickReport>) {
    debug!("websocket client connected");
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            update = rx.recv() => match update {
                Ok(report) => {
                    let json = match serde_json::to_string(&report) {
                        Ok(json) => json,
                        Err(e) => {
                            warn!(error = %e, "failed to serialize tick report");
                            continue;
                        }
                    };
                    if sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "websocket client lagging");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                // Clients only listen; anything but a close is ignored
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
    debug!("websocket client disconnected");
}

/// Run the API server
pub async fn run_server(addr: &str, config: GestureConfig) -> anyhow::Result<()> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API listening");
    println!("🕸️  Webshooter API running on {}", addr);
    println!("  POST /tick          - Feed a hands frame");
    println!("  GET  /hands/:side   - Latest hand report");
    println!("  GET  /gestures      - Gesture flags");
    println!("  GET  /projectiles   - Live projectiles");
    println!("  GET  /config        - Active configuration");
    println!("  WS   /ws            - Live updates");
    println!("  GET  /health        - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
