//! Axum web server with WebSocket streaming for the visualizer.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sortvis_record::Algorithm;
use tokio::sync::{broadcast, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::VisConfig;
use crate::display::{ArrayKind, DisplayArray};
use crate::error::{Error, Result};
use crate::playback::PlaybackProgress;
use crate::player::{Player, PlayerNotification, PlayerState};
use crate::source::ArrayGenerator;

/// Shared application state.
pub struct AppState {
    player: Player,
    generator: Mutex<ArrayGenerator>,
    config: VisConfig,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server with a freshly generated random array.
    pub fn new(config: VisConfig) -> Result<Self> {
        let mut generator = ArrayGenerator::new(config.seed);
        let display = generator.generate(&config.array_spec(ArrayKind::Random, None))?;
        let player = Player::new(display, config.player_config());
        Ok(Self {
            state: Arc::new(AppState {
                player,
                generator: Mutex::new(generator),
                config,
            }),
        })
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/status", get(status_handler))
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/array", get(array_handler).post(generate_handler))
            .route("/api/start", post(start_handler))
            .route("/api/stop", post(stop_handler))
            .route("/api/speed", post(speed_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state))
    }

    /// Run the server on the configured address.
    pub async fn serve(self) -> Result<()> {
        let addr = self.state.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Visualization server running on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

type ApiResult<T> = std::result::Result<Json<T>, (StatusCode, String)>;

fn api_error(e: Error) -> (StatusCode, String) {
    warn!("request failed: {}", e);
    (e.status_code(), e.to_string())
}

/// Server status response.
#[derive(Debug, Serialize, Deserialize)]
struct StatusResponse {
    state: PlayerState,
    delay_ms: u64,
    len: usize,
    progress: PlaybackProgress,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let len = state.player.display().read().await.len();
    Json(StatusResponse {
        state: state.player.state(),
        delay_ms: state.player.delay().as_millis() as u64,
        len,
        progress: state.player.progress(),
    })
}

async fn algorithms_handler() -> Json<Vec<&'static str>> {
    Json(Algorithm::ALL.iter().map(|a| a.name()).collect())
}

async fn array_handler(State(state): State<Arc<AppState>>) -> Json<DisplayArray> {
    Json(state.player.snapshot().await)
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    kind: ArrayKind,
    amount: Option<usize>,
}

async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> ApiResult<DisplayArray> {
    let display = regenerate(&state, req.kind, req.amount).await.map_err(api_error)?;
    Ok(Json(display))
}

async fn regenerate(state: &AppState, kind: ArrayKind, bars: Option<usize>) -> Result<DisplayArray> {
    let spec = state.config.array_spec(kind, bars);
    let display = state.generator.lock().await.generate(&spec)?;
    state.player.replace_display(display.clone()).await?;
    Ok(display)
}

#[derive(Debug, Deserialize)]
struct StartRequest {
    algorithm: String,
    delay_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StartResponse {
    algorithm: String,
    total_events: usize,
}

async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartRequest>,
) -> ApiResult<StartResponse> {
    let algorithm: Algorithm = req
        .algorithm
        .parse()
        .map_err(|e| api_error(Error::from(e)))?;
    let delay = req
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(state.config.delay);
    let total_events = state
        .player
        .start(algorithm, delay)
        .await
        .map_err(api_error)?;
    Ok(Json(StartResponse {
        algorithm: algorithm.name().to_string(),
        total_events,
    }))
}

/// Stop playback and re-randomize the array, as the settings bar does.
async fn stop_handler(State(state): State<Arc<AppState>>) -> ApiResult<DisplayArray> {
    state.player.stop();
    state.player.wait().await;
    let display = regenerate(&state, ArrayKind::Random, None)
        .await
        .map_err(api_error)?;
    Ok(Json(display))
}

#[derive(Debug, Deserialize)]
struct SpeedRequest {
    delay_ms: u64,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<StatusResponse> {
    state.player.set_delay(Duration::from_millis(req.delay_ms));
    status_handler(State(state)).await
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Full array, sent on connect and when a subscriber lagged behind.
#[derive(Serialize)]
#[serde(tag = "type", rename = "snapshot")]
struct Snapshot {
    array: DisplayArray,
    progress: PlaybackProgress,
}

/// Outgoing WebSocket frames.
#[derive(Serialize)]
#[serde(untagged)]
enum WsMessage {
    Snapshot(Snapshot),
    Player(PlayerNotification),
}

impl WsMessage {
    async fn snapshot(player: &Player) -> Self {
        WsMessage::Snapshot(Snapshot {
            array: player.snapshot().await,
            progress: player.progress(),
        })
    }
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    debug!("WebSocket client connected");
    let mut notifications = state.player.subscribe();

    let snapshot = WsMessage::snapshot(&state.player).await;
    if send(&mut socket, &snapshot).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            notification = notifications.recv() => {
                let message = match notification {
                    Ok(n) => WsMessage::Player(n),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!(skipped, "WebSocket subscriber lagged, resending snapshot");
                        WsMessage::snapshot(&state.player).await
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if send(&mut socket, &message).await.is_err() {
                    break;
                }
            }
        }
    }
    debug!("WebSocket client disconnected");
}

async fn send(socket: &mut WebSocket, message: &WsMessage) -> Result<()> {
    let json = serde_json::to_string(message)?;
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}
