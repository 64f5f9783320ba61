use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use application::{MessageDto, SendOutcome};

use crate::state::AppState;

// Every request field defaults to an empty string: absent or empty values are
// valid no-op-safe inputs, never a reason for an error status.

#[derive(Debug, Deserialize)]
struct SendChatPayload {
    #[serde(default)]
    user: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct BlockUserPayload {
    #[serde(default)]
    username: String,
}

#[derive(Debug, Deserialize)]
struct ClearMinePayload {
    #[serde(default)]
    user: String,
}

#[derive(Debug, Deserialize)]
struct GreetPayload {
    #[serde(default)]
    name: String,
}

/// Send response. `accepted` is the explicit discriminator between a stored
/// message and a rejection; the text alone is for humans.
#[derive(Debug, Serialize)]
struct SendChatResponse {
    accepted: bool,
    message: String,
}

#[derive(Debug, Serialize)]
struct BlockUserResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ClearMineResponse {
    message: String,
    deleted_count: usize,
}

#[derive(Debug, Serialize)]
struct AllMessagesResponse {
    messages: Vec<MessageDto>,
}

#[derive(Debug, Serialize)]
struct GreetResponse {
    message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/send", post(send_chat))
        .route("/chat/clear", post(clear_my_messages))
        .route("/chat/messages", get(get_all_messages))
        .route("/moderation/block", post(block_user))
        .route("/greet", post(greet))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn send_chat(
    State(state): State<AppState>,
    Json(payload): Json<SendChatPayload>,
) -> Json<SendChatResponse> {
    let outcome = state
        .relay_service
        .send_chat(&payload.user, &payload.message)
        .await;

    let response = match outcome {
        SendOutcome::Stored { .. } => SendChatResponse {
            accepted: true,
            message: format!("Message from {} saved: {}", payload.user, payload.message),
        },
        SendOutcome::RejectedBlocked => SendChatResponse {
            accepted: false,
            message: format!(
                "Message from {} could not be displayed because the user is blocked.",
                payload.user
            ),
        },
    };

    Json(response)
}

async fn block_user(
    State(state): State<AppState>,
    Json(payload): Json<BlockUserPayload>,
) -> Json<BlockUserResponse> {
    // Re-blocking is a no-op observable as success; same confirmation text.
    state.relay_service.block_user(&payload.username).await;

    Json(BlockUserResponse {
        message: format!("{} has been blocked.", payload.username),
    })
}

async fn clear_my_messages(
    State(state): State<AppState>,
    Json(payload): Json<ClearMinePayload>,
) -> Json<ClearMineResponse> {
    let deleted_count = state.relay_service.clear_my_messages(&payload.user).await;

    Json(ClearMineResponse {
        message: format!(
            "{} message(s) from {} were deleted",
            deleted_count, payload.user
        ),
        deleted_count,
    })
}

async fn get_all_messages(State(state): State<AppState>) -> Json<AllMessagesResponse> {
    let messages = state.relay_service.get_all_messages().await;
    Json(AllMessagesResponse { messages })
}

async fn greet(
    State(state): State<AppState>,
    Json(payload): Json<GreetPayload>,
) -> Json<GreetResponse> {
    Json(GreetResponse {
        message: state.relay_service.greet(&payload.name),
    })
}
