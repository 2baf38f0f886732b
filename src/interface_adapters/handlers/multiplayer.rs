use crate::domain::session::MultiplayerSession;
use crate::interface_adapters::protocol::ActionResponse;
use crate::use_cases::fixtures::multiplayer_sessions;
use axum::Json;
use axum::extract::Path;

pub async fn list_sessions() -> Json<Vec<MultiplayerSession>> {
    let sessions = multiplayer_sessions();
    let open = sessions.iter().filter(|session| !session.is_full()).count();
    tracing::debug!(total = sessions.len(), open, "listing multiplayer sessions");
    Json(sessions)
}

// Acknowledge leaving a session. The listing is never changed.
#[tracing::instrument(name = "leave_session", skip_all, fields(session_id = %id))]
pub async fn leave_session(Path(id): Path<String>) -> Json<ActionResponse> {
    Json(ActionResponse {
        success: true,
        message: format!("Left session {id}"),
    })
}
