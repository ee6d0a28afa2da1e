use axum::{
    body::to_bytes,
    extract::Request,
    http::{Method, StatusCode},
};
use serde::Deserialize;
use tracing::warn;

use super::state::AppState;
use crate::error::ApiError;
use crate::meetings::{MeetingDetails, MeetingStatus};

/// Identity header injected by the chat platform for authenticated requests.
const HEADER_USER_ID: &str = "Mattermost-User-Id";

/// Cap on the request body; a start-meeting payload is a few dozen bytes.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Deserialize)]
pub struct StartMeetingRequest {
    #[serde(default)]
    pub channel_id: String,
    /// Accepted for wire compatibility; not used when starting the meeting.
    #[serde(default)]
    #[allow(dead_code)]
    pub meeting_id: Option<i64>,
}

/// POST /api/v1/meetings
///
/// Ordered validation chain, each step short-circuiting: method, identity
/// header, JSON payload, channel id, channel membership, plugin
/// configuration. Only then is the meeting starter invoked.
pub async fn start_meeting(
    state: AppState,
    req: Request,
) -> Result<(StatusCode, String), ApiError> {
    if req.method() != Method::POST {
        return Err(ApiError::method_not_allowed(req.method()));
    }

    let user_id = req
        .headers()
        .get(HEADER_USER_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if user_id.is_empty() {
        return Err(ApiError::unauthorized());
    }

    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::bad_request(format!("failed to read request body: {e}")))?;
    let payload: StartMeetingRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("invalid request body: {e}")))?;

    if payload.channel_id.is_empty() {
        return Err(ApiError::bad_request("channel id required"));
    }

    if let Err(e) = state
        .platform
        .get_channel_member(&payload.channel_id, &user_id)
        .await
    {
        // Detail stays in the logs; the response must not reveal whether
        // the channel exists.
        warn!(channel_id = %payload.channel_id, error = %e, "membership check failed");
        return Err(ApiError::forbidden());
    }

    if !state.webex.is_valid() {
        return Err(ApiError::internal(
            "unable to setup a meeting; the Webex plugin has not been configured correctly. \
             Please speak with your Mattermost administrator",
        ));
    }

    let details = MeetingDetails {
        started_by_user_id: user_id.clone(),
        meeting_room_of_user_id: user_id,
        channel_id: payload.channel_id,
        status: MeetingStatus::Started,
    };

    let result = state.meetings.start_meeting(details).await?;

    Ok((result.status, result.created_join_post.id))
}
