//! Meeting starter: calls the meeting provider and announces the meeting
//! in the channel with a join post.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::config::WebexConfig;
use crate::error::ApiError;
use crate::platform::{PlatformClient, Post};

/// Lifecycle state stamped on the join post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeetingStatus {
    #[serde(rename = "STARTED")]
    Started,
}

/// Everything the starter needs, assembled by the handler from validated
/// request inputs. Passed by value, never retained.
#[derive(Debug, Clone)]
pub struct MeetingDetails {
    pub started_by_user_id: String,
    pub meeting_room_of_user_id: String,
    pub channel_id: String,
    pub status: MeetingStatus,
}

/// Outcome of a successful meeting start.
#[derive(Debug, Clone)]
pub struct StartMeetingResult {
    pub created_join_post: Post,
    pub status: StatusCode,
}

/// Meeting-provider integration. Errors carry the HTTP status and message
/// to hand back to the caller verbatim.
#[async_trait]
pub trait MeetingStarter: Send + Sync {
    async fn start_meeting(&self, details: MeetingDetails) -> Result<StartMeetingResult, ApiError>;
}

/// Production starter backed by Webex personal rooms.
pub struct Meetings {
    platform: Arc<dyn PlatformClient>,
    webex: Arc<WebexConfig>,
}

impl Meetings {
    pub fn new(platform: Arc<dyn PlatformClient>, webex: Arc<WebexConfig>) -> Self {
        Self { platform, webex }
    }

    /// Personal-room URL for the meeting room owner.
    fn room_url(&self, owner_id: &str) -> String {
        format!("https://{}/meet/{}", self.webex.site_host.trim(), owner_id)
    }
}

#[async_trait]
impl MeetingStarter for Meetings {
    async fn start_meeting(&self, details: MeetingDetails) -> Result<StartMeetingResult, ApiError> {
        let room_url = self.room_url(&details.meeting_room_of_user_id);

        let post = Post {
            id: String::new(),
            channel_id: details.channel_id.clone(),
            user_id: details.started_by_user_id.clone(),
            message: format!("Meeting started at {room_url}."),
            props: Some(json!({
                "meeting_status": details.status,
                "meeting_link": room_url,
            })),
        };

        let created = self
            .platform
            .create_post(&post)
            .await
            .map_err(|e| ApiError::internal(format!("failed to create join post: {e}")))?;

        info!(
            channel_id = %details.channel_id,
            post_id = %created.id,
            "meeting started"
        );

        Ok(StartMeetingResult {
            created_join_post: created,
            status: StatusCode::OK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ChannelMember;
    use anyhow::{bail, Result};

    struct StubPlatform;

    #[async_trait]
    impl PlatformClient for StubPlatform {
        async fn get_channel_member(
            &self,
            channel_id: &str,
            user_id: &str,
        ) -> Result<ChannelMember> {
            Ok(ChannelMember {
                channel_id: channel_id.to_string(),
                user_id: user_id.to_string(),
            })
        }

        async fn create_post(&self, post: &Post) -> Result<Post> {
            let mut created = post.clone();
            created.id = "post-1".to_string();
            Ok(created)
        }
    }

    struct FailingPlatform;

    #[async_trait]
    impl PlatformClient for FailingPlatform {
        async fn get_channel_member(
            &self,
            _channel_id: &str,
            _user_id: &str,
        ) -> Result<ChannelMember> {
            bail!("unused")
        }

        async fn create_post(&self, _post: &Post) -> Result<Post> {
            bail!("connection refused")
        }
    }

    fn details() -> MeetingDetails {
        MeetingDetails {
            started_by_user_id: "U1".to_string(),
            meeting_room_of_user_id: "U1".to_string(),
            channel_id: "C1".to_string(),
            status: MeetingStatus::Started,
        }
    }

    #[tokio::test]
    async fn join_post_carries_room_link() {
        let webex = Arc::new(WebexConfig {
            site_host: "example.webex.com".to_string(),
        });
        let meetings = Meetings::new(Arc::new(StubPlatform), webex);

        let result = meetings.start_meeting(details()).await.unwrap();

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.created_join_post.id, "post-1");
        assert!(result
            .created_join_post
            .message
            .contains("https://example.webex.com/meet/U1"));
        assert_eq!(result.created_join_post.channel_id, "C1");
    }

    #[tokio::test]
    async fn post_creation_failure_maps_to_500() {
        let webex = Arc::new(WebexConfig {
            site_host: "example.webex.com".to_string(),
        });
        let meetings = Meetings::new(Arc::new(FailingPlatform), webex);

        let err = meetings.start_meeting(details()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("failed to create join post"));
    }
}
