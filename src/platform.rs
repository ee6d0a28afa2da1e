//! Chat-server API client.
//!
//! The meeting flow needs two things from the platform: confirm a user's
//! channel membership, and create the join post. Both sit behind the
//! `PlatformClient` trait so handlers can be tested without a server;
//! `RestClient` is the production implementation over Mattermost REST v4.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's membership record in a channel.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelMember {
    pub channel_id: String,
    pub user_id: String,
}

/// A chat post, in the Mattermost v4 wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

/// Chat-server surface the meeting flow depends on.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Confirm `user_id` is a member of `channel_id`. An error means the
    /// lookup failed or the user is not a member; callers decide how much
    /// of that detail to surface.
    async fn get_channel_member(&self, channel_id: &str, user_id: &str) -> Result<ChannelMember>;

    /// Create a post; returns the post as stored, with its id filled in.
    async fn create_post(&self, post: &Post) -> Result<Post>;
}

/// Mattermost REST v4 client with bearer-token auth.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl PlatformClient for RestClient {
    async fn get_channel_member(&self, channel_id: &str, user_id: &str) -> Result<ChannelMember> {
        let url = format!(
            "{}/api/v4/channels/{}/members/{}",
            self.base_url, channel_id, user_id
        );

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("channel member lookup failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("channel member lookup returned {status}: {body}");
        }

        resp.json().await.context("invalid channel member response")
    }

    async fn create_post(&self, post: &Post) -> Result<Post> {
        let url = format!("{}/api/v4/posts", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(post)
            .send()
            .await
            .context("post creation failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("post creation returned {status}: {body}");
        }

        resp.json().await.context("invalid post response")
    }
}
