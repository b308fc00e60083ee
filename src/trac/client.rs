//! HTTP access to a Trac server via reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::component::ComponentSource;
use crate::error::{IssueError, TracError};
use crate::pipeline::LogSource;

use super::range::RevisionRange;
use super::ticket::parse_ticket_component;

const USER_AGENT: &str = concat!("tracnotes/", env!("CARGO_PKG_VERSION"));

/// Client for a single Trac instance.
#[derive(Debug, Clone)]
pub struct TracClient {
    http: Client,
    base_url: String,
}

impl TracClient {
    /// Build a client for the Trac instance at `base_url`.
    ///
    /// `timeout` applies to every request made by this client.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TracError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(TracError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the verbose revision log for `range`.
    pub fn log_url(&self, range: &RevisionRange, limit: usize) -> String {
        let mut url = format!("{}/log/?", self.base_url);
        if let Some(to) = range.to {
            url.push_str(&format!("rev={}&", to));
        }
        url.push_str(&format!(
            "stop_rev={}&limit={}&verbose=on",
            range.from, limit
        ));
        url
    }

    pub fn ticket_url(&self, issue_id: &str) -> String {
        format!("{}/ticket/{}", self.base_url, issue_id)
    }

    async fn get_text(&self, url: &str) -> Result<String, TracError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| TracError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TracError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| TracError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl LogSource for TracClient {
    async fn fetch_log(&self, range: RevisionRange, limit: usize) -> Result<String, TracError> {
        self.get_text(&self.log_url(&range, limit)).await
    }
}

#[async_trait]
impl ComponentSource for TracClient {
    async fn fetch_component(&self, issue_id: &str) -> Result<String, IssueError> {
        let page = self
            .get_text(&self.ticket_url(issue_id))
            .await
            .map_err(|source| IssueError::Fetch {
                id: issue_id.to_string(),
                source,
            })?;

        parse_ticket_component(&page)
            .ok_or_else(|| IssueError::MissingComponent(issue_id.to_string()))
    }
}
