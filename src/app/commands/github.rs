use crate::config::GithubConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::ProfileSummary;
use crate::utils::error::{GoferError, Result};
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// GitHub 個人檔案摘要：使用者、倉庫數與近期活動
pub struct GithubLookup {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    created_at: DateTime<Utc>,
}

impl GithubLookup {
    pub fn new(fetcher: Fetcher, config: &GithubConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }

    async fn get_authed<T: DeserializeOwned>(&self, label: &str, url: &str) -> Result<T> {
        let auth = format!("token {}", self.api_key);
        let response = self
            .fetcher
            .execute(label, || {
                self.fetcher.client().get(url).header(AUTHORIZATION, auth.clone())
            })
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn profile(&self, username: &str) -> Result<ProfileSummary> {
        if username.trim().is_empty() {
            return Err(GoferError::InvalidInput {
                message: "username must not be empty".to_string(),
            });
        }

        // 三個端點依序查詢
        let user: UserPayload = self
            .get_authed(
                "github profile",
                &format!("{}/users/{}", self.endpoint, username),
            )
            .await?;

        let repos: Vec<serde_json::Value> = self
            .get_authed(
                "github repos",
                &format!("{}/users/{}/repos", self.endpoint, username),
            )
            .await?;

        let events: Vec<EventPayload> = self
            .get_authed(
                "github events",
                &format!("{}/users/{}/events/public", self.endpoint, username),
            )
            .await?;

        Ok(ProfileSummary {
            login: user.login,
            name: user.name,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            repo_count: repos.len(),
            recent_event_count: events.len(),
            last_event_at: events.first().map(|event| event.created_at),
        })
    }
}
