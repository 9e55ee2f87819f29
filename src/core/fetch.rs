use crate::config::FetchSettings;
use crate::utils::error::{GoferError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("gofer/", env!("CARGO_PKG_VERSION"));

/// 有界重試抓取器：失敗立即重試（無退避延遲），
/// 重試耗盡時把最後一次的錯誤往上拋。
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_attempts: u32,
}

impl Fetcher {
    /// Client 只建一次，逾時為整個進程固定設定
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(GoferError::ApiError)?;

        Ok(Self {
            client,
            max_attempts: settings.max_attempts.max(1),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 逐次嘗試 build() 出來的請求；非 2xx 狀態一律視為失敗
    pub async fn execute<B>(&self, label: &str, build: B) -> Result<Response>
    where
        B: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match build().send().await.and_then(|resp| resp.error_for_status()) {
                Ok(resp) => {
                    tracing::debug!(
                        "{} responded {} (attempt {}/{})",
                        label,
                        resp.status(),
                        attempt,
                        self.max_attempts
                    );
                    return Ok(resp);
                }
                Err(err) => {
                    if attempt >= self.max_attempts {
                        tracing::warn!("❌ {} failed after {} attempts: {}", label, attempt, err);
                        return Err(GoferError::RetriesExhausted {
                            attempts: attempt,
                            source: err,
                        });
                    }
                    tracing::warn!(
                        "🔁 Retry {}/{} for {} failed: {}",
                        attempt,
                        self.max_attempts,
                        label,
                        err
                    );
                }
            }
        }
    }

    pub async fn get(&self, label: &str, url: &str, query: &[(&str, String)]) -> Result<Response> {
        self.execute(label, || self.client.get(url).query(query)).await
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        label: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(label, url, query).await?;
        Ok(response.json::<T>().await?)
    }
}
