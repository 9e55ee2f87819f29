use crate::config::OmdbConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::{MediaKind, TitleInfo};
use crate::utils::error::{GoferError, Result};
use serde::Deserialize;

/// OMDb 風格 API 的片名查詢。
/// 電影與影集共用同一條路徑，只差 type 參數。
pub struct TitleLookup {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OmdbPayload {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Plot", default)]
    plot: Option<String>,
    #[serde(rename = "Released", default)]
    released: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(rename = "Genre", default)]
    genre: Option<String>,
    #[serde(rename = "Director", default)]
    director: Option<String>,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

impl TitleLookup {
    pub fn new(fetcher: Fetcher, config: &OmdbConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }

    pub async fn find(&self, title: &str, kind: MediaKind) -> Result<TitleInfo> {
        if title.trim().is_empty() {
            return Err(GoferError::InvalidInput {
                message: "title must not be empty".to_string(),
            });
        }

        let query = [
            ("apikey", self.api_key.clone()),
            ("t", title.to_string()),
            ("type", kind.as_query().to_string()),
        ];

        let payload: OmdbPayload = self
            .fetcher
            .get_json("omdb title", &self.endpoint, &query)
            .await?;

        // 上游用 Response: "False" 表示查無此片，不是傳輸錯誤
        if !payload.response.eq_ignore_ascii_case("true") {
            tracing::info!(
                "No {} found for \"{}\": {}",
                kind.as_query(),
                title,
                payload.error.as_deref().unwrap_or("no detail")
            );
            return Err(GoferError::NoResults {
                query: title.to_string(),
            });
        }

        Ok(TitleInfo {
            title: payload.title.unwrap_or_else(|| title.to_string()),
            plot: payload.plot,
            released: payload.released,
            imdb_rating: payload.imdb_rating,
            genre: payload.genre,
            director: payload.director,
            poster: payload.poster,
        })
    }
}
