use crate::config::TmdbConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::{Candidate, GenreId, GenreMap};
use crate::domain::ports::RecommendationSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// TMDB 風格 API 的推薦資料來源
pub struct TmdbSource {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct DiscoverPayload {
    #[serde(default)]
    results: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct GenreListPayload {
    #[serde(default)]
    genres: Vec<GenreEntry>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    id: GenreId,
    name: String,
}

impl TmdbSource {
    pub fn new(fetcher: Fetcher, config: &TmdbConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }
}

#[async_trait]
impl RecommendationSource for TmdbSource {
    async fn discover(&self, genre: GenreId) -> Result<Vec<Candidate>> {
        let url = format!("{}/discover/movie", self.endpoint);
        let query = [
            ("api_key", self.api_key.clone()),
            ("with_genres", genre.to_string()),
        ];

        let payload: DiscoverPayload = self.fetcher.get_json("tmdb discover", &url, &query).await?;
        Ok(payload.results)
    }

    async fn genre_names(&self) -> Result<GenreMap> {
        let url = format!("{}/genre/movie/list", self.endpoint);
        let query = [("api_key", self.api_key.clone())];

        let payload: GenreListPayload = self.fetcher.get_json("tmdb genres", &url, &query).await?;
        Ok(payload
            .genres
            .into_iter()
            .map(|genre| (genre.id, genre.name))
            .collect())
    }
}
