use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 上游 API 使用的類型編號
pub type GenreId = u32;

/// id→名稱對照表，每次請求重新抓取
pub type GenreMap = HashMap<GenreId, String>;

/// 上游回傳的單一候選電影，對本核心而言唯讀
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "vote_average", default)]
    pub score: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

/// 聚合後回傳給呼叫層的推薦項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn as_query(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleInfo {
    pub title: String,
    pub plot: Option<String>,
    pub released: Option<String>,
    pub imdb_rating: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub humidity_percent: u8,
    pub wind_speed_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub repo_count: usize,
    pub recent_event_count: usize,
    pub last_event_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub source_text: String,
    pub target_lang: String,
    pub translated_text: String,
}
