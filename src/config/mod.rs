pub mod api_config;

pub use api_config::{
    ApiConfig, DeeplConfig, FetchSettings, GithubConfig, NewsConfig, OmdbConfig, TmdbConfig,
    WeatherConfig,
};
