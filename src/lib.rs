pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::commands::{
    GithubLookup, NewsLookup, TitleLookup, TmdbSource, Translator, WeatherLookup,
};
pub use config::ApiConfig;
pub use crate::core::fetch::Fetcher;
pub use crate::core::recommend::Recommender;
pub use utils::error::{GoferError, Result};
