pub mod github;
pub mod movies;
pub mod news;
pub mod tmdb;
pub mod translate;
pub mod weather;

pub use github::GithubLookup;
pub use movies::TitleLookup;
pub use news::NewsLookup;
pub use tmdb::TmdbSource;
pub use translate::Translator;
pub use weather::WeatherLookup;
