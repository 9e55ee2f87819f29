use crate::utils::error::{GoferError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 進程啟動時建一次的設定物件，之後以引用注入各元件，
/// 不在呼叫時讀取全域環境變數
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub deepl: DeeplConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: Option<u64>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(default = "default_tmdb_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            endpoint: default_tmdb_endpoint(),
            api_key: None,
            top_n: default_top_n(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    #[serde(default = "default_omdb_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            endpoint: default_omdb_endpoint(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    #[serde(default = "default_news_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_news_endpoint(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_github_endpoint(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeeplConfig {
    #[serde(default = "default_deepl_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for DeeplConfig {
    fn default() -> Self {
        Self {
            endpoint: default_deepl_endpoint(),
            api_key: None,
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_timeout_seconds() -> Option<u64> {
    Some(10)
}

fn default_top_n() -> usize {
    2
}

fn default_tmdb_endpoint() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_omdb_endpoint() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_weather_endpoint() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_news_endpoint() -> String {
    "https://newsapi.org".to_string()
}

fn default_github_endpoint() -> String {
    "https://api.github.com".to_string()
}

fn default_deepl_endpoint() -> String {
    "https://api-free.deepl.com".to_string()
}

/// 環境變數沒替換成功時會留下 ${VAR} 字面值，視同缺少憑證
fn resolved_key<'a>(field: &str, key: &'a Option<String>) -> Result<&'a str> {
    match key.as_deref() {
        Some(k) if !k.is_empty() && !k.starts_with("${") => Ok(k),
        _ => Err(GoferError::MissingConfigError {
            field: field.to_string(),
        }),
    }
}

impl TmdbConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("tmdb.api_key", &self.api_key)
    }
}

impl OmdbConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("omdb.api_key", &self.api_key)
    }
}

impl WeatherConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("weather.api_key", &self.api_key)
    }
}

impl NewsConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("news.api_key", &self.api_key)
    }
}

impl GithubConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("github.api_key", &self.api_key)
    }
}

impl DeeplConfig {
    pub fn api_key(&self) -> Result<&str> {
        resolved_key("deepl.api_key", &self.api_key)
    }
}

impl ApiConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GoferError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數（例如 ${TMDB_TOKEN}），查無的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 沒有設定檔時直接從環境變數組出設定
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.tmdb.api_key = std::env::var("TMDB_TOKEN").ok();
        config.omdb.api_key = std::env::var("OMDB_TOKEN").ok();
        config.weather.api_key = std::env::var("WEATHER_TOKEN").ok();
        config.news.api_key = std::env::var("NEWS_TOKEN").ok();
        config.github.api_key = std::env::var("GITHUB_TOKEN").ok();
        config.deepl.api_key = std::env::var("DEEPL_API_KEY").ok();
        config
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("tmdb.endpoint", &self.tmdb.endpoint)?;
        validation::validate_url("omdb.endpoint", &self.omdb.endpoint)?;
        validation::validate_url("weather.endpoint", &self.weather.endpoint)?;
        validation::validate_url("news.endpoint", &self.news.endpoint)?;
        validation::validate_url("github.endpoint", &self.github.endpoint)?;
        validation::validate_url("deepl.endpoint", &self.deepl.endpoint)?;

        validation::validate_positive_number(
            "fetch.max_attempts",
            self.fetch.max_attempts as usize,
            1,
        )?;
        validation::validate_range("tmdb.top_n", self.tmdb.top_n, 1, 20)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[fetch]
max_attempts = 5
timeout_seconds = 20

[tmdb]
endpoint = "https://tmdb.example.com"
api_key = "abc123"
top_n = 3
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.fetch.max_attempts, 5);
        assert_eq!(config.fetch.timeout_seconds, Some(20));
        assert_eq!(config.tmdb.endpoint, "https://tmdb.example.com");
        assert_eq!(config.tmdb.api_key().unwrap(), "abc123");
        assert_eq!(config.tmdb.top_n, 3);
        // 沒寫的區塊要有預設值
        assert_eq!(config.omdb.endpoint, "https://www.omdbapi.com");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GOFER_TEST_TMDB_KEY", "from-env");

        let toml_content = r#"
[tmdb]
api_key = "${GOFER_TEST_TMDB_KEY}"
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tmdb.api_key.as_deref(), Some("from-env"));

        std::env::remove_var("GOFER_TEST_TMDB_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_counts_as_missing_key() {
        let toml_content = r#"
[tmdb]
api_key = "${GOFER_TEST_UNSET_VAR}"
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();
        assert!(config.tmdb.api_key().is_err());
    }

    #[test]
    fn test_missing_key_is_an_error_at_use_time() {
        let config = ApiConfig::default();
        let err = config.tmdb.api_key().unwrap_err();
        match err {
            GoferError::MissingConfigError { field } => assert_eq!(field, "tmdb.api_key"),
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[tmdb]
endpoint = "not-a-url"
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_zero_attempts() {
        let toml_content = r#"
[fetch]
max_attempts = 0
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_validate() {
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[fetch]
max_attempts = 2

[news]
endpoint = "https://news.example.com"
api_key = "news-key"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ApiConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fetch.max_attempts, 2);
        assert_eq!(config.news.endpoint, "https://news.example.com");
        assert_eq!(config.news.api_key().unwrap(), "news-key");
    }
}
