use crate::config::WeatherConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::WeatherReport;
use crate::utils::error::{GoferError, Result};
use serde::Deserialize;

/// 依地點查詢目前天氣（公制單位）
pub struct WeatherLookup {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct OwmPayload {
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherLookup {
    pub fn new(fetcher: Fetcher, config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }

    pub async fn current(&self, location: &str) -> Result<WeatherReport> {
        if location.trim().is_empty() {
            return Err(GoferError::InvalidInput {
                message: "location must not be empty".to_string(),
            });
        }

        let url = format!("{}/data/2.5/weather", self.endpoint);
        let query = [
            ("q", location.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ];

        let payload: OwmPayload = self.fetcher.get_json("weather", &url, &query).await?;

        Ok(WeatherReport {
            location: payload.name,
            temperature_c: payload.main.temp,
            feels_like_c: payload.main.feels_like,
            description: payload
                .weather
                .first()
                .map(|condition| condition.description.clone())
                .unwrap_or_else(|| "unknown".to_string()),
            humidity_percent: payload.main.humidity,
            wind_speed_ms: payload.wind.speed,
        })
    }
}
