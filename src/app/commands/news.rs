use crate::config::NewsConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::NewsArticle;
use crate::utils::error::{GoferError, Result};
use serde::Deserialize;

/// 依關鍵字查詢頭條新聞
pub struct NewsLookup {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct HeadlinesPayload {
    #[serde(default)]
    articles: Vec<ArticlePayload>,
}

#[derive(Debug, Deserialize)]
struct ArticlePayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "urlToImage", default)]
    url_to_image: Option<String>,
}

impl NewsLookup {
    pub fn new(fetcher: Fetcher, config: &NewsConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }

    pub async fn top_headlines(&self, search: &str) -> Result<Vec<NewsArticle>> {
        if search.trim().is_empty() {
            return Err(GoferError::InvalidInput {
                message: "search term must not be empty".to_string(),
            });
        }

        let url = format!("{}/v2/top-headlines", self.endpoint);
        let query = [
            ("q", search.to_string()),
            ("apiKey", self.api_key.clone()),
        ];

        let payload: HeadlinesPayload = self.fetcher.get_json("news", &url, &query).await?;

        if payload.articles.is_empty() {
            return Err(GoferError::NoResults {
                query: search.to_string(),
            });
        }

        // 取清單的最後兩則
        let mut articles = payload.articles;
        let start = articles.len().saturating_sub(2);
        let picked = articles.split_off(start);

        Ok(picked
            .into_iter()
            .map(|article| NewsArticle {
                title: article.title.unwrap_or_else(|| "(untitled)".to_string()),
                description: article.description,
                url: article.url,
                image_url: article.url_to_image,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchSettings;
    use httpmock::prelude::*;

    fn lookup(endpoint: String) -> NewsLookup {
        let fetcher = Fetcher::new(&FetchSettings {
            max_attempts: 3,
            timeout_seconds: Some(5),
        })
        .unwrap();
        NewsLookup::new(
            fetcher,
            &NewsConfig {
                endpoint,
                api_key: Some("news-key".to_string()),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn the_last_two_articles_are_returned() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/top-headlines")
                .query_param("q", "rust")
                .query_param("apiKey", "news-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "articles": [
                        {"title": "One", "description": "first"},
                        {"title": "Two", "description": "second"},
                        {"title": "Three", "description": "third"}
                    ]
                }));
        });

        let articles = lookup(server.base_url()).top_headlines("rust").await.unwrap();

        api_mock.assert();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Two");
        assert_eq!(articles[1].title, "Three");
    }

    #[tokio::test]
    async fn a_single_article_is_returned_as_is() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/top-headlines");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "articles": [{"title": "Only"}]
                }));
        });

        let articles = lookup(server.base_url()).top_headlines("rust").await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Only");
    }

    #[tokio::test]
    async fn empty_article_list_is_no_results() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/top-headlines");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"articles": []}));
        });

        let err = lookup(server.base_url())
            .top_headlines("nothing")
            .await
            .unwrap_err();

        assert!(matches!(err, GoferError::NoResults { .. }));
    }
}
