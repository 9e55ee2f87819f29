use crate::config::DeeplConfig;
use crate::core::fetch::Fetcher;
use crate::domain::model::Translation;
use crate::utils::error::{GoferError, Result};
use serde::Deserialize;

/// DeepL 風格 API 的文字翻譯
pub struct Translator {
    fetcher: Fetcher,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TranslatePayload {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    text: String,
}

impl Translator {
    pub fn new(fetcher: Fetcher, config: &DeeplConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key()?.to_string(),
        })
    }

    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<Translation> {
        if text.trim().is_empty() || target_lang.trim().is_empty() {
            return Err(GoferError::InvalidInput {
                message: "text and target language must not be empty".to_string(),
            });
        }

        let target = target_lang.to_uppercase();
        let url = format!("{}/v2/translate", self.endpoint);
        let query = [
            ("auth_key", self.api_key.clone()),
            ("text", text.to_string()),
            ("target_lang", target.clone()),
        ];

        // 上游要求 POST，參數放在查詢字串、內容為空
        let response = self
            .fetcher
            .execute("deepl translate", || {
                self.fetcher.client().post(url.as_str()).query(&query)
            })
            .await?;
        let payload: TranslatePayload = response.json().await.map_err(GoferError::ApiError)?;

        let entry = payload.translations.into_iter().next().ok_or_else(|| {
            GoferError::UnexpectedResponse {
                service: "deepl".to_string(),
                detail: "empty translations array".to_string(),
            }
        })?;

        Ok(Translation {
            source_text: text.to_string(),
            target_lang: target,
            translated_text: entry.text,
        })
    }
}
