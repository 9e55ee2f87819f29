use crate::core::genres;
use crate::domain::model::Recommendation;
use crate::domain::ports::RecommendationSource;
use crate::utils::error::{GoferError, Result};

/// 預設回傳的推薦數量
pub const DEFAULT_TOP_N: usize = 2;

/// 推薦聚合器：驗證 → 並行抓取 → 排序截斷 → 併上類型名稱
pub struct Recommender<S: RecommendationSource> {
    source: S,
    top_n: usize,
}

impl<S: RecommendationSource> Recommender<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub async fn recommend(&self, genre_label: &str) -> Result<Vec<Recommendation>> {
        // 驗證必須發生在任何網路呼叫之前
        let genre_id = genres::genre_id(genre_label).ok_or_else(|| GoferError::UnknownGenre {
            label: genre_label.to_string(),
        })?;

        tracing::info!(
            "🎬 Fetching {} recommendations (genre id {})",
            genre_label,
            genre_id
        );

        // 兩個抓取背靠背發出，只在匯合點等待；任一失敗則整個請求失敗，
        // 不回傳部分結果
        let (candidates, names) =
            tokio::join!(self.source.discover(genre_id), self.source.genre_names());
        let candidates = candidates?;
        let names = names?;

        if candidates.is_empty() {
            return Err(GoferError::NoResults {
                query: genre_label.to_string(),
            });
        }

        tracing::debug!("{} candidates, {} genre names", candidates.len(), names.len());

        // 穩定排序：同分時保持上游順序
        let mut sorted = candidates;
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted.truncate(self.top_n);

        let recommendations = sorted
            .into_iter()
            .map(|candidate| Recommendation {
                // 查不到名稱的編號直接略過
                genres: candidate
                    .genre_ids
                    .iter()
                    .filter_map(|id| names.get(id))
                    .cloned()
                    .collect(),
                title: candidate.title,
                score: candidate.score,
                release_date: candidate.release_date,
                overview: candidate.overview,
            })
            .collect();

        Ok(recommendations)
    }
}
