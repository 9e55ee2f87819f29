use crate::domain::model::{Candidate, GenreId, GenreMap};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 推薦流程的資料來源介面，方便替換測試替身
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// 依類型編號取得候選清單，保持上游順序
    async fn discover(&self, genre: GenreId) -> Result<Vec<Candidate>>;

    /// 取得類型 id→名稱對照表
    async fn genre_names(&self) -> Result<GenreMap>;
}
