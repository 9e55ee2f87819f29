pub mod fetch;
pub mod genres;
pub mod recommend;

pub use crate::domain::model::{Candidate, GenreId, GenreMap, Recommendation};
pub use crate::domain::ports::RecommendationSource;
pub use crate::utils::error::Result;
