use crate::domain::model::GenreId;

/// 固定的標籤→上游編號對照表，進程生命週期內不變
const GENRE_TABLE: &[(&str, GenreId)] = &[
    ("Action", 28),
    ("Adventure", 12),
    ("Animation", 16),
    ("Comedy", 35),
    ("Crime", 80),
    ("Documentary", 99),
    ("Drama", 18),
    ("Family", 10751),
    ("Fantasy", 14),
    ("History", 36),
    ("Horror", 27),
    ("Music", 10402),
    ("Mystery", 9648),
    ("Romance", 10749),
    ("Science Fiction", 878),
    ("TV Movie", 10770),
    ("Thriller", 53),
    ("War", 10752),
    ("Western", 37),
];

/// 標籤需完全相符，查無即為驗證錯誤
pub fn genre_id(label: &str) -> Option<GenreId> {
    GENRE_TABLE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, id)| *id)
}

/// 提供給呼叫層當作選項清單的合法標籤
pub fn labels() -> Vec<&'static str> {
    GENRE_TABLE.iter().map(|(name, _)| *name).collect()
}
