pub mod articles;
pub mod pagination;

pub use articles::{ArticleView, DegradedArticleView, ResolvedArticleView};
pub use pagination::OffsetPage;
