pub mod count;
pub mod find_by_uuid;
pub mod recent;
pub mod service;

pub use count::{CountArticlesQuery, CountFilters};
pub use find_by_uuid::FindArticleByUuidQuery;
pub use recent::{FindRecentQuery, QueryDebug, RecentArticles, DEFAULT_LIMIT};
pub use service::ArticleQueryService;
