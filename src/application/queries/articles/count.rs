use super::ArticleQueryService;
use crate::application::error::ApplicationResult;
use crate::domain::article::{Locale, Stage, WebspaceKey};

/// Extra equality filters merged into a count. Both are expressible by the
/// native COUNT query, so counting never falls back to the filter API.
#[derive(Debug, Clone, Default)]
pub struct CountFilters {
    pub template_key: Option<String>,
    pub webspace_key: Option<WebspaceKey>,
}

pub struct CountArticlesQuery {
    pub locale: Option<Locale>,
    pub filters: CountFilters,
}

impl ArticleQueryService {
    /// Number of articles with a live revision in the locale, merged with
    /// the caller-supplied equality filters.
    pub async fn count_matching(&self, query: CountArticlesQuery) -> ApplicationResult<u64> {
        let locale = self.resolve_locale(query.locale);
        let webspaces: Vec<WebspaceKey> = query.filters.webspace_key.into_iter().collect();
        let total = self
            .read_repo
            .count(
                &locale,
                Stage::Live,
                &webspaces,
                query.filters.template_key.as_deref(),
            )
            .await?;
        Ok(total)
    }
}
