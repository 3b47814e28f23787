use std::sync::Arc;

use crate::application::ports::webspace::RequestContext;
use crate::application::ports::WebspaceResolverPort;
use crate::domain::article::{
    ArticleFilterRepository, ArticleReadRepository, Locale, WebspaceKey,
};

/// Composes filter requests into storage queries. Stateless between calls;
/// every operation builds its query state fresh.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) filter_repo: Arc<dyn ArticleFilterRepository>,
    pub(super) webspace_resolver: Arc<WebspaceResolverPort>,
    pub(super) default_locale: Locale,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        filter_repo: Arc<dyn ArticleFilterRepository>,
        webspace_resolver: Arc<WebspaceResolverPort>,
        default_locale: Locale,
    ) -> Self {
        Self {
            read_repo,
            filter_repo,
            webspace_resolver,
            default_locale,
        }
    }

    pub(super) fn resolve_locale(&self, locale: Option<Locale>) -> Locale {
        locale.unwrap_or_else(|| self.default_locale.clone())
    }

    /// Effective webspace constraint: explicit keys win; otherwise the
    /// webspace inferred from the request context. Resolution failures are
    /// swallowed and degrade to no constraint rather than failing the query.
    pub(super) async fn effective_webspaces(
        &self,
        ignore_webspace: bool,
        explicit: &[WebspaceKey],
        ctx: &RequestContext,
    ) -> Vec<WebspaceKey> {
        if ignore_webspace {
            return vec![];
        }
        if !explicit.is_empty() {
            return explicit.to_vec();
        }
        match self.webspace_resolver.resolve_webspace(ctx).await {
            Ok(Some(key)) => vec![key],
            Ok(None) => vec![],
            Err(err) => {
                tracing::debug!(error = %err, "webspace resolution failed, querying without webspace constraint");
                vec![]
            }
        }
    }
}
