// src/application/services/mod.rs
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    application::{
        dto::{ArticleView, OffsetPage},
        error::ApplicationResult,
        ports::{ContentResolverPort, WebspaceResolverPort},
        queries::articles::{
            ArticleQueryService, CountArticlesQuery, CountFilters, FindArticleByUuidQuery,
            FindRecentQuery, QueryDebug,
        },
        resolver::ArticleResolverAdapter,
    },
    domain::article::{ArticleFilterRepository, ArticleReadRepository, Locale},
};

/// The template-callable surface: the operations a presentation layer (a
/// template function or an HTTP handler) invokes, with their defaults
/// applied here.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub article_resolver: Arc<ArticleResolverAdapter>,
}

/// Result of `load_recent_paginated`: resolved views plus the pagination
/// envelope and path diagnostics.
#[derive(Serialize)]
pub struct RecentArticlesPage {
    pub articles: Vec<ArticleView>,
    pub pagination: OffsetPage,
    pub debug: QueryDebug,
}

impl ApplicationServices {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        filter_repo: Arc<dyn ArticleFilterRepository>,
        webspace_resolver: Arc<WebspaceResolverPort>,
        content_resolver: Arc<ContentResolverPort>,
        default_locale: Locale,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            read_repo,
            filter_repo,
            webspace_resolver,
            default_locale.clone(),
        ));
        let article_resolver = Arc::new(ArticleResolverAdapter::new(
            content_resolver,
            default_locale,
        ));

        Self {
            article_queries,
            article_resolver,
        }
    }

    /// Single resolved view by article identifier, absent when no live
    /// revision exists for the locale.
    pub async fn load_by_uuid(
        &self,
        uuid: Uuid,
        locale: Option<Locale>,
    ) -> ApplicationResult<Option<ArticleView>> {
        let article = self
            .article_queries
            .find_by_uuid(FindArticleByUuidQuery {
                uuid,
                locale: locale.clone(),
            })
            .await?;

        match article {
            Some(article) => {
                let view = self
                    .article_resolver
                    .resolve(&article, locale.as_ref())
                    .await;
                Ok(Some(view))
            }
            None => Ok(None),
        }
    }

    pub async fn count_published(
        &self,
        locale: Option<Locale>,
        filters: CountFilters,
    ) -> ApplicationResult<u64> {
        self.article_queries
            .count_matching(CountArticlesQuery { locale, filters })
            .await
    }

    pub async fn load_recent(&self, query: FindRecentQuery) -> ApplicationResult<Vec<ArticleView>> {
        let locale = query.locale.clone();
        let articles = self.article_queries.find_recent(query).await?;
        Ok(self
            .article_resolver
            .resolve_all(&articles, locale.as_ref())
            .await)
    }

    pub async fn load_recent_paginated(
        &self,
        query: FindRecentQuery,
    ) -> ApplicationResult<RecentArticlesPage> {
        let locale = query.locale.clone();
        let recent = self.article_queries.find_recent_paginated(query).await?;
        let articles = self
            .article_resolver
            .resolve_all(&recent.articles, locale.as_ref())
            .await;

        Ok(RecentArticlesPage {
            articles,
            pagination: recent.page,
            debug: recent.debug,
        })
    }
}
