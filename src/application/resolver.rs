// src/application/resolver.rs
use std::sync::Arc;

use crate::application::dto::ArticleView;
use crate::application::ports::ContentResolverPort;
use crate::domain::article::{Article, Locale, Stage};

/// Adapter over the host content-resolution service. Flattens one article
/// into a display-ready view; any resolution failure yields a degraded view
/// for that article instead of an error, so a single unresolvable article
/// never breaks a listing.
pub struct ArticleResolverAdapter {
    content_resolver: Arc<ContentResolverPort>,
    default_locale: Locale,
}

impl ArticleResolverAdapter {
    pub fn new(content_resolver: Arc<ContentResolverPort>, default_locale: Locale) -> Self {
        Self {
            content_resolver,
            default_locale,
        }
    }

    pub async fn resolve(&self, article: &Article, locale: Option<&Locale>) -> ArticleView {
        let locale = locale.unwrap_or(&self.default_locale);
        match self
            .content_resolver
            .resolve_content(article, locale, Stage::Live)
            .await
        {
            Ok(content) => ArticleView::resolved(article, locale, content),
            Err(err) => {
                tracing::warn!(uuid = %article.uuid, error = %err, "article resolution failed, returning degraded view");
                ArticleView::degraded(article, err)
            }
        }
    }

    pub async fn resolve_all(&self, articles: &[Article], locale: Option<&Locale>) -> Vec<ArticleView> {
        let mut views = Vec::with_capacity(articles.len());
        for article in articles {
            views.push(self.resolve(article, locale).await);
        }
        views
    }
}
