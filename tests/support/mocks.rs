// tests/support/mocks.rs
use article_gateway::application::ports::content::{ContentResolver, ResolvedContent};
use article_gateway::application::ports::webspace::{RequestContext, WebspaceResolver};
use article_gateway::domain::article::{
    Article, ArticleFilter, ArticleFilterRepository, ArticleReadRepository, Locale, Stage,
    WebspaceKey,
};
use article_gateway::domain::errors::{DomainError, DomainResult};
use article_gateway::infrastructure::content::RevisionContentResolver;
use async_trait::async_trait;
use uuid::Uuid;

/* ---------------------------- article storage ---------------------------- */

/// In-memory stand-in for the storage engine and the host filter API,
/// mirroring their contracts: native listing paginates and orders, the
/// filter API returns the full matching set unpaginated.
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn matching<'a>(
        &'a self,
        locale: &'a Locale,
        stage: Stage,
    ) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |article| article.revision(locale, stage).is_some())
    }

    fn in_webspaces(article: &Article, locale: &Locale, webspaces: &[WebspaceKey]) -> bool {
        if webspaces.is_empty() {
            return true;
        }
        article
            .live_webspace(locale)
            .is_some_and(|key| webspaces.contains(key))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_uuid(
        &self,
        uuid: Uuid,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<Option<Article>> {
        Ok(self
            .matching(locale, stage)
            .find(|article| article.uuid == uuid)
            .cloned())
    }

    async fn list_recent(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .matching(locale, stage)
            .filter(|article| Self::in_webspaces(article, locale, webspaces))
            .cloned()
            .collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(articles
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        template_key: Option<&str>,
    ) -> DomainResult<u64> {
        let count = self
            .matching(locale, stage)
            .filter(|article| Self::in_webspaces(article, locale, webspaces))
            .filter(|article| match template_key {
                Some(key) => article
                    .revision(locale, stage)
                    .is_some_and(|rev| rev.template_key == key),
                None => true,
            })
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl ArticleFilterRepository for InMemoryArticleRepository {
    async fn find_matching(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let overlaps =
            |wanted: &[String], present: &[String]| wanted.iter().any(|w| present.contains(w));

        Ok(self
            .matching(&filter.locale, filter.stage)
            .filter(|article| {
                let rev = article
                    .revision(&filter.locale, filter.stage)
                    .expect("matching() guarantees a revision");
                (filter.template_keys.is_empty()
                    || filter.template_keys.contains(&rev.template_key))
                    && (filter.category_keys.is_empty()
                        || overlaps(&filter.category_keys, &rev.categories))
                    && (filter.tag_names.is_empty() || overlaps(&filter.tag_names, &rev.tags))
            })
            .cloned()
            .collect())
    }
}

/// Read repository whose every query fails, for exercising the HTTP error
/// boundary.
pub struct FailingArticleRepository;

#[async_trait]
impl ArticleReadRepository for FailingArticleRepository {
    async fn find_by_uuid(
        &self,
        _uuid: Uuid,
        _locale: &Locale,
        _stage: Stage,
    ) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }

    async fn list_recent(
        &self,
        _locale: &Locale,
        _stage: Stage,
        _webspaces: &[WebspaceKey],
        _limit: u32,
        _offset: u32,
    ) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }

    async fn count(
        &self,
        _locale: &Locale,
        _stage: Stage,
        _webspaces: &[WebspaceKey],
        _template_key: Option<&str>,
    ) -> DomainResult<u64> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }
}

#[async_trait]
impl ArticleFilterRepository for FailingArticleRepository {
    async fn find_matching(&self, _filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }
}

/* --------------------------- webspace resolver --------------------------- */

/// Always resolves to the given webspace, regardless of request context.
pub struct StaticWebspaceResolver(pub Option<WebspaceKey>);

#[async_trait]
impl WebspaceResolver for StaticWebspaceResolver {
    async fn resolve_webspace(&self, _ctx: &RequestContext) -> DomainResult<Option<WebspaceKey>> {
        Ok(self.0.clone())
    }
}

/// Always fails, for asserting that resolution errors degrade to no
/// webspace constraint.
pub struct FailingWebspaceResolver;

#[async_trait]
impl WebspaceResolver for FailingWebspaceResolver {
    async fn resolve_webspace(&self, _ctx: &RequestContext) -> DomainResult<Option<WebspaceKey>> {
        Err(DomainError::Resolution("portal lookup failed".into()))
    }
}

/* ---------------------------- content resolver ---------------------------- */

/// Delegates to the default revision projection but fails for a chosen set
/// of article uuids.
pub struct SelectivelyFailingContentResolver {
    inner: RevisionContentResolver,
    pub failing: Vec<Uuid>,
}

impl SelectivelyFailingContentResolver {
    pub fn failing_for(failing: Vec<Uuid>) -> Self {
        Self {
            inner: RevisionContentResolver,
            failing,
        }
    }
}

#[async_trait]
impl ContentResolver for SelectivelyFailingContentResolver {
    async fn resolve_content(
        &self,
        article: &Article,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<ResolvedContent> {
        if self.failing.contains(&article.uuid) {
            return Err(DomainError::Resolution("broken template data".into()));
        }
        self.inner.resolve_content(article, locale, stage).await
    }
}
