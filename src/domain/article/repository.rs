use crate::domain::article::entity::Article;
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::{Locale, Stage, WebspaceKey};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Native read access to articles. Every query joins articles to their
/// revision for the requested (locale, stage); listing and counting happen
/// entirely inside the storage engine, including OFFSET/LIMIT.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_uuid(
        &self,
        uuid: Uuid,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<Option<Article>>;

    /// Articles with a matching revision, newest created first with `id`
    /// as the deterministic tie-break, paginated by the storage engine.
    /// An empty `webspaces` slice means no webspace constraint.
    async fn list_recent(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>>;

    async fn count(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        template_key: Option<&str>,
    ) -> DomainResult<u64>;
}

/// The host repository's filter API. Dimension filters (template, category,
/// tag) use OR semantics inside a dimension and AND across dimensions, with
/// the (locale, stage) constraint always applied.
///
/// The result is the FULL matching set, unpaginated and unfiltered by
/// webspace: callers pay O(matching-set) and apply webspace filtering and
/// slicing themselves. Callers must not assume constant-time pagination on
/// this path.
#[async_trait]
pub trait ArticleFilterRepository: Send + Sync {
    async fn find_matching(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}
