use super::ArticleQueryService;
use crate::application::dto::OffsetPage;
use crate::application::error::ApplicationResult;
use crate::application::ports::webspace::RequestContext;
use crate::domain::article::{Article, ArticleFilter, Locale, Stage, WebspaceKey};
use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 12;

#[derive(Debug, Clone)]
pub struct FindRecentQuery {
    pub limit: u32,
    pub offset: u32,
    pub template_keys: Vec<String>,
    pub category_keys: Vec<String>,
    pub tag_names: Vec<String>,
    pub webspace_keys: Vec<WebspaceKey>,
    pub ignore_webspace: bool,
    pub locale: Option<Locale>,
    pub ctx: RequestContext,
}

impl Default for FindRecentQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            template_keys: vec![],
            category_keys: vec![],
            tag_names: vec![],
            webspace_keys: vec![],
            ignore_webspace: false,
            locale: None,
            ctx: RequestContext::default(),
        }
    }
}

/// Which query path served a request, surfaced to callers as diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDebug {
    pub path: &'static str,
    pub locale: String,
    pub webspaces: Vec<String>,
}

pub struct RecentArticles {
    pub articles: Vec<Article>,
    pub page: OffsetPage,
    pub debug: QueryDebug,
}

impl ArticleQueryService {
    /// Up to `limit` articles, newest created first, offset fixed at 0.
    pub async fn find_recent(&self, query: FindRecentQuery) -> ApplicationResult<Vec<Article>> {
        let query = FindRecentQuery { offset: 0, ..query };
        Ok(self.find_recent_paginated(query).await?.articles)
    }

    /// Paginated recency listing plus the envelope from a separate total
    /// count. With no dimension filters this is a single native query with
    /// storage-side OFFSET/LIMIT; with any dimension filter the host filter
    /// API returns the full matching set and webspace filtering plus slicing
    /// happen in memory, costing O(matching-set) per call.
    pub async fn find_recent_paginated(
        &self,
        query: FindRecentQuery,
    ) -> ApplicationResult<RecentArticles> {
        let locale = self.resolve_locale(query.locale.clone());
        let webspaces = self
            .effective_webspaces(query.ignore_webspace, &query.webspace_keys, &query.ctx)
            .await;

        let filter = ArticleFilter::live(locale.clone())
            .with_page(query.limit, query.offset)
            .with_template_keys(query.template_keys.clone())
            .with_category_keys(query.category_keys.clone())
            .with_tag_names(query.tag_names.clone())
            .with_webspace_keys(webspaces.clone())
            .ignoring_webspace(query.ignore_webspace);

        let (articles, total, path) = if filter.has_dimension_filters() {
            let (articles, total) = self.fetch_filtered(&filter, &locale, &webspaces).await?;
            (articles, total, "filtered")
        } else {
            let articles = self
                .read_repo
                .list_recent(&locale, Stage::Live, &webspaces, query.limit, query.offset)
                .await?;
            let total = self
                .read_repo
                .count(&locale, Stage::Live, &webspaces, None)
                .await?;
            (articles, total, "native")
        };

        tracing::debug!(
            path,
            locale = %locale,
            limit = query.limit,
            offset = query.offset,
            total,
            "recent articles query"
        );

        let page = OffsetPage::new(query.limit, query.offset, articles.len() as u32, total);
        let debug = QueryDebug {
            path,
            locale: locale.as_str().to_string(),
            webspaces: webspaces.iter().map(|key| key.to_string()).collect(),
        };

        Ok(RecentArticles {
            articles,
            page,
            debug,
        })
    }

    async fn fetch_filtered(
        &self,
        filter: &ArticleFilter,
        locale: &Locale,
        webspaces: &[WebspaceKey],
    ) -> ApplicationResult<(Vec<Article>, u64)> {
        let matching = self.filter_repo.find_matching(filter).await?;
        let mut matching = retain_webspaces(matching, locale, webspaces);
        sort_recent_first(&mut matching);
        let total = matching.len() as u64;
        let articles = slice_page(matching, filter.limit, filter.offset);
        Ok((articles, total))
    }
}

/// In-memory re-application of the webspace constraint for the fallback
/// path, inspecting each article's live revision for the locale.
fn retain_webspaces(
    articles: Vec<Article>,
    locale: &Locale,
    webspaces: &[WebspaceKey],
) -> Vec<Article> {
    if webspaces.is_empty() {
        return articles;
    }
    articles
        .into_iter()
        .filter(|article| {
            article
                .live_webspace(locale)
                .is_some_and(|key| webspaces.contains(key))
        })
        .collect()
}

/// Same ordering the native query imposes: creation time descending, id
/// descending as the deterministic tie-break.
fn sort_recent_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn slice_page(articles: Vec<Article>, limit: u32, offset: u32) -> Vec<Article> {
    articles
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, ContentRevision};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use uuid::Uuid;

    fn article(id: i64, created_secs: i64, webspace: Option<&str>) -> Article {
        let created = Utc.timestamp_opt(created_secs, 0).unwrap();
        Article {
            uuid: Uuid::new_v4(),
            id: ArticleId::new(id).unwrap(),
            created_at: created,
            changed_at: created,
            revisions: vec![ContentRevision {
                locale: Locale::new("en").unwrap(),
                stage: Stage::Live,
                title: Some(format!("article {id}")),
                description: None,
                teaser: None,
                template_key: "default".into(),
                template_data: json!({}),
                webspace: webspace.map(|key| WebspaceKey::new(key).unwrap()),
                categories: vec![],
                tags: vec![],
                published: true,
                workflow_place: None,
            }],
        }
    }

    #[test]
    fn sort_breaks_timestamp_ties_by_id() {
        let mut articles = vec![article(1, 100, None), article(3, 100, None), article(2, 200, None)];
        sort_recent_first(&mut articles);
        let ids: Vec<i64> = articles.iter().map(|a| a.id.into()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn slice_respects_limit_and_offset() {
        let articles: Vec<Article> = (1..=5).map(|id| article(id, id * 10, None)).collect();
        let page = slice_page(articles, 2, 3);
        let ids: Vec<i64> = page.iter().map(|a| a.id.into()).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let articles: Vec<Article> = (1..=3).map(|id| article(id, id, None)).collect();
        assert!(slice_page(articles, 10, 5).is_empty());
    }

    #[test]
    fn retain_webspaces_keeps_members_only() {
        let locale = Locale::new("en").unwrap();
        let blog = WebspaceKey::new("blog").unwrap();
        let articles = vec![
            article(1, 1, Some("blog")),
            article(2, 2, Some("website")),
            article(3, 3, None),
        ];
        let kept = retain_webspaces(articles, &locale, std::slice::from_ref(&blog));
        assert_eq!(kept.len(), 1);
        assert_eq!(i64::from(kept[0].id), 1);
    }

    #[test]
    fn retain_webspaces_without_constraint_keeps_all() {
        let locale = Locale::new("en").unwrap();
        let articles = vec![article(1, 1, Some("blog")), article(2, 2, None)];
        assert_eq!(retain_webspaces(articles, &locale, &[]).len(), 2);
    }
}
