// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleFilterRepository, ArticleId, ArticleReadRepository,
    ContentRevision, Locale, Stage, WebspaceKey,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "a.id, a.uuid, a.created_at, a.changed_at, \
     r.locale, r.stage, r.title, r.description, r.teaser, r.template_key, \
     r.template_data, r.webspace, r.categories, r.tags, r.published, r.workflow_place";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    uuid: Uuid,
    created_at: DateTime<Utc>,
    changed_at: DateTime<Utc>,
    locale: String,
    stage: String,
    title: Option<String>,
    description: Option<String>,
    teaser: Option<String>,
    template_key: String,
    template_data: serde_json::Value,
    webspace: Option<String>,
    categories: Vec<String>,
    tags: Vec<String>,
    published: bool,
    workflow_place: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let revision = ContentRevision {
            locale: Locale::new(row.locale)?,
            stage: Stage::parse(&row.stage)?,
            title: row.title,
            description: row.description,
            teaser: row.teaser,
            template_key: row.template_key,
            template_data: row.template_data,
            webspace: row.webspace.map(WebspaceKey::new).transpose()?,
            categories: row.categories,
            tags: row.tags,
            published: row.published,
            workflow_place: row.workflow_place,
        };

        Ok(Article {
            uuid: row.uuid,
            id: ArticleId::new(row.id)?,
            created_at: row.created_at,
            changed_at: row.changed_at,
            revisions: vec![revision],
        })
    }
}

impl PostgresArticleRepository {
    fn push_dimension_scope<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        locale: &'a Locale,
        stage: Stage,
    ) {
        builder.push(" WHERE r.locale = ");
        builder.push_bind(locale.as_str());
        builder.push(" AND r.stage = ");
        builder.push_bind(stage.as_str());
    }

    fn push_webspace_scope<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        webspaces: &'a [WebspaceKey],
    ) {
        if webspaces.is_empty() {
            return;
        }
        builder.push(" AND r.webspace IN (");
        let mut separated = builder.separated(", ");
        for key in webspaces {
            separated.push_bind(key.as_str());
        }
        separated.push_unseparated(")");
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_uuid(
        &self,
        uuid: Uuid,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS}
             FROM articles a
             JOIN article_revisions r ON r.article_id = a.id
             WHERE a.uuid = $1 AND r.locale = $2 AND r.stage = $3",
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(uuid)
            .bind(locale.as_str())
            .bind(stage.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_recent(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {SELECT_COLUMNS}
             FROM articles a
             JOIN article_revisions r ON r.article_id = a.id",
        ));
        Self::push_dimension_scope(&mut builder, locale, stage);
        Self::push_webspace_scope(&mut builder, webspaces);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn count(
        &self,
        locale: &Locale,
        stage: Stage,
        webspaces: &[WebspaceKey],
        template_key: Option<&str>,
    ) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT COUNT(*)
             FROM articles a
             JOIN article_revisions r ON r.article_id = a.id",
        );
        Self::push_dimension_scope(&mut builder, locale, stage);
        Self::push_webspace_scope(&mut builder, webspaces);
        if let Some(key) = template_key {
            builder.push(" AND r.template_key = ");
            builder.push_bind(key);
        }

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count.try_into().unwrap_or_default())
    }
}

#[async_trait]
impl ArticleFilterRepository for PostgresArticleRepository {
    /// OR inside each dimension (array overlap / IN), AND across dimensions.
    /// Returns the full matching set unpaginated; the query composer slices.
    async fn find_matching(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {SELECT_COLUMNS}
             FROM articles a
             JOIN article_revisions r ON r.article_id = a.id",
        ));
        Self::push_dimension_scope(&mut builder, &filter.locale, filter.stage);

        if !filter.template_keys.is_empty() {
            builder.push(" AND r.template_key IN (");
            let mut separated = builder.separated(", ");
            for key in &filter.template_keys {
                separated.push_bind(key.as_str());
            }
            separated.push_unseparated(")");
        }

        if !filter.category_keys.is_empty() {
            builder.push(" AND r.categories && ");
            builder.push_bind(filter.category_keys.clone());
        }

        if !filter.tag_names.is_empty() {
            builder.push(" AND r.tags && ");
            builder.push_bind(filter.tag_names.clone());
        }

        builder.push(" ORDER BY a.created_at DESC, a.id DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
