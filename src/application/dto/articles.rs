use crate::application::ports::content::ResolvedContent;
use crate::domain::article::{Article, Locale, Stage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

const UNTITLED: &str = "untitled";

/// Display-ready view of one article. Resolution failures degrade to a
/// minimal view per article instead of failing the whole listing, so the
/// two outcomes are explicit at the type level.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ArticleView {
    Resolved(ResolvedArticleView),
    Degraded(DegradedArticleView),
}

impl ArticleView {
    pub fn uuid(&self) -> Uuid {
        match self {
            ArticleView::Resolved(view) => view.uuid,
            ArticleView::Degraded(view) => view.uuid,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ArticleView::Degraded(_))
    }

    pub fn resolved(article: &Article, locale: &Locale, content: ResolvedContent) -> Self {
        ArticleView::Resolved(ResolvedArticleView {
            uuid: article.uuid,
            id: article.id.into(),
            title: content.title.unwrap_or_else(|| UNTITLED.to_string()),
            description: content.description.unwrap_or_default(),
            teaser: content.teaser.unwrap_or_default(),
            url: content.url,
            template_key: content.template_key,
            stage: Stage::Live.as_str().to_string(),
            locale: locale.as_str().to_string(),
            published: content.published,
            workflow_place: content.workflow_place,
            categories: content.categories,
            tags: content.tags,
            created_at: article.created_at,
            changed_at: article.changed_at,
            template_data: content.template_data,
        })
    }

    pub fn degraded(article: &Article, error: impl std::fmt::Display) -> Self {
        ArticleView::Degraded(DegradedArticleView {
            uuid: article.uuid,
            id: article.id.into(),
            title: format!("unresolved article {}", article.uuid),
            description: error.to_string(),
            url: None,
            template_data: Value::Object(Default::default()),
            error: error.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedArticleView {
    pub uuid: Uuid,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub teaser: String,
    pub url: Option<String>,
    pub template_key: String,
    pub stage: String,
    pub locale: String,
    pub published: bool,
    pub workflow_place: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
    pub template_data: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct DegradedArticleView {
    pub uuid: Uuid,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub template_data: Value,
    pub error: String,
}
