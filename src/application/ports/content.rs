use crate::domain::article::{Article, Locale, Stage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde_json::Value;

/// The (locale, stage)-projected content of one article, as handed back by
/// the host CMS's content-resolution service.
#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub teaser: Option<String>,
    pub url: Option<String>,
    pub template_key: String,
    pub template_data: Value,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub workflow_place: Option<String>,
}

/// Port onto the host content-resolution service. Resolution may incur I/O
/// and may fail per article; callers decide how to degrade.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn resolve_content(
        &self,
        article: &Article,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<ResolvedContent>;
}
