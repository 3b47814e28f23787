use crate::application::ports::content::{ContentResolver, ResolvedContent};
use crate::domain::article::{Article, Locale, Stage};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// Default content resolution: projects the article's own loaded revision
/// for the requested (locale, stage). A missing revision is a resolution
/// error, which the resolver adapter turns into a degraded view.
#[derive(Default, Clone)]
pub struct RevisionContentResolver;

#[async_trait]
impl ContentResolver for RevisionContentResolver {
    async fn resolve_content(
        &self,
        article: &Article,
        locale: &Locale,
        stage: Stage,
    ) -> DomainResult<ResolvedContent> {
        let revision = article.revision(locale, stage).ok_or_else(|| {
            DomainError::Resolution(format!(
                "no {stage} revision in locale {locale} for article {}",
                article.uuid
            ))
        })?;

        Ok(ResolvedContent {
            title: revision.title.clone(),
            description: revision.description.clone(),
            teaser: revision.teaser.clone(),
            url: revision.route_path().map(str::to_string),
            template_key: revision.template_key.clone(),
            template_data: revision.template_data.clone(),
            categories: revision.categories.clone(),
            tags: revision.tags.clone(),
            published: revision.published,
            workflow_place: revision.workflow_place.clone(),
        })
    }
}
