use super::ArticleQueryService;
use crate::application::error::ApplicationResult;
use crate::domain::article::{Article, Locale, Stage};
use uuid::Uuid;

pub struct FindArticleByUuidQuery {
    pub uuid: Uuid,
    pub locale: Option<Locale>,
}

impl ArticleQueryService {
    /// Zero-or-one article whose live revision matches (uuid, locale).
    pub async fn find_by_uuid(
        &self,
        query: FindArticleByUuidQuery,
    ) -> ApplicationResult<Option<Article>> {
        let locale = self.resolve_locale(query.locale);
        let article = self
            .read_repo
            .find_by_uuid(query.uuid, &locale, Stage::Live)
            .await?;
        Ok(article)
    }
}
