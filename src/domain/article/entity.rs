// src/domain/article/entity.rs
use crate::domain::article::revision::ContentRevision;
use crate::domain::article::value_objects::{ArticleId, Locale, Stage, WebspaceKey};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A content entity owned by the host storage engine. This crate only ever
/// reads articles; it never creates, mutates, or deletes one.
#[derive(Debug, Clone)]
pub struct Article {
    pub uuid: Uuid,
    pub id: ArticleId,
    pub created_at: DateTime<Utc>,
    pub changed_at: DateTime<Utc>,
    pub revisions: Vec<ContentRevision>,
}

impl Article {
    pub fn revision(&self, locale: &Locale, stage: Stage) -> Option<&ContentRevision> {
        self.revisions.iter().find(|rev| rev.matches(locale, stage))
    }

    pub fn live_revision(&self, locale: &Locale) -> Option<&ContentRevision> {
        self.revision(locale, Stage::Live)
    }

    /// Webspace the live revision for `locale` is assigned to, if any.
    pub fn live_webspace(&self, locale: &Locale) -> Option<&WebspaceKey> {
        self.live_revision(locale)
            .and_then(|rev| rev.webspace.as_ref())
    }
}
