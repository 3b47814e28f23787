// tests/support/builders.rs
use article_gateway::domain::article::{
    Article, ArticleId, ContentRevision, Locale, Stage, WebspaceKey,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

/// Builder for articles carrying a single live revision, the shape the
/// query layer works with.
pub struct ArticleBuilder {
    id: i64,
    uuid: Uuid,
    created_at: DateTime<Utc>,
    locale: String,
    title: Option<String>,
    template_key: String,
    webspace: Option<String>,
    categories: Vec<String>,
    tags: Vec<String>,
    route_path: Option<String>,
    stage: Stage,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            created_at: Utc.timestamp_opt(1_700_000_000 + id * 60, 0).unwrap(),
            locale: "en".into(),
            title: Some(format!("article {id}")),
            template_key: "default".into(),
            webspace: None,
            categories: vec![],
            tags: vec![],
            route_path: None,
            stage: Stage::Live,
        }
    }

    pub fn uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_string);
        self
    }

    pub fn template_key(mut self, key: &str) -> Self {
        self.template_key = key.into();
        self
    }

    pub fn webspace(mut self, key: &str) -> Self {
        self.webspace = Some(key.into());
        self
    }

    pub fn categories(mut self, keys: &[&str]) -> Self {
        self.categories = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn tags(mut self, names: &[&str]) -> Self {
        self.tags = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn route_path(mut self, path: &str) -> Self {
        self.route_path = Some(path.into());
        self
    }

    /// Store the article as a draft instead of a live revision.
    pub fn draft(mut self) -> Self {
        self.stage = Stage::Draft;
        self
    }

    pub fn build(self) -> Article {
        let template_data = match &self.route_path {
            Some(path) => json!({ "routePath": path }),
            None => json!({}),
        };

        let published = self.stage == Stage::Live;
        let revisions = vec![ContentRevision {
            locale: Locale::new(self.locale).unwrap(),
            stage: self.stage,
            title: self.title,
            description: None,
            teaser: None,
            template_key: self.template_key,
            template_data,
            webspace: self
                .webspace
                .map(|key| WebspaceKey::new(key).unwrap()),
            categories: self.categories,
            tags: self.tags,
            published,
            workflow_place: Some(if published { "published" } else { "draft" }.into()),
        }];

        Article {
            uuid: self.uuid,
            id: ArticleId::new(self.id).unwrap(),
            created_at: self.created_at,
            changed_at: self.created_at,
            revisions,
        }
    }
}
