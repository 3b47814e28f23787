use crate::domain::article::value_objects::{Locale, Stage, WebspaceKey};
use serde_json::Value;

/// The (locale, stage)-scoped editable view of an article. The query layer
/// expects at most one live revision per (article, locale); the schema
/// permits more stages (draft alongside live).
#[derive(Debug, Clone)]
pub struct ContentRevision {
    pub locale: Locale,
    pub stage: Stage,
    pub title: Option<String>,
    pub description: Option<String>,
    pub teaser: Option<String>,
    pub template_key: String,
    pub template_data: Value,
    pub webspace: Option<WebspaceKey>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub workflow_place: Option<String>,
}

impl ContentRevision {
    pub fn matches(&self, locale: &Locale, stage: Stage) -> bool {
        self.stage == stage && &self.locale == locale
    }

    /// Route path recorded by the routing layer inside the template data,
    /// when the assigned template carries one.
    pub fn route_path(&self) -> Option<&str> {
        self.template_data
            .get("routePath")
            .and_then(Value::as_str)
    }
}
