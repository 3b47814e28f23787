use crate::domain::article::value_objects::{Locale, Stage, WebspaceKey};

/// Declarative filter request for article listings. Built fresh per call,
/// never persisted. The loosely-keyed filter mapping of the host repository
/// is expressed here as named, typed fields.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub locale: Locale,
    pub stage: Stage,
    pub limit: u32,
    pub offset: u32,
    pub template_keys: Vec<String>,
    pub category_keys: Vec<String>,
    pub tag_names: Vec<String>,
    pub webspace_keys: Vec<WebspaceKey>,
    pub ignore_webspace: bool,
}

impl ArticleFilter {
    pub fn live(locale: Locale) -> Self {
        Self {
            locale,
            stage: Stage::Live,
            limit: 0,
            offset: 0,
            template_keys: vec![],
            category_keys: vec![],
            tag_names: vec![],
            webspace_keys: vec![],
            ignore_webspace: false,
        }
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    pub fn with_template_keys(mut self, keys: Vec<String>) -> Self {
        self.template_keys = keys;
        self
    }

    pub fn with_category_keys(mut self, keys: Vec<String>) -> Self {
        self.category_keys = keys;
        self
    }

    pub fn with_tag_names(mut self, names: Vec<String>) -> Self {
        self.tag_names = names;
        self
    }

    pub fn with_webspace_keys(mut self, keys: Vec<WebspaceKey>) -> Self {
        self.webspace_keys = keys;
        self
    }

    pub fn ignoring_webspace(mut self, ignore: bool) -> Self {
        self.ignore_webspace = ignore;
        self
    }

    /// True when any filter dimension the native listing query cannot
    /// express (template, category, tag) is present.
    pub fn has_dimension_filters(&self) -> bool {
        !self.template_keys.is_empty()
            || !self.category_keys.is_empty()
            || !self.tag_names.is_empty()
    }
}
