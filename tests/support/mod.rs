// tests/support/mod.rs
pub mod builders;
pub mod mocks;

use article_gateway::application::ports::{ContentResolverPort, WebspaceResolverPort};
use article_gateway::application::services::ApplicationServices;
use article_gateway::domain::article::{Article, Locale};
use article_gateway::infrastructure::content::RevisionContentResolver;
use mocks::{InMemoryArticleRepository, StaticWebspaceResolver};
use std::sync::Arc;

/// Services wired with the in-memory repository, the default revision
/// projection, and no inferred webspace.
pub fn build_services(articles: Vec<Article>) -> ApplicationServices {
    let repo = Arc::new(InMemoryArticleRepository::new(articles));
    build_services_with(
        repo,
        Arc::new(StaticWebspaceResolver(None)),
        Arc::new(RevisionContentResolver),
    )
}

pub fn build_services_with(
    repo: Arc<InMemoryArticleRepository>,
    webspace_resolver: Arc<WebspaceResolverPort>,
    content_resolver: Arc<ContentResolverPort>,
) -> ApplicationServices {
    ApplicationServices::new(
        repo.clone(),
        repo,
        webspace_resolver,
        content_resolver,
        Locale::new("en").unwrap(),
    )
}
