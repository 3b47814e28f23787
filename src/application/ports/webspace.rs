use crate::domain::article::WebspaceKey;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// What the query layer knows about the caller's surrounding request, used
/// only to infer a webspace when none is given explicitly.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub host: Option<String>,
    pub environment: Option<String>,
}

impl RequestContext {
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            environment: None,
        }
    }
}

/// Port onto the host site-resolution service: maps the current request
/// (host + environment) to the webspace it is served under, when known.
#[async_trait]
pub trait WebspaceResolver: Send + Sync {
    async fn resolve_webspace(&self, ctx: &RequestContext) -> DomainResult<Option<WebspaceKey>>;
}
