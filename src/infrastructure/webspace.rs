use crate::application::ports::webspace::{RequestContext, WebspaceResolver};
use crate::domain::article::WebspaceKey;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Site resolution backed by the configured host → webspace mapping. A host
/// with no mapping resolves to no webspace, not to an error.
#[derive(Clone, Default)]
pub struct HostMappingWebspaceResolver {
    mappings: Vec<(String, String)>,
}

impl HostMappingWebspaceResolver {
    pub fn new(mappings: Vec<(String, String)>) -> Self {
        Self { mappings }
    }
}

#[async_trait]
impl WebspaceResolver for HostMappingWebspaceResolver {
    async fn resolve_webspace(&self, ctx: &RequestContext) -> DomainResult<Option<WebspaceKey>> {
        let Some(host) = ctx.host.as_deref() else {
            return Ok(None);
        };
        // Port numbers are not part of the mapping.
        let host = host.split(':').next().unwrap_or(host);

        self.mappings
            .iter()
            .find(|(mapped_host, _)| mapped_host.eq_ignore_ascii_case(host))
            .map(|(_, key)| WebspaceKey::new(key.clone()))
            .transpose()
    }
}
