//! Provider selection by registry lookup.

use std::collections::HashMap;
use std::sync::Arc;

use vitrine_core::ReferenceImage;
use vitrine_error::VitrineResult;
use vitrine_interface::{ImageGenerator, ImageHandle};

use crate::providers::{DemoGenerator, ProviderId};

/// Routes image-generation calls to a registered backend adapter.
///
/// Adapters live in a lookup table keyed by [`ProviderId`]; adding a backend
/// means registering an adapter, not editing a conditional. Unspecified or
/// unregistered identifiers resolve to the demo adapter, so the router
/// always returns something visual. The router forwards calls unmodified
/// and performs no retries.
///
/// # Examples
///
/// ```
/// use vitrine_models::ProviderRouter;
///
/// # #[tokio::main]
/// # async fn main() {
/// let router = ProviderRouter::new();
/// // No provider given: the demo adapter answers.
/// let handle = router.generate(None, "a quiet cafe at dawn", &[]).await.unwrap();
/// assert!(handle.to_uri().starts_with("data:image/png;base64,"));
/// # }
/// ```
pub struct ProviderRouter {
    adapters: HashMap<ProviderId, Arc<dyn ImageGenerator>>,
    fallback: Arc<dyn ImageGenerator>,
}

impl std::fmt::Debug for ProviderRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<&ProviderId> = self.adapters.keys().collect();
        registered.sort_by_key(|id| format!("{id}"));
        f.debug_struct("ProviderRouter")
            .field("registered", &registered)
            .field("fallback", &self.fallback.backend_name())
            .finish()
    }
}

impl ProviderRouter {
    /// Create a router with only the demo adapter registered.
    pub fn new() -> Self {
        let fallback: Arc<dyn ImageGenerator> = Arc::new(DemoGenerator);
        let mut adapters: HashMap<ProviderId, Arc<dyn ImageGenerator>> = HashMap::new();
        adapters.insert(ProviderId::Demo, fallback.clone());
        Self { adapters, fallback }
    }

    /// Register an adapter for a backend, replacing any existing one.
    pub fn with_adapter(
        mut self,
        id: ProviderId,
        adapter: Arc<dyn ImageGenerator>,
    ) -> Self {
        self.adapters.insert(id, adapter);
        self
    }

    /// Resolve a provider identifier to an adapter.
    ///
    /// `None` and identifiers with no registered adapter both resolve to
    /// the demo fallback.
    pub fn resolve(&self, id: Option<ProviderId>) -> Arc<dyn ImageGenerator> {
        match id {
            Some(id) => self
                .adapters
                .get(&id)
                .cloned()
                .unwrap_or_else(|| self.fallback.clone()),
            None => self.fallback.clone(),
        }
    }

    /// Generate an image through the selected backend.
    pub async fn generate(
        &self,
        id: Option<ProviderId>,
        prompt: &str,
        reference_images: &[ReferenceImage],
    ) -> VitrineResult<ImageHandle> {
        self.resolve(id).generate(prompt, reference_images).await
    }
}

impl Default for ProviderRouter {
    fn default() -> Self {
        Self::new()
    }
}
