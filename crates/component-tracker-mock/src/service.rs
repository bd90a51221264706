use component_tracker::{ApplicationConfiguration, Service, ServiceContext, ServiceLocator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Where the mocked lookup chain breaks, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    NoService,
    NoContext,
    NoConfiguration,
    Complete(bool),
}

/// A [`ServiceLocator`] with a scripted lookup chain that counts lookups.
#[derive(Debug)]
pub struct MockLocator {
    chain: Chain,
    lookups: AtomicUsize,
}

impl MockLocator {
    pub fn builder() -> MockLocatorBuilder {
        MockLocatorBuilder::default()
    }

    /// A development-mode service.
    pub fn development() -> Arc<Self> {
        Self::builder().production_mode(false).build()
    }

    /// A production-mode service.
    pub fn production() -> Arc<Self> {
        Self::builder().production_mode(true).build()
    }

    /// No current service at all.
    pub fn absent() -> Arc<Self> {
        Self::builder().build()
    }

    /// How many times the chain was walked.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ServiceLocator for MockLocator {
    fn current_service(&self) -> Option<Arc<dyn Service>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.chain {
            Chain::NoService => None,
            chain => Some(Arc::new(MockService(chain))),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockLocatorBuilder {
    has_service: bool,
    has_context: bool,
    production_mode: Option<bool>,
}

impl MockLocatorBuilder {
    /// Provide the whole chain, ending in `production_mode`.
    pub fn production_mode(mut self, production_mode: bool) -> Self {
        self.has_service = true;
        self.has_context = true;
        self.production_mode = Some(production_mode);
        self
    }

    /// A service exists but has no context.
    pub fn without_context(mut self) -> Self {
        self.has_service = true;
        self.has_context = false;
        self.production_mode = None;
        self
    }

    /// Service and context exist but no application configuration.
    pub fn without_configuration(mut self) -> Self {
        self.has_service = true;
        self.has_context = true;
        self.production_mode = None;
        self
    }

    pub fn build(self) -> Arc<MockLocator> {
        let chain = match (self.has_service, self.has_context, self.production_mode) {
            (false, _, _) => Chain::NoService,
            (true, false, _) => Chain::NoContext,
            (true, true, None) => Chain::NoConfiguration,
            (true, true, Some(production_mode)) => Chain::Complete(production_mode),
        };
        Arc::new(MockLocator {
            chain,
            lookups: AtomicUsize::new(0),
        })
    }
}

struct MockService(Chain);

impl Service for MockService {
    fn context(&self) -> Option<Arc<dyn ServiceContext>> {
        match self.0 {
            Chain::NoService | Chain::NoContext => None,
            chain => Some(Arc::new(MockContext(chain))),
        }
    }
}

struct MockContext(Chain);

impl ServiceContext for MockContext {
    fn application_configuration(&self) -> Option<Arc<dyn ApplicationConfiguration>> {
        match self.0 {
            Chain::Complete(production_mode) => Some(Arc::new(MockConfiguration(production_mode))),
            _ => None,
        }
    }
}

struct MockConfiguration(bool);

impl ApplicationConfiguration for MockConfiguration {
    fn is_production_mode(&self) -> bool {
        self.0
    }
}
