//! Development/production gate for tracking.
//!
//! The mode comes from the host framework through a lookup chain
//! (current service, its context, the application configuration). Any missing
//! link means "assume production": tracking stays off rather than risk
//! holding memory in a deployed application.

use crate::logging;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Conceptual state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// Not resolved yet
    Unknown,
    /// Development mode, locations are captured
    Active,
    /// Production mode, every tracking call is a no-op
    Inactive,
}

impl TrackingMode {
    const UNKNOWN: u8 = 0;
    const ACTIVE: u8 = 1;
    const INACTIVE: u8 = 2;

    fn from_u8(raw: u8) -> Self {
        match raw {
            Self::ACTIVE => TrackingMode::Active,
            Self::INACTIVE => TrackingMode::Inactive,
            _ => TrackingMode::Unknown,
        }
    }

    fn from_production_mode(production_mode: bool) -> Self {
        if production_mode {
            TrackingMode::Inactive
        } else {
            TrackingMode::Active
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            TrackingMode::Unknown => Self::UNKNOWN,
            TrackingMode::Active => Self::ACTIVE,
            TrackingMode::Inactive => Self::INACTIVE,
        }
    }
}

/// Finds the service serving the current thread, if any.
pub trait ServiceLocator: Send + Sync {
    fn current_service(&self) -> Option<Arc<dyn Service>>;
}

/// A running application service.
pub trait Service: Send + Sync {
    fn context(&self) -> Option<Arc<dyn ServiceContext>>;
}

/// The deployment context a service runs in.
pub trait ServiceContext: Send + Sync {
    fn application_configuration(&self) -> Option<Arc<dyn ApplicationConfiguration>>;
}

pub trait ApplicationConfiguration: Send + Sync {
    fn is_production_mode(&self) -> bool;
}

impl<F> ServiceLocator for F
where
    F: Fn() -> Option<Arc<dyn Service>> + Send + Sync,
{
    fn current_service(&self) -> Option<Arc<dyn Service>> {
        self()
    }
}

/// Lazily resolved, memoized tracking switch.
///
/// Concurrent first calls may each walk the lookup chain; they all land on
/// the same answer so the race is harmless. An incomplete chain is not
/// cached and is retried on the next call.
pub struct ModeGate {
    state: AtomicU8,
    locator: Option<Arc<dyn ServiceLocator>>,
}

impl ModeGate {
    /// Create a gate that resolves through `locator` on first use.
    pub fn new(locator: Arc<dyn ServiceLocator>) -> Self {
        Self {
            state: AtomicU8::new(TrackingMode::UNKNOWN),
            locator: Some(locator),
        }
    }

    /// Create a gate whose mode is already decided.
    pub fn fixed(production_mode: bool) -> Self {
        Self {
            state: AtomicU8::new(TrackingMode::from_production_mode(production_mode).as_u8()),
            locator: None,
        }
    }

    /// Create a gate with no way to learn the mode; it stays inactive.
    pub fn detached() -> Self {
        Self {
            state: AtomicU8::new(TrackingMode::UNKNOWN),
            locator: None,
        }
    }

    /// Current state without triggering resolution.
    pub fn mode(&self) -> TrackingMode {
        TrackingMode::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Whether tracking should happen right now.
    pub fn is_active(&self) -> bool {
        match self.mode() {
            TrackingMode::Active => true,
            TrackingMode::Inactive => false,
            TrackingMode::Unknown => match self.lookup_production_mode() {
                Some(production_mode) => {
                    let mode = TrackingMode::from_production_mode(production_mode);
                    self.state.store(mode.as_u8(), Ordering::Release);
                    logging::log_mode_resolved(production_mode);
                    mode == TrackingMode::Active
                }
                None => {
                    logging::log_mode_unresolved();
                    false
                }
            },
        }
    }

    fn lookup_production_mode(&self) -> Option<bool> {
        let service = self.locator.as_ref()?.current_service()?;
        let context = service.context()?;
        let configuration = context.application_configuration()?;
        Some(configuration.is_production_mode())
    }
}

impl fmt::Debug for ModeGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeGate")
            .field("mode", &self.mode())
            .field("has_locator", &self.locator.is_some())
            .finish()
    }
}
