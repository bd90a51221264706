use crate::location::Location;
use crate::logging;
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Operations between two automatic sweeps
pub const DEFAULT_SWEEP_INTERVAL: usize = 256;

/// Type-erased weak handle, so sized and `dyn` components share one table.
trait Liveness: Send + Sync {
    fn is_live(&self) -> bool;
}

impl<T: ?Sized + Send + Sync> Liveness for Weak<T> {
    fn is_live(&self) -> bool {
        self.strong_count() > 0
    }
}

struct Entry {
    component: Box<dyn Liveness>,
    location: Option<Location>,
}

impl Entry {
    fn is_live(&self) -> bool {
        self.component.is_live()
    }
}

/// Weakly keyed table from component instance to its last recorded location.
///
/// Entries hold a `Weak` handle, so dropping the last `Arc` of a component
/// drops the component itself. The emptied entry lingers until the next
/// sweep, which runs every `sweep_interval` records or lookups, or on an
/// explicit [`sweep`](Self::sweep). Because a `Weak` keeps its allocation
/// reserved, the address key cannot be reused by another component in the
/// meantime.
pub struct LocationStore {
    name: &'static str,
    entries: DashMap<usize, Entry>,
    sweep_interval: usize,
    ops_since_sweep: AtomicUsize,
}

impl LocationStore {
    pub fn new(name: &'static str) -> Self {
        Self::with_sweep_interval(name, DEFAULT_SWEEP_INTERVAL)
    }

    /// `0` disables automatic sweeping.
    pub fn with_sweep_interval(name: &'static str, sweep_interval: usize) -> Self {
        Self {
            name,
            entries: DashMap::new(),
            sweep_interval,
            ops_since_sweep: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Upsert the location of `component`, replacing any earlier one.
    pub fn record<C>(&self, component: &Arc<C>, location: Option<Location>)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let handle: Weak<C> = Arc::downgrade(component);
        self.entries.insert(
            identity(component),
            Entry {
                component: Box::new(handle),
                location,
            },
        );
        self.tick();
    }

    /// Last recorded location of `component`.
    pub fn lookup<C>(&self, component: &Arc<C>) -> Option<Location>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let location = self
            .entries
            .get(&identity(component))
            .filter(|entry| entry.is_live())
            .and_then(|entry| entry.location.clone());
        self.tick();
        location
    }

    /// Whether `component` has an entry, even one without a location.
    pub fn contains<C>(&self, component: &Arc<C>) -> bool
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.entries
            .get(&identity(component))
            .is_some_and(|entry| entry.is_live())
    }

    /// Drop entries of components that no longer exist. Returns how many
    /// entries were removed.
    pub fn sweep(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live());
        let remaining = self.entries.len();
        let removed = before.saturating_sub(remaining);
        if removed > 0 {
            logging::log_sweep(self.name, removed, remaining);
        }
        removed
    }

    /// Number of entries whose component is still alive.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Must not be called while a map guard is held.
    fn tick(&self) {
        if self.sweep_interval == 0 {
            return;
        }
        let count = self.ops_since_sweep.fetch_add(1, Ordering::Relaxed) + 1;
        if count >= self.sweep_interval {
            self.ops_since_sweep.store(0, Ordering::Relaxed);
            self.sweep();
        }
    }
}

impl fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationStore")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("sweep_interval", &self.sweep_interval)
            .finish()
    }
}

fn identity<C: ?Sized>(component: &Arc<C>) -> usize {
    Arc::as_ptr(component) as *const () as usize
}
