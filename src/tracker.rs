use crate::config::Config;
use crate::filter::FrameFilter;
use crate::frame::{self, Frame};
use crate::location::Location;
use crate::logging;
use crate::mode::{ModeGate, ServiceLocator};
use crate::resolver::LocationResolver;
use crate::store::LocationStore;
use std::any::Any;
use std::sync::Arc;

/// A UI component whose creation and attach sites can be tracked.
///
/// Components are tracked by `Arc` identity. The class name defaults to the
/// concrete type path, which is what stack frames of its own methods carry.
pub trait Component: Any + Send + Sync {
    fn class_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Records where components were created and attached.
///
/// Host frameworks call [`track_create`](Self::track_create) right after a
/// component is constructed and [`track_attach`](Self::track_attach) when it
/// is added to a parent. Diagnostic views query with `find_*` and must treat
/// `None` as "location unknown".
#[derive(Debug)]
pub struct ComponentTracker {
    gate: ModeGate,
    resolver: LocationResolver,
    create_locations: LocationStore,
    attach_locations: LocationStore,
}

impl ComponentTracker {
    pub fn new(gate: ModeGate, resolver: LocationResolver) -> Self {
        Self {
            gate,
            resolver,
            create_locations: LocationStore::new("create"),
            attach_locations: LocationStore::new("attach"),
        }
    }

    /// Build a tracker from loaded configuration.
    ///
    /// A pinned `production_mode` takes precedence over `locator`; with
    /// neither, tracking stays disabled.
    pub fn from_config(config: &Config, locator: Option<Arc<dyn ServiceLocator>>) -> Self {
        let tracking = &config.tracking;

        let gate = match (tracking.production_mode, locator) {
            (Some(production_mode), _) => ModeGate::fixed(production_mode),
            (None, Some(locator)) => ModeGate::new(locator),
            (None, None) => ModeGate::detached(),
        };

        let mut filter = if tracking.replace_default_prefixes {
            FrameFilter::with_prefixes(Vec::<String>::new())
        } else {
            FrameFilter::new()
        };
        for prefix in &tracking.skip_prefixes {
            filter.push_prefix(prefix.as_str());
        }

        let mut resolver = LocationResolver::new(filter);
        if let Some(class) = &tracking.navigation_class {
            resolver = resolver.with_navigation_class(class.as_str());
        }

        Self {
            gate,
            resolver,
            create_locations: LocationStore::with_sweep_interval("create", tracking.sweep_interval),
            attach_locations: LocationStore::with_sweep_interval("attach", tracking.sweep_interval),
        }
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    pub fn gate(&self) -> &ModeGate {
        &self.gate
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    /// Track the creation site of `component` from the current stack.
    pub fn track_create<C: ?Sized + Component>(&self, component: &Arc<C>) {
        if !self.gate.is_active() {
            return;
        }
        let stack = frame::capture();
        self.record_create(component, &stack);
    }

    /// Track the creation site of `component` from a caller-supplied stack.
    pub fn track_create_from<C: ?Sized + Component>(&self, component: &Arc<C>, stack: &[Frame]) {
        if !self.gate.is_active() {
            return;
        }
        self.record_create(component, stack);
    }

    /// Track the attach site of `component` from the current stack.
    pub fn track_attach<C: ?Sized + Component>(&self, component: &Arc<C>) {
        if !self.gate.is_active() {
            return;
        }
        let stack = frame::capture();
        self.record_attach(component, &stack);
    }

    /// Track the attach site of `component` from a caller-supplied stack.
    pub fn track_attach_from<C: ?Sized + Component>(&self, component: &Arc<C>, stack: &[Frame]) {
        if !self.gate.is_active() {
            return;
        }
        self.record_attach(component, stack);
    }

    pub fn find_create<C: ?Sized + Component>(&self, component: &Arc<C>) -> Option<Location> {
        self.create_locations.lookup(component)
    }

    pub fn find_attach<C: ?Sized + Component>(&self, component: &Arc<C>) -> Option<Location> {
        self.attach_locations.lookup(component)
    }

    /// Remove entries of dropped components from both tables.
    ///
    /// The tables also sweep themselves every `sweep_interval` records or
    /// lookups; call this when tracking goes quiet and memory matters.
    pub fn sweep(&self) -> usize {
        self.create_locations.sweep() + self.attach_locations.sweep()
    }

    pub fn create_locations(&self) -> &LocationStore {
        &self.create_locations
    }

    pub fn attach_locations(&self) -> &LocationStore {
        &self.attach_locations
    }

    fn record_create<C: ?Sized + Component>(&self, component: &Arc<C>, stack: &[Frame]) {
        let class = component.class_name();
        let mut location = self.resolver.resolve(stack, Some(class), None);

        // Router-instantiated components have no user frame above their own
        // constructor once their class is excluded.
        if self.is_navigation_origin(location.as_ref()) {
            logging::log_navigation_fallback("create", class);
            location = self.resolver.resolve(stack, None, None);
        }

        logging::log_location_recorded("create", class, location.as_ref());
        self.create_locations.record(component, location);
    }

    fn record_attach<C: ?Sized + Component>(&self, component: &Arc<C>, stack: &[Frame]) {
        let class = component.class_name();
        let created = self.create_locations.lookup(component);

        // The interesting attach call is usually in the class that created
        // the component, not in a generic layout.
        let preferred = created.as_ref().map(|loc| loc.class_name.as_str());
        let mut location = self.resolver.resolve(stack, Some(class), preferred);

        if self.is_navigation_origin(location.as_ref()) {
            logging::log_navigation_fallback("attach", class);
            location = created;
        }

        logging::log_location_recorded("attach", class, location.as_ref());
        self.attach_locations.record(component, location);
    }

    fn is_navigation_origin(&self, location: Option<&Location>) -> bool {
        location.is_some_and(|loc| self.resolver.is_navigation_origin(loc))
    }
}
