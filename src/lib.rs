pub mod config;
pub mod filter;
pub mod frame;
pub mod location;
pub mod logging;
pub mod mode;
pub mod resolver;
pub mod store;
pub mod tracker;
use miette::Diagnostic;

pub use config::Config;
pub use filter::FrameFilter;
pub use frame::Frame;
pub use location::Location;
pub use mode::{
    ApplicationConfiguration, ModeGate, Service, ServiceContext, ServiceLocator, TrackingMode,
};
pub use resolver::LocationResolver;
pub use store::LocationStore;
pub use tracker::{Component, ComponentTracker};

/// Result type alias for the tracker
pub type Result<T> = miette::Result<T>;

/// Error types for the tracker
///
/// Tracking itself never fails; these only come out of configuration loading.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TrackerError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(tracker::config_invalid),
        help("Check the [tracking] table of .component-tracker.toml. Prefixes are plain strings such as \"my_framework::\".")
    )]
    ConfigError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(tracker::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
