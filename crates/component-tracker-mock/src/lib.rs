pub mod component;
pub mod service;
pub mod stack;

pub use component::MockComponent;
pub use service::{MockLocator, MockLocatorBuilder};
pub use stack::StackBuilder;
