use component_tracker::Component;
use std::sync::Arc;

/// A component with a chosen class name, so synthetic stacks can refer to it.
#[derive(Debug, Clone)]
pub struct MockComponent {
    class_name: String,
}

impl MockComponent {
    pub fn new(class_name: &str) -> Arc<Self> {
        Arc::new(Self {
            class_name: class_name.to_string(),
        })
    }
}

impl Component for MockComponent {
    fn class_name(&self) -> &str {
        &self.class_name
    }
}
