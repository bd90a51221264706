/// Prefixes of type paths that never count as a user call site.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &[
    "component_tracker::",
    "backtrace::",
    "std::",
    "core::",
    "alloc::",
    "test::",
    "tracing::",
    "tracing_core::",
];

/// Decides which stack frames are framework or runtime noise.
///
/// The prefix list is the single tuning surface; matching is a plain
/// `starts_with` in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFilter {
    prefixes: Vec<String>,
}

impl FrameFilter {
    /// Create a filter with [`DEFAULT_SKIP_PREFIXES`].
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_SKIP_PREFIXES.iter().copied())
    }

    /// Create a filter with exactly the given prefixes.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a prefix, ignoring duplicates.
    pub fn push_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Frames without a type path (C entry points, bare `main`) are internal too.
    pub fn is_internal(&self, frame_class_name: &str) -> bool {
        frame_class_name.is_empty()
            || self
                .prefixes
                .iter()
                .any(|prefix| frame_class_name.starts_with(prefix.as_str()))
    }
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self::new()
    }
}
