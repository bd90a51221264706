use crate::filter::FrameFilter;
use crate::frame::Frame;
use crate::location::Location;
use std::borrow::Cow;

/// Picks the one frame of a stack worth showing to a developer.
#[derive(Debug, Clone, Default)]
pub struct LocationResolver {
    filter: FrameFilter,
    /// Type path of the router machinery that instantiates route targets
    navigation_class: Option<String>,
}

impl LocationResolver {
    pub fn new(filter: FrameFilter) -> Self {
        Self {
            filter,
            navigation_class: None,
        }
    }

    pub fn with_navigation_class(mut self, class_name: impl Into<String>) -> Self {
        self.navigation_class = Some(class_name.into());
        self
    }

    pub fn filter(&self) -> &FrameFilter {
        &self.filter
    }

    pub fn navigation_class(&self) -> Option<&str> {
        self.navigation_class.as_deref()
    }

    /// Resolve the relevant location of `stack`.
    ///
    /// Frames of `exclude_class` and internal frames are dropped. Among the
    /// rest, the first frame of `preferred_class` wins if there is one,
    /// otherwise the first frame overall. Earlier candidates are skipped when
    /// the preferred class appears further down the stack.
    ///
    /// Class comparisons ignore generic arguments: `type_name` reports
    /// `Grid<app::Row>` where the demangled frame says `Grid<T>`.
    pub fn resolve(
        &self,
        stack: &[Frame],
        exclude_class: Option<&str>,
        preferred_class: Option<&str>,
    ) -> Option<Location> {
        let exclude = exclude_class.map(erase_generics);
        let candidates: Vec<&Frame> = stack
            .iter()
            .filter(|frame| {
                exclude
                    .as_deref()
                    .map_or(true, |class| erase_generics(&frame.class_name) != class)
            })
            .filter(|frame| !self.filter.is_internal(&frame.class_name))
            .collect();

        if let Some(preferred) = preferred_class.map(erase_generics) {
            if let Some(frame) = candidates
                .iter()
                .find(|f| erase_generics(&f.class_name) == preferred)
            {
                return Some(frame.to_location());
            }
        }

        candidates.first().map(|frame| frame.to_location())
    }

    /// Whether `location` points into the navigation machinery rather than
    /// user code.
    pub fn is_navigation_origin(&self, location: &Location) -> bool {
        self.navigation_class
            .as_deref()
            .is_some_and(|class| location.class_name == class)
    }
}

/// Drop every `<...>` group, so `app::Grid<app::Row>` becomes `app::Grid`.
pub fn erase_generics(class_name: &str) -> Cow<'_, str> {
    if !class_name.contains('<') {
        return Cow::Borrowed(class_name);
    }

    let mut erased = String::with_capacity(class_name.len());
    let mut depth = 0usize;
    let mut prev = '\0';
    for c in class_name.chars() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' && depth > 0 => depth -= 1,
            _ if depth == 0 => erased.push(c),
            _ => {}
        }
        prev = c;
    }
    Cow::Owned(erased)
}
