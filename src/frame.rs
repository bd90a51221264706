//! Call stack capture for the current thread.
//!
//! Native frames are resolved through the `backtrace` crate and their
//! demangled symbol paths are split into a declaring type path (the "class")
//! and a method name, so `app::views::MainView::new` becomes class
//! `app::views::MainView` and method `new`.

use crate::location::Location;
use backtrace::SymbolName;

/// One entry of a captured call stack, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub class_name: String,
    pub method_name: String,
    pub filename: Option<String>,
    pub line_number: Option<u32>,
}

impl Frame {
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        filename: Option<String>,
        line_number: Option<u32>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            filename,
            line_number,
        }
    }

    /// Build a frame from a demangled symbol path such as
    /// `app::MainView::new` or `<app::MainView as app::View>::render`.
    pub fn from_symbol_path(path: &str, filename: Option<String>, line_number: Option<u32>) -> Self {
        let (class_name, method_name) = split_symbol_path(path);
        Self::new(class_name, method_name, filename, line_number)
    }

    /// Copy the frame's coordinates into a [`Location`] as-is.
    pub fn to_location(&self) -> Location {
        Location {
            class_name: self.class_name.clone(),
            filename: self.filename.clone(),
            method_name: self.method_name.clone(),
            line_number: self.line_number,
        }
    }
}

/// Capture the calling thread's stack.
///
/// Frames whose symbol cannot be resolved are left out; inlined functions
/// show up as separate frames when the debug info describes them.
pub fn capture() -> Vec<Frame> {
    let mut frames = Vec::new();
    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            if let Some(name) = symbol.name() {
                frames.push(Frame::from_symbol_path(
                    &demangled(&name),
                    symbol.filename().map(|p| p.display().to_string()),
                    symbol.lineno(),
                ));
            }
        });
        true
    });
    frames
}

// The alternate form drops the trailing `::h0123abcd` hash.
fn demangled(name: &SymbolName<'_>) -> String {
    format!("{:#}", name)
}

/// Split a symbol path into `(type path, method)`.
///
/// Closure segments and trailing generic arguments are folded into their
/// enclosing function. A path with a single segment has an empty type path.
pub fn split_symbol_path(path: &str) -> (String, String) {
    let path = path.trim();

    if path.starts_with('<') {
        if let Some(close) = matching_angle(path) {
            let inner = &path[1..close];
            let self_type = split_top_level(inner, " as ")
                .into_iter()
                .next()
                .unwrap_or(inner)
                .trim();
            let rest = path[close + 1..].trim_start_matches("::");
            let segments = strip_suffixes(split_top_level(rest, "::"));
            return match segments.as_slice() {
                [] => (String::new(), self_type.to_string()),
                [method] => (self_type.to_string(), method.to_string()),
                [.., method] => {
                    // `<T as Trait>::assoc::method` style paths are rare; keep
                    // everything but the last segment attached to the type.
                    let mid = segments[..segments.len() - 1].join("::");
                    (format!("{}::{}", self_type, mid), method.to_string())
                }
            };
        }
    }

    let segments = strip_suffixes(split_top_level(path, "::"));
    match segments.as_slice() {
        [] => (String::new(), String::new()),
        [method] => (String::new(), method.to_string()),
        [.., method] => (
            segments[..segments.len() - 1].join("::"),
            method.to_string(),
        ),
    }
}

fn strip_suffixes(mut segments: Vec<&str>) -> Vec<&str> {
    while segments
        .last()
        .is_some_and(|s| (s.starts_with("{{") && s.ends_with("}}")) || s.starts_with('<'))
    {
        segments.pop();
    }
    segments
}

/// Index of the `>` closing the `<` at position 0.
fn matching_angle(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Split on `sep` wherever it is not nested inside `<...>`.
fn split_top_level<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = '\0';
    let bytes = s.as_bytes();
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => depth = depth.saturating_sub(1),
            _ => {}
        }
        prev = c;
        if depth == 0 && i >= start && bytes[i..].starts_with(sep.as_bytes()) {
            parts.push(&s[start..i]);
            start = i + sep.len();
        }
    }
    parts.push(&s[start..]);
    parts.retain(|p| !p.is_empty());
    parts
}
