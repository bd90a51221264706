use component_tracker::Frame;

/// Builds synthetic stacks, innermost frame first.
#[derive(Debug, Clone)]
pub struct StackBuilder {
    frames: Vec<Frame>,
    next_line: u32,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            next_line: 1,
        }
    }

    /// Add a frame with an explicit line.
    pub fn frame(mut self, class_name: &str, method_name: &str, line: u32) -> Self {
        self.frames.push(Frame::new(
            class_name,
            method_name,
            Some(file_for(class_name)),
            Some(line),
        ));
        self
    }

    /// Add a frame with an auto-numbered line.
    pub fn call(mut self, class_name: &str, method_name: &str) -> Self {
        let line = self.next_line;
        self.next_line += 1;
        self.frame(class_name, method_name, line)
    }

    /// Add a frame that carries no file or line, like stripped binaries do.
    pub fn bare(mut self, class_name: &str, method_name: &str) -> Self {
        self.frames.push(Frame::new(class_name, method_name, None, None));
        self
    }

    pub fn build(self) -> Vec<Frame> {
        self.frames
    }
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Only the last path segment, enough to tell frames apart.
fn file_for(class_name: &str) -> String {
    let leaf = class_name.rsplit("::").next().unwrap_or(class_name);
    format!("{}.rs", leaf)
}
