use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved source coordinate attributed to a component event.
///
/// `filename` and `line_number` are only as good as the captured stack; a
/// `None` means the platform could not tell, not that resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub class_name: String,
    pub filename: Option<String>,
    pub method_name: String,
    pub line_number: Option<u32>,
}

impl Location {
    pub fn new(
        class_name: impl Into<String>,
        filename: Option<String>,
        method_name: impl Into<String>,
        line_number: Option<u32>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            filename,
            method_name: method_name.into(),
            line_number,
        }
    }
}

/// Renders as `class_name.method_name(filename:line_number)`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.class_name, self.method_name)?;
        match &self.filename {
            Some(file) => write!(f, "{}", file)?,
            None => write!(f, "Unknown Source")?,
        }
        if let Some(line) = self.line_number {
            write!(f, ":{}", line)?;
        }
        write!(f, ")")
    }
}
