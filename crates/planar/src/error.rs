use std::fmt;

use planar_array::ShapeError;

/// Error returned when an image or array has a layout that can't be converted.
#[derive(Debug)]
pub struct LayoutError {
    msg: String,
    source: Option<ShapeError>,
}

impl LayoutError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }

    /// Returns the error message, without the message of the underlying [`ShapeError`].
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(e) => write!(f, "{}: {}", self.msg, e),
            None => f.write_str(&self.msg),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(e) => Some(e),
            None => None,
        }
    }
}

impl From<ShapeError> for LayoutError {
    fn from(e: ShapeError) -> Self {
        Self {
            msg: "array shape error".into(),
            source: Some(e),
        }
    }
}
