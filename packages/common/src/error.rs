use thiserror::Error;

/// Every failure that can reach the host surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    UnsupportedSelection(#[from] SelectionError),

    #[error("{0}")]
    Internal(String),
}

impl GenerateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Internal(err.to_string())
    }
}

/// Reasons a canvas selection cannot be exported
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select a component or frame to export.")]
    Empty,

    #[error("Please select only one component or frame at a time.")]
    Multiple,

    #[error("Selected node type \"{0}\" is not supported. Please select a component, component set, frame, group, or component instance.")]
    Unsupported(String),
}

impl SelectionError {
    /// Message kind posted to the UI for this failure
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionError::Empty => "no-selection",
            SelectionError::Multiple => "multiple-selection",
            SelectionError::Unsupported(_) => "invalid-selection",
        }
    }
}
