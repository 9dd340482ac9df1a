use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of intake-flow errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IntakeErrorKind {
    /// A required field is missing (e.g. empty representing set).
    Validation,
    /// An attached document failed the type/size constraint.
    Upload,
    /// The summarization collaborator failed.
    Summarization,
    /// The action is not legal in the current step.
    InvalidTransition,
}

impl fmt::Display for IntakeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeErrorKind::Validation => write!(f, "ValidationError"),
            IntakeErrorKind::Upload => write!(f, "UploadError"),
            IntakeErrorKind::Summarization => write!(f, "SummarizationError"),
            IntakeErrorKind::InvalidTransition => write!(f, "InvalidTransition"),
        }
    }
}

/// Structured error raised by the intake flow and surfaced inline in the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeError {
    pub kind: IntakeErrorKind,
    pub message: String,
    /// Form field the error belongs to, when it can be pinned to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntakeError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: IntakeErrorKind::Validation,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self {
            kind: IntakeErrorKind::Upload,
            message: message.into(),
            field: Some("document".to_string()),
        }
    }

    pub fn summarization(message: impl Into<String>) -> Self {
        Self {
            kind: IntakeErrorKind::Summarization,
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self {
            kind: IntakeErrorKind::InvalidTransition,
            message: message.into(),
            field: None,
        }
    }

    /// Whether this error belongs next to the given form field.
    pub fn is_for(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for IntakeError {}
