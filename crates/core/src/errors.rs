use thiserror::Error;

/// Failure taxonomy for the intake and finalization workflows.
///
/// Store-path errors are fatal to the request. Notification failures never
/// appear here — they are recovered and logged where they happen.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("missing required fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },
    #[error("no quote record matches the supplied id")]
    NotFound,
    #[error("the quote store did not respond within the deadline")]
    StoreTimeout,
    #[error("the quote store rejected the record: {0}")]
    Constraint(String),
    #[error("quote store failure: {0}")]
    Store(String),
}

impl WorkflowError {
    pub fn validation(fields: Vec<&'static str>) -> Self {
        Self::Validation { fields: fields.into_iter().map(str::to_string).collect() }
    }

    /// Short human-readable message, safe to expose to callers. Store
    /// failure detail stays in the server-side logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { fields } => {
                format!("Missing required fields: {}.", fields.join(", "))
            }
            Self::NotFound => "No quote request matches the supplied id.".to_string(),
            Self::StoreTimeout => {
                "The service is temporarily unavailable. Please retry shortly.".to_string()
            }
            Self::Constraint(_) => {
                "The request could not be processed. Check inputs and try again.".to_string()
            }
            Self::Store(_) => "An unexpected internal error occurred.".to_string(),
        }
    }
}
