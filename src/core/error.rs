use thiserror::Error;

/// Errors that can occur while building or evaluating an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoicerError {
    /// One or more form fields failed validation.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The service price is negative or not a finite number.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// The invoice could not be written out.
    #[error("render error: {0}")]
    Render(String),

    /// A remote lookup failed in a way that could not be recovered locally.
    #[cfg(feature = "gateway")]
    #[error(transparent)]
    Gateway(#[from] crate::gateway::GatewayError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Form field the error belongs to (e.g. "service_price").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
