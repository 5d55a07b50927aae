use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown repayment type: {0}")]
    UnknownRepaymentType(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoanError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
