use crate::application::response::Outcome;
use thiserror::Error;

/// Reasons the pay-employee use case refuses a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayEmployeeError {
    #[error("Illegal employee number!")]
    IllegalEmployeeNumber { id: u32 },
    #[error("Malformed employee number!")]
    MalformedEmployeeNumber { input: String },
}

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("No {0} callback registered")]
    CallbackNotRegistered(Outcome),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayrollError>;
