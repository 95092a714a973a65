use thiserror::Error;

/// The validation rule a malformed line violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("malformed record shape: expected {expected} fields, found {found}")]
    Shape { expected: usize, found: usize },

    #[error("required field '{field}' is blank")]
    BlankField { field: &'static str },

    #[error("invalid CNP '{value}'")]
    IdentityFormat { value: String },

    #[error("unknown function '{token}'")]
    UnknownFunction { token: String },

    #[error("field '{field}' is not a valid number: '{value}'")]
    NumericFormat { field: &'static str, value: String },
}

/// A single line that could not be turned into an employee
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_index}: {kind}")]
pub struct ParseError {
    pub line_index: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_index: usize, kind: ParseErrorKind) -> Self {
        Self { line_index, kind }
    }
}

/// Errors that can occur while loading or writing a roster
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid employee record: {0}")]
    Parse(#[from] ParseError),

    #[error("line {line_index}: not valid UTF-8")]
    Encoding { line_index: usize },
}

pub type Result<T> = std::result::Result<T, RosterError>;
