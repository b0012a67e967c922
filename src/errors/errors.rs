use std::fmt::Display;

use thiserror::Error;

/// Outcome of a parse, as seen by callers that only need the verdict.
///
/// `Eof` means the whole input was consumed as a program; `Bad` means
/// parsing stopped at the first token that could not continue it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Eof,
    Bad,
}

impl<T> From<&Result<T, Error>> for ErrorKind {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => ErrorKind::Eof,
            Err(error) => error.kind(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at byte {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
    span: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize, span: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
            span,
        }
    }

    /// Byte offset of the offending token.
    pub fn get_position(&self) -> usize {
        self.position
    }

    /// Byte length of the offending token.
    pub fn get_span(&self) -> usize {
        self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Bad
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::BreakOutsideLoop => "BreakOutsideLoop",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::ArenaExhausted { .. } => "ArenaExhausted",
            ErrorImpl::AllocationFailed { .. } => "AllocationFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::BreakOutsideLoop => {
                ErrorTip::Suggestion(String::from("`break` is only allowed inside a `while` body"))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, try splitting the expression",
                limit
            )),
            ErrorImpl::ArenaExhausted { capacity } => ErrorTip::Suggestion(format!(
                "The node arena holds {} nodes, allocate a larger one",
                capacity
            )),
            ErrorImpl::AllocationFailed { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("break outside of a loop")]
    BreakOutsideLoop,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("node arena full at {capacity} nodes")]
    ArenaExhausted { capacity: usize },
    #[error("cannot allocate an arena of {capacity} nodes")]
    AllocationFailed { capacity: usize },
}
