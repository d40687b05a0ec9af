/*!
 * I/O Errors
 * Error code plus the operation and path that produced it
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::code::ErrorCode;

/// I/O operation result
///
/// # Must Use
/// File operations can fail and must be handled to prevent data loss
#[must_use = "I/O operations can fail and must be handled"]
pub type IoResult<T> = Result<T, IoError>;

/// An [`ErrorCode`] with context describing what failed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {context}")]
pub struct IoError {
    code: ErrorCode,
    context: String,
}

impl IoError {
    pub fn new(code: ErrorCode, context: impl Into<String>) -> Self {
        Self {
            code,
            context: context.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}
