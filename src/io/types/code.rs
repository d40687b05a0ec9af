/*!
 * I/O Error Codes
 * Platform-neutral error taxonomy shared by files and directories
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::errors::{IoError, IoResult};

/// Error code reported by file and directory operations
///
/// `Good` is zero, so callers that only need a boolean outcome can test
/// `as_raw() != 0`. Every platform backend maps its native codes onto
/// these values identically.
#[repr(i32)]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    #[default]
    #[error("no error")]
    Good = 0,

    #[error("unspecified error")]
    Bad = 1,

    #[error("access denied")]
    AccessDenied = 2,

    #[error("is a directory")]
    IsDirectory = 3,

    #[error("directory not found")]
    DirectoryNotFound = 4,

    #[error("file not found")]
    FileNotFound = 5,

    #[error("out of space")]
    OutOfSpace = 6,
}

impl ErrorCode {
    /// Numeric value, zero for success
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Inverse of [`ErrorCode::as_raw`]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Good),
            1 => Some(Self::Bad),
            2 => Some(Self::AccessDenied),
            3 => Some(Self::IsDirectory),
            4 => Some(Self::DirectoryNotFound),
            5 => Some(Self::FileNotFound),
            6 => Some(Self::OutOfSpace),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }

    /// `Ok(())` for `Good`, otherwise an [`IoError`] carrying `context`
    pub fn into_result(self, context: impl Into<String>) -> IoResult<()> {
        if self.is_good() {
            Ok(())
        } else {
            Err(IoError::new(self, context))
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_raw()
    }
}
