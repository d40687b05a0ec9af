/*!
 * Win32 Backend
 * GetLastError classification and attribute-based access checks
 */

use std::fs::{self, File};
use std::io;
use std::path::Path;

use windows_sys::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_DIRECTORY, ERROR_DISK_FULL, ERROR_DISK_QUOTA_EXCEEDED,
    ERROR_FILE_NOT_FOUND, ERROR_HANDLE_DISK_FULL, ERROR_PATH_NOT_FOUND,
};

use super::{kind_code, Platform};
use crate::io::types::{ErrorCode, Mode};

/// Windows implementation of [`Platform`]
#[derive(Debug, Clone, Copy)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    /// Classify a `GetLastError` value
    ///
    /// Win32 reports a missing file and a path whose prefix is not a
    /// directory with the same `ERROR_PATH_NOT_FOUND`, so both map to
    /// `FileNotFound` here. POSIX backends report the second case as
    /// `DirectoryNotFound` (`ENOTDIR`); this is the one place the tables differ.
    fn win32_code(code: u32) -> ErrorCode {
        match code {
            ERROR_ACCESS_DENIED => ErrorCode::AccessDenied,
            ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => ErrorCode::FileNotFound,
            ERROR_DIRECTORY => ErrorCode::DirectoryNotFound,
            ERROR_DISK_FULL | ERROR_HANDLE_DISK_FULL | ERROR_DISK_QUOTA_EXCEEDED => {
                ErrorCode::OutOfSpace
            }
            _ => ErrorCode::Bad,
        }
    }
}

impl Platform for WindowsPlatform {
    fn error_code(err: &io::Error) -> ErrorCode {
        match err.raw_os_error() {
            Some(raw) => Self::win32_code(raw as u32),
            None => kind_code(err.kind()),
        }
    }

    fn open(path: &Path, mode: Mode) -> Result<File, ErrorCode> {
        mode.options().open(path).map_err(|e| {
            let code = Self::log_error("open", path, &e);
            // CreateFileW refuses directories with ERROR_ACCESS_DENIED
            if code == ErrorCode::AccessDenied && path.is_dir() {
                ErrorCode::IsDirectory
            } else {
                code
            }
        })
    }

    fn access(path: &Path, mode: Mode) -> ErrorCode {
        match fs::metadata(path) {
            Err(e) => Self::error_code(&e),
            Ok(md) if md.is_dir() => ErrorCode::IsDirectory,
            Ok(md) => match mode {
                Mode::Out if md.permissions().readonly() => ErrorCode::AccessDenied,
                Mode::Out => ErrorCode::Good,
                Mode::In => match File::open(path) {
                    Ok(_) => ErrorCode::Good,
                    Err(e) => Self::error_code(&e),
                },
            },
        }
    }
}
