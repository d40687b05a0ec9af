/*!
 * Platform Layer
 * One trait over the OS calls the file and directory primitives need
 *
 * Each target supplies an implementation whose `error_code` table maps
 * native errors onto [`ErrorCode`]. Everything else has a default built on
 * `std::fs`, overridden only where a platform needs different behavior.
 */

use std::fs::{self, File, Metadata, ReadDir};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::types::{ErrorCode, Mode};
use crate::core::limits::FileSize;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixPlatform as Native;
#[cfg(windows)]
pub use windows::WindowsPlatform as Native;
#[cfg(not(any(unix, windows)))]
pub use self::GenericPlatform as Native;

/// Platform-neutral OS interface
///
/// All operations are single, bounded OS calls. Failures come back as an
/// [`ErrorCode`]; the native error itself is only logged.
pub trait Platform {
    /// Map a native error onto the shared taxonomy
    fn error_code(err: &io::Error) -> ErrorCode;

    /// Open `path` for reading (`In`) or create/truncate it for writing (`Out`)
    fn open(path: &Path, mode: Mode) -> Result<File, ErrorCode> {
        let file = mode
            .options()
            .open(path)
            .map_err(|e| Self::log_error("open", path, &e))?;

        // Opening a directory read-only succeeds on some platforms
        if mode == Mode::In {
            let md = file
                .metadata()
                .map_err(|e| Self::log_error("open", path, &e))?;
            if md.is_dir() {
                return Err(ErrorCode::IsDirectory);
            }
        }
        Ok(file)
    }

    /// One read at the current position
    fn read(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
        file.read(buf)
    }

    /// One write at the current position
    fn write(file: &mut File, buf: &[u8]) -> io::Result<usize> {
        file.write(buf)
    }

    /// Absolute seek from the start of the file
    fn seek(file: &mut File, offset: FileSize) -> Result<(), ErrorCode> {
        file.seek(SeekFrom::Start(offset))
            .map(|_| ())
            .map_err(|e| Self::error_code(&e))
    }

    /// Current length of an open file
    fn size(file: &File) -> Result<FileSize, ErrorCode> {
        file.metadata()
            .map(|md| md.len())
            .map_err(|e| Self::error_code(&e))
    }

    /// Delete a file, returning `Good` or the failure code
    fn remove(path: &Path) -> ErrorCode {
        match fs::remove_file(path) {
            Ok(()) => ErrorCode::Good,
            Err(e) => {
                let code = Self::log_error("remove", path, &e);
                unlink_code(code, || is_dir(path))
            }
        }
    }

    /// Check that `path` is an ordinary file usable in `mode`
    fn access(path: &Path, mode: Mode) -> ErrorCode;

    /// File status, following symlinks when `follow` is set
    fn stat(path: &Path, follow: bool) -> Result<Metadata, ErrorCode> {
        let md = if follow {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        };
        md.map_err(|e| Self::error_code(&e))
    }

    /// Open a directory for enumeration
    fn read_dir(path: &Path) -> Result<ReadDir, ErrorCode> {
        fs::read_dir(path).map_err(|e| Self::log_error("read_dir", path, &e))
    }

    /// Classify `err` and record it at debug level
    fn log_error(op: &'static str, path: &Path, err: &io::Error) -> ErrorCode {
        let code = Self::error_code(err);
        tracing::debug!(op, path = %path.display(), error = %err, ?code, "I/O operation failed");
        code
    }
}

/// Mapping for errors that carry no native code
pub(crate) fn kind_code(kind: ErrorKind) -> ErrorCode {
    match kind {
        ErrorKind::NotFound => ErrorCode::FileNotFound,
        ErrorKind::PermissionDenied => ErrorCode::AccessDenied,
        _ => ErrorCode::Bad,
    }
}

/// Failure code for an unlink, given how to tell whether the target is a directory
///
/// Some platforms report unlinking a directory as a permission error. Only
/// that code is rewritten; `Bad` (read-only filesystem, busy mount) stays.
pub(crate) fn unlink_code(code: ErrorCode, is_directory: impl FnOnce() -> bool) -> ErrorCode {
    if code == ErrorCode::AccessDenied && is_directory() {
        ErrorCode::IsDirectory
    } else {
        code
    }
}

fn is_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|md| md.is_dir())
        .unwrap_or(false)
}

/// Fallback for targets without a native table
#[cfg(not(any(unix, windows)))]
pub struct GenericPlatform;

#[cfg(not(any(unix, windows)))]
impl Platform for GenericPlatform {
    fn error_code(err: &io::Error) -> ErrorCode {
        kind_code(err.kind())
    }

    fn access(path: &Path, mode: Mode) -> ErrorCode {
        match fs::metadata(path) {
            Err(e) => Self::error_code(&e),
            Ok(md) if md.is_dir() => ErrorCode::IsDirectory,
            Ok(md) if mode == Mode::Out && md.permissions().readonly() => ErrorCode::AccessDenied,
            Ok(_) => ErrorCode::Good,
        }
    }
}
