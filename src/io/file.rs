/*!
 * File Handle
 * Owns one open OS file with sticky error and end-of-file state
 */

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::sys::{Native, Platform};
use super::types::{ErrorCode, IoError, IoResult, Mode};
use crate::core::limits::{FileSize, UNKNOWN_SIZE};

/// Chunk size used by [`FileHandle::read_to_end`]
const READ_CHUNK: usize = 64 * 1024;

/// An open file, or a closed one carrying the error that closed it
///
/// Operations never panic on I/O failure. Counts and booleans report the
/// outcome; [`FileHandle::error`] keeps the most recent failure until a
/// later one replaces it. The OS handle is released exactly once, by
/// [`FileHandle::close`] or on drop.
#[derive(Debug)]
pub struct FileHandle {
    file: Option<File>,
    path: PathBuf,
    error: ErrorCode,
    eof: bool,
}

impl FileHandle {
    /// Open `path` in `mode`
    ///
    /// Always returns a handle. On failure the handle is closed and
    /// [`FileHandle::error`] tells why.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Self {
        let path = path.as_ref().to_path_buf();
        let (file, error) = match Native::open(&path, mode) {
            Ok(file) => {
                debug!(path = %path.display(), %mode, "opened file");
                (Some(file), ErrorCode::Good)
            }
            Err(code) => (None, code),
        };

        Self {
            file,
            path,
            error,
            eof: false,
        }
    }

    /// Open `path` in `mode`, returning the failure as an [`IoError`]
    pub fn try_open(path: impl AsRef<Path>, mode: Mode) -> IoResult<Self> {
        let handle = Self::open(path, mode);
        if handle.is_open() {
            Ok(handle)
        } else {
            Err(IoError::new(
                handle.error,
                format!("open {} ({})", handle.path.display(), mode),
            ))
        }
    }

    /// Release the OS handle if one is held
    ///
    /// The error code is left untouched.
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            debug!(path = %self.path.display(), "closed file");
        }
    }

    /// Read up to `buf.len()` bytes at the current position
    ///
    /// Returns 0 at end-of-file and on error; check [`FileHandle::end_of_file`]
    /// and [`FileHandle::error`] to tell them apart.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            self.error = ErrorCode::Bad;
            return 0;
        };

        let mut total = 0;
        while total < buf.len() {
            match Native::read(file, &mut buf[total..]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Native::log_error("read", &self.path, &e);
                    return 0;
                }
            }
        }
        trace!(path = %self.path.display(), requested = buf.len(), read = total, "read");
        total
    }

    /// Append the rest of the file to `out`, returning the number of bytes added
    ///
    /// On error the bytes read so far stay in `out` and the error is recorded.
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> usize {
        let start = out.len();
        let mut chunk = vec![0u8; READ_CHUNK];
        while !self.eof {
            let n = self.read(&mut chunk);
            if n == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..n]);
        }
        out.len() - start
    }

    /// Write up to `buf.len()` bytes at the current position
    ///
    /// A count smaller than `buf.len()` means the write failed part way and
    /// the error code is set.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            self.error = ErrorCode::Bad;
            return 0;
        };

        let mut total = 0;
        while total < buf.len() {
            match Native::write(file, &buf[total..]) {
                Ok(0) => {
                    self.error = ErrorCode::Bad;
                    break;
                }
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Native::log_error("write", &self.path, &e);
                    break;
                }
            }
        }
        trace!(path = %self.path.display(), requested = buf.len(), written = total, "write");
        total
    }

    /// Seek to `offset` bytes from the start of the file
    pub fn set_position(&mut self, offset: FileSize) -> bool {
        let Some(file) = self.file.as_mut() else {
            self.error = ErrorCode::Bad;
            return false;
        };

        match Native::seek(file, offset) {
            Ok(()) => {
                self.eof = false;
                true
            }
            Err(code) => {
                debug!(path = %self.path.display(), offset, ?code, "seek failed");
                self.error = code;
                false
            }
        }
    }

    /// Total file size, or [`UNKNOWN_SIZE`] on error
    pub fn size(&mut self) -> FileSize {
        let Some(file) = self.file.as_ref() else {
            self.error = ErrorCode::Bad;
            return UNKNOWN_SIZE;
        };

        match Native::size(file) {
            Ok(size) => size,
            Err(code) => {
                self.error = code;
                UNKNOWN_SIZE
            }
        }
    }

    /// Most recent error, `Good` if nothing has failed
    #[inline]
    #[must_use]
    pub fn error(&self) -> ErrorCode {
        self.error
    }

    /// Whether a read has reached the end of the file
    #[inline]
    #[must_use]
    pub fn end_of_file(&self) -> bool {
        self.eof
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether `path` is an ordinary file usable in `mode`
    pub fn access(path: impl AsRef<Path>, mode: Mode) -> ErrorCode {
        let path = path.as_ref();
        let code = Native::access(path, mode);
        trace!(path = %path.display(), %mode, ?code, "access");
        code
    }

    /// Delete `path`
    ///
    /// A file still open elsewhere is unlinked now and reclaimed when its
    /// last handle closes, where the platform allows that.
    pub fn remove(path: impl AsRef<Path>) -> ErrorCode {
        let path = path.as_ref();
        let code = Native::remove(path);
        if code.is_good() {
            debug!(path = %path.display(), "removed file");
        }
        code
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        self.close();
    }
}
