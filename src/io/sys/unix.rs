/*!
 * POSIX Backend
 * errno classification and access(2) checks
 */

use std::fs;
use std::io;
use std::path::Path;

use nix::errno::Errno;
use nix::unistd::{self, AccessFlags};

use super::{kind_code, Platform};
use crate::io::types::{ErrorCode, Mode};

/// Unix implementation of [`Platform`]
#[derive(Debug, Clone, Copy)]
pub struct UnixPlatform;

impl UnixPlatform {
    fn errno_code(errno: Errno) -> ErrorCode {
        match errno {
            Errno::EACCES | Errno::EPERM => ErrorCode::AccessDenied,
            Errno::EISDIR => ErrorCode::IsDirectory,
            Errno::ENOTDIR => ErrorCode::DirectoryNotFound,
            Errno::ENOENT => ErrorCode::FileNotFound,
            Errno::ENOSPC | Errno::EDQUOT => ErrorCode::OutOfSpace,
            _ => ErrorCode::Bad,
        }
    }
}

impl Platform for UnixPlatform {
    fn error_code(err: &io::Error) -> ErrorCode {
        match err.raw_os_error() {
            Some(raw) => Self::errno_code(Errno::from_raw(raw)),
            None => kind_code(err.kind()),
        }
    }

    fn access(path: &Path, mode: Mode) -> ErrorCode {
        match fs::metadata(path) {
            Err(e) => Self::error_code(&e),
            Ok(md) if md.is_dir() => ErrorCode::IsDirectory,
            Ok(_) => {
                let flags = match mode {
                    Mode::In => AccessFlags::R_OK,
                    Mode::Out => AccessFlags::W_OK,
                };
                match unistd::access(path, flags) {
                    Ok(()) => ErrorCode::Good,
                    Err(errno) => Self::errno_code(errno),
                }
            }
        }
    }
}
