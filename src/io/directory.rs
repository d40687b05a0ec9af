/*!
 * Directory Listing
 * Single-pass enumeration with lazily classified entries
 */

use std::cell::Cell;
use std::ffi::{OsStr, OsString};
use std::fs::{FileType, ReadDir};
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use super::sys::{Native, Platform};
use super::types::ErrorCode;
use crate::core::limits::{INITIAL_ENTRY_CAPACITY, MAX_DIRECTORY_ENTRIES};

/// One child of a listed directory
///
/// Each classification is `Some` once known, either from enumeration or
/// from a later filesystem query, and `None` until then.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    name: OsString,
    is_directory: Cell<Option<bool>>,
    is_symlink: Cell<Option<bool>>,
}

impl DirectoryEntry {
    /// Record what enumeration reported for free
    ///
    /// The reported type does not follow links, so a symlink leaves
    /// `is_directory` for a later follow-links query.
    fn new(name: OsString, file_type: Option<FileType>) -> Self {
        let (is_directory, is_symlink) = match file_type {
            Some(ft) if ft.is_symlink() => (None, Some(true)),
            Some(ft) => (Some(ft.is_dir()), Some(false)),
            None => (None, None),
        };

        Self {
            name,
            is_directory: Cell::new(is_directory),
            is_symlink: Cell::new(is_symlink),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Directory classification if already resolved
    #[inline]
    #[must_use]
    pub fn resolved_directory(&self) -> Option<bool> {
        self.is_directory.get()
    }

    /// Symlink classification if already resolved
    #[inline]
    #[must_use]
    pub fn resolved_symlink(&self) -> Option<bool> {
        self.is_symlink.get()
    }
}

/// Entries of one directory, in enumeration order
///
/// The listing is taken once by [`FileDirectory::new`]. Afterwards the
/// table never changes shape; only unresolved classifications get filled
/// in as they are asked for.
#[derive(Debug)]
pub struct FileDirectory {
    path: PathBuf,
    entries: Vec<DirectoryEntry>,
    error: ErrorCode,
}

impl FileDirectory {
    /// List `path`, skipping `.` and `..`
    ///
    /// If opening fails the listing is empty. If enumeration fails part way
    /// the entries read so far are kept. Either way [`FileDirectory::error`]
    /// reports the failure.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut entries = Vec::with_capacity(INITIAL_ENTRY_CAPACITY);

        let error = match Native::read_dir(&path) {
            Ok(iter) => Self::collect(&path, iter, &mut entries),
            Err(code) => code,
        };

        debug!(count = entries.len(), ?error, "listed directory");
        Self {
            path,
            entries,
            error,
        }
    }

    fn collect(path: &Path, iter: ReadDir, entries: &mut Vec<DirectoryEntry>) -> ErrorCode {
        for item in iter {
            let entry = match item {
                Ok(entry) => entry,
                Err(e) => return Native::log_error("read_dir", path, &e),
            };

            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }
            if entries.len() >= MAX_DIRECTORY_ENTRIES {
                warn!(path = %path.display(), "directory listing truncated");
                return ErrorCode::Bad;
            }
            entries.push(DirectoryEntry::new(name, entry.file_type().ok()));
        }
        ErrorCode::Good
    }

    /// Directory this listing was taken from
    #[inline]
    #[must_use]
    pub fn dir_path(&self) -> &Path {
        &self.path
    }

    /// Error from construction, `Good` if the listing is complete
    #[inline]
    #[must_use]
    pub fn error(&self) -> ErrorCode {
        self.error
    }

    #[inline]
    #[must_use]
    pub fn number_of_files(&self) -> usize {
        self.entries.len()
    }

    /// Current capacity of the entry table
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Name of entry `i`
    #[must_use]
    pub fn get_file(&self, i: usize) -> Option<&OsStr> {
        self.entries.get(i).map(DirectoryEntry::name)
    }

    #[must_use]
    pub fn entry(&self, i: usize) -> Option<&DirectoryEntry> {
        self.entries.get(i)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter()
    }

    /// Whether entry `i` is a directory, following symlinks
    ///
    /// Queries the filesystem at most once per entry once it succeeds.
    /// A failed query answers `false` and leaves the entry unresolved.
    pub fn is_directory(&self, i: usize) -> bool {
        let Some(entry) = self.entries.get(i) else {
            return false;
        };
        Self::resolve(&self.path, entry, &entry.is_directory, true, |md| md.is_dir())
    }

    /// Whether entry `i` is itself a symbolic link
    pub fn is_symlink(&self, i: usize) -> bool {
        let Some(entry) = self.entries.get(i) else {
            return false;
        };
        Self::resolve(&self.path, entry, &entry.is_symlink, false, |md| {
            md.file_type().is_symlink()
        })
    }

    fn resolve(
        dir: &Path,
        entry: &DirectoryEntry,
        flag: &Cell<Option<bool>>,
        follow: bool,
        classify: impl FnOnce(&std::fs::Metadata) -> bool,
    ) -> bool {
        if let Some(value) = flag.get() {
            return value;
        }

        let path = dir.join(&entry.name);
        match Native::stat(&path, follow) {
            Ok(md) => {
                let value = classify(&md);
                flag.set(Some(value));
                trace!(path = %path.display(), follow, value, "classified entry");
                value
            }
            Err(code) => {
                trace!(path = %path.display(), follow, ?code, "classification failed");
                false
            }
        }
    }
}

impl<'a> IntoIterator for &'a FileDirectory {
    type Item = &'a DirectoryEntry;
    type IntoIter = std::slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
