/*!
 * DICOM I/O Core
 * Platform-sensitive building blocks for reading DICOM file sets
 *
 * - [`io::FileHandle`]: one open file with sticky error and end-of-file state
 * - [`io::FileDirectory`]: single-pass directory listing with lazily
 *   classified entries
 * - [`sequence::SequenceItem`]: shared, copy-on-write list of tagged values
 *
 * File and directory failures are reported through one [`ErrorCode`]
 * taxonomy on every platform.
 */

pub mod core;
pub mod io;
pub mod monitoring;
pub mod sequence;

// Re-exports
pub use crate::core::{FileSize, UNKNOWN_SIZE};
pub use io::{DirectoryEntry, ErrorCode, FileDirectory, FileHandle, IoError, IoResult, Mode};
pub use monitoring::{init_tracing, try_init_tracing, TraceConfig};
pub use sequence::{DataElement, SequenceItem, Tag};
