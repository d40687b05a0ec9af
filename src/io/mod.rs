/*!
 * I/O Module
 * Portable file handles and directory listings over a per-OS platform layer
 */

pub mod directory;
pub mod file;
pub mod sys;
pub mod types;

// Re-exports
pub use directory::{DirectoryEntry, FileDirectory};
pub use file::FileHandle;
pub use sys::{Native, Platform};
pub use types::{ErrorCode, IoError, IoResult, Mode};
