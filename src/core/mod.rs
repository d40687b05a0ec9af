/*!
 * Core Module
 * Limits and sentinels shared across the crate
 */

pub mod limits;

// Re-export for convenience
pub use limits::{FileSize, INITIAL_ENTRY_CAPACITY, MAX_DIRECTORY_ENTRIES, UNKNOWN_SIZE};
