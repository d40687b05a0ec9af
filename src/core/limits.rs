/*!
 * Limits and Constants
 *
 * Centralized location for sizes, sentinels and thresholds shared by the
 * file, directory and sequence primitives.
 */

// =============================================================================
// FILE LIMITS
// =============================================================================

/// File length / offset quantity
pub type FileSize = u64;

/// Returned by size queries that fail
///
/// No platform allows a file of this length, so it never collides with a
/// real size.
pub const UNKNOWN_SIZE: FileSize = FileSize::MAX;

// =============================================================================
// DIRECTORY LIMITS
// =============================================================================

/// Entry table capacity reserved before the first entry is inserted
/// [PERF] Small directories never reallocate
pub const INITIAL_ENTRY_CAPACITY: usize = 4;

/// Largest number of entries a single listing will hold (2^31 - 1)
pub const MAX_DIRECTORY_ENTRIES: usize = i32::MAX as usize;
