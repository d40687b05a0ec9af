/*!
 * I/O Types
 * Shared types for file and directory operations
 */

mod code;
mod errors;
mod mode;

pub use code::ErrorCode;
pub use errors::{IoError, IoResult};
pub use mode::Mode;
