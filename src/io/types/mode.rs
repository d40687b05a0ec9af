/*!
 * File Mode
 * Whether a file is opened for input or output
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;

/// File open mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Read an existing file
    In,
    /// Create or truncate a file for writing
    Out,
}

impl Mode {
    /// Open options matching this mode
    pub(crate) fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            Mode::In => {
                options.read(true);
            }
            Mode::Out => {
                options.write(true).create(true).truncate(true);
            }
        }
        options
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::In => write!(f, "in"),
            Mode::Out => write!(f, "out"),
        }
    }
}
