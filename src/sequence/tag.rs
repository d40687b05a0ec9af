/*!
 * Data Element Tag
 * (group, element) identifier of an attribute
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute tag, ordered by group then element
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    #[inline]
    #[must_use]
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Tag from its packed `0xGGGGEEEE` form
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            group: (value >> 16) as u16,
            element: value as u16,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.group as u32) << 16) | self.element as u32
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}
