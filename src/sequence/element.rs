/*!
 * Data Element
 * A tag bound to an opaque value
 */

use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// One (tag, value) pair held by a sequence item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataElement<V> {
    pub tag: Tag,
    pub value: V,
}

impl<V> DataElement<V> {
    #[inline]
    pub const fn new(tag: Tag, value: V) -> Self {
        Self { tag, value }
    }
}
