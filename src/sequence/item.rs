/*!
 * Sequence Item
 * Reference-counted, copy-on-write list of data elements
 */

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::sync::Arc;

use super::element::DataElement;
use super::tag::Tag;

/// Forward traversal over the elements of an item, in insertion order
pub type DataElements<'a, V> = std::slice::Iter<'a, DataElement<V>>;

/// One item of a sequence: an ordered set of tagged values
///
/// Clones share one backing list and bump its reference count; the list
/// and its elements are dropped once, when the last item referencing it
/// goes away. Mutation is copy-on-write: [`SequenceItem::set_attribute_value`]
/// clones the list first if any other item still refers to it.
///
/// A default item holds no list at all, which is cheaper than an allocated
/// list with zero elements.
#[derive(Debug)]
pub struct SequenceItem<V> {
    list: Option<Arc<Vec<DataElement<V>>>>,
}

impl<V> SequenceItem<V> {
    /// Empty item, no allocation
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { list: None }
    }

    /// True if no list is referenced
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_none()
    }

    /// Release this item's reference and return to the empty state
    pub fn clear(&mut self) {
        self.list = None;
    }

    /// Borrow the value bound to `tag`
    #[must_use]
    pub fn attribute(&self, tag: Tag) -> Option<&V> {
        self.as_slice()
            .iter()
            .find(|e| e.tag == tag)
            .map(|element| &element.value)
    }

    #[inline]
    #[must_use]
    pub fn number_of_data_elements(&self) -> usize {
        self.as_slice().len()
    }

    /// Elements in insertion order
    ///
    /// Call again to restart; the range never outlives the item.
    #[inline]
    pub fn data(&self) -> DataElements<'_, V> {
        self.as_slice().iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[DataElement<V>] {
        match &self.list {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Number of items sharing the backing list, 0 when empty
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.list.as_ref().map_or(0, Arc::strong_count)
    }

    /// Whether both items reference the same backing list
    #[must_use]
    pub fn shares_list_with(&self, other: &Self) -> bool {
        match (&self.list, &other.list) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<V: Clone> SequenceItem<V> {
    /// Bind `value` to `tag`, replacing any previous value
    ///
    /// New tags are appended. Other items that shared the list keep the
    /// old contents.
    pub fn set_attribute_value(&mut self, tag: Tag, value: V) {
        let list = Arc::make_mut(self.list.get_or_insert_with(|| Arc::new(Vec::new())));
        match list.iter_mut().rev().find(|e| e.tag == tag) {
            Some(element) => element.value = value,
            None => list.push(DataElement::new(tag, value)),
        }
    }

    /// Copy of the value bound to `tag`
    #[must_use]
    pub fn get_attribute_value(&self, tag: Tag) -> Option<V> {
        self.attribute(tag).cloned()
    }
}

impl<V> Default for SequenceItem<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for SequenceItem<V> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if !self.shares_list_with(source) {
            self.list = source.list.clone();
        }
    }
}

impl<V: PartialEq> PartialEq for SequenceItem<V> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_list_with(other) || self.as_slice() == other.as_slice()
    }
}

impl<V: Eq> Eq for SequenceItem<V> {}

impl<V: Clone> FromIterator<(Tag, V)> for SequenceItem<V> {
    fn from_iter<I: IntoIterator<Item = (Tag, V)>>(iter: I) -> Self {
        let mut item = Self::new();
        for (tag, value) in iter {
            item.set_attribute_value(tag, value);
        }
        item
    }
}

impl<'a, V> IntoIterator for &'a SequenceItem<V> {
    type Item = &'a DataElement<V>;
    type IntoIter = DataElements<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data()
    }
}

impl<V: Serialize> Serialize for SequenceItem<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data())
    }
}

impl<'de, V: Deserialize<'de> + Clone> Deserialize<'de> for SequenceItem<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<DataElement<V>>::deserialize(deserializer)?;
        Ok(elements.into_iter().map(|e| (e.tag, e.value)).collect())
    }
}
