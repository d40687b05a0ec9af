/*!
 * Sequence Module
 * Items of a structured-record sequence and the elements they hold
 */

pub mod element;
pub mod item;
pub mod tag;

// Re-exports
pub use element::DataElement;
pub use item::{DataElements, SequenceItem};
pub use tag::Tag;
