//! Attribute storage seam.
//!
//! The persistence layer owns the raw integers; enum accessors only need to
//! read and write one integer per field. [`MemoryStore`] is the in-process
//! implementation used for dynamic records and tests.

use rustc_hash::FxHashMap;

/// Read/write access to the raw stored integer of each field.
pub trait AttributeStore {
    /// The stored integer, or `None` if the field is unset.
    fn read_attribute(&self, field: &str) -> Option<i64>;

    fn write_attribute(&mut self, field: &str, value: i64);
}

impl<S: AttributeStore + ?Sized> AttributeStore for &mut S {
    fn read_attribute(&self, field: &str) -> Option<i64> {
        (**self).read_attribute(field)
    }

    fn write_attribute(&mut self, field: &str, value: i64) {
        (**self).write_attribute(field, value);
    }
}

/// Attribute store backed by a hash map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    attributes: FxHashMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with pre-existing raw integers, e.g. rows loaded from a table.
    #[must_use]
    pub fn with(mut self, field: &str, value: i64) -> Self {
        self.write_attribute(field, value);
        self
    }

    /// Unset a field.
    pub fn remove(&mut self, field: &str) -> Option<i64> {
        self.attributes.remove(field)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeStore for MemoryStore {
    fn read_attribute(&self, field: &str) -> Option<i64> {
        self.attributes.get(field).copied()
    }

    fn write_attribute(&mut self, field: &str, value: i64) {
        self.attributes.insert(field.to_owned(), value);
    }
}
