//! Per-field accessors derived from a definition.
//!
//! [`EnumAttr`] is the generic accessor bundle: it borrows a definition and
//! operates on the raw stored integer (`Option<i64>`, `None` = unset). The
//! derive macro emits named methods (`kind_key`, `is_apple`, ...) that forward
//! here, and hosts without a derive can use it directly against an
//! [`AttributeStore`].

use crate::definition::{EnumDefinition, EnumValue};
use crate::store::AttributeStore;

/// Accessor bundle for one enum field.
#[derive(Clone, Copy, Debug)]
pub struct EnumAttr<'d> {
    def: &'d EnumDefinition,
}

impl<'d> EnumAttr<'d> {
    #[inline]
    pub fn new(def: &'d EnumDefinition) -> Self {
        Self { def }
    }

    #[inline]
    pub fn definition(self) -> &'d EnumDefinition {
        self.def
    }

    /// Raw setter.
    ///
    /// Absent, empty or whitespace-only input leaves `stored` untouched,
    /// including when it is unset. Anything else is encoded, declared or not;
    /// validation catches undeclared values later.
    pub fn write(self, stored: &mut Option<i64>, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !is_blank(v)) {
            *stored = Some(self.def.encode(value));
        }
    }

    /// Raw getter: the decoded canonical value.
    #[inline]
    pub fn read(self, stored: Option<i64>) -> Option<&'d str> {
        self.entry(stored).map(EnumValue::value)
    }

    /// Normalized key of the decoded value.
    #[inline]
    pub fn key(self, stored: Option<i64>) -> Option<&'d str> {
        self.entry(stored).map(EnumValue::key)
    }

    /// Display text of the decoded value.
    #[inline]
    pub fn text(self, stored: Option<i64>) -> Option<&'d str> {
        self.entry(stored).map(EnumValue::text)
    }

    /// The stored integer, whether or not it decodes.
    #[inline]
    pub fn int(self, stored: Option<i64>) -> Option<i64> {
        stored
    }

    /// Whether the stored integer decodes to `value`.
    ///
    /// Compares normalized keys, so `is(stored, "Dell")` and
    /// `is(stored, "dell")` agree.
    pub fn is(self, stored: Option<i64>, value: &str) -> bool {
        self.key(stored)
            .is_some_and(|key| key == enumlogic_codec::normalize(value))
    }

    /// Evaluate a generated predicate by name.
    ///
    /// `None` if no canonical value has that predicate name.
    pub fn predicate(self, stored: Option<i64>, name: &str) -> Option<bool> {
        let target = self.def.entry_for_predicate(name)?;
        Some(self.key(stored) == Some(target.key()))
    }

    /// Every distinct predicate with its current answer, in declaration order.
    pub fn predicates(self, stored: Option<i64>) -> impl Iterator<Item = (&'d str, bool)> {
        let current = self.key(stored);
        self.def
            .predicate_entries()
            .map(move |entry| (entry.predicate(), current == Some(entry.key())))
    }

    fn entry(self, stored: Option<i64>) -> Option<&'d EnumValue> {
        let code = stored?;
        let entry = self.def.decode_entry(code);
        if entry.is_none() {
            tracing::trace!(field = self.def.field(), code, "stored code has no canonical value");
        }
        entry
    }

    /// Read the stored integer for this field from an attribute store.
    #[inline]
    pub fn load<S: AttributeStore + ?Sized>(self, store: &S) -> Option<i64> {
        store.read_attribute(self.def.field())
    }

    /// Raw setter against an attribute store.
    pub fn store<S: AttributeStore + ?Sized>(self, store: &mut S, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !is_blank(v)) {
            store.write_attribute(self.def.field(), self.def.encode(value));
        }
    }
}

/// Empty or whitespace-only.
#[inline]
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
