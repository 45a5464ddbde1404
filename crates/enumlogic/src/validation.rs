//! Inclusion constraint and field-scoped error collection.
//!
//! The constraint runs on the *decoded* value, after the raw getter: a stored
//! integer that no canonical value owns decodes to `None` and is judged like an
//! unset field.

use indexmap::IndexMap;
use std::fmt;

use crate::accessor::is_blank;
use crate::definition::EnumDefinition;

/// Message attached when no custom message was declared.
pub const DEFAULT_MESSAGE: &str = "is not included in the list";

/// Inclusion constraint bound to a definition.
#[derive(Clone, Copy, Debug)]
pub struct Inclusion<'d> {
    def: &'d EnumDefinition,
}

impl<'d> Inclusion<'d> {
    #[inline]
    pub fn new(def: &'d EnumDefinition) -> Self {
        Self { def }
    }

    /// The allowed set, in declaration order.
    pub fn allowed(self) -> impl ExactSizeIterator<Item = &'d str> {
        self.def.values()
    }

    /// Failure message for this field.
    #[inline]
    pub fn message(self) -> &'d str {
        self.def.message().unwrap_or(DEFAULT_MESSAGE)
    }

    /// Check a decoded value.
    ///
    /// `None` passes only with `allow_nil` or `allow_blank`; a blank value
    /// passes with `allow_blank`; otherwise the value must be canonical.
    pub fn check(self, decoded: Option<&str>) -> Result<(), &'d str> {
        let ok = match decoded {
            None => self.def.allow_nil() || self.def.allow_blank(),
            Some(value) => (self.def.allow_blank() && is_blank(value)) || self.def.contains(value),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    /// Decode `stored`, then check it.
    #[inline]
    pub fn check_stored(self, stored: Option<i64>) -> Result<(), &'d str> {
        self.check(self.def.attr().read(stored))
    }

    /// Check `stored` and record a failure under the field's name.
    pub fn validate(self, stored: Option<i64>, errors: &mut ValidationErrors) {
        if let Err(message) = self.check_stored(stored) {
            tracing::debug!(field = self.def.field(), ?stored, "enum inclusion failed");
            errors.add(self.def.field(), message);
        }
    }
}

/// Validation messages grouped by field, in the order fields first failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    by_field: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.by_field
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for `field`; empty if it passed.
    pub fn get(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.by_field.contains_key(field)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Total number of messages.
    pub fn len(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.by_field.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_field
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Messages prefixed with the humanized field name
    /// (`"Kind is not included in the list"`).
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                let name = humanize(field);
                messages.iter().map(move |m| format!("{name} {m}"))
            })
            .collect()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.by_field {
            self.by_field.entry(field).or_default().extend(messages);
        }
    }

    pub fn clear(&mut self) {
        self.by_field.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.full_messages().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

/// `order_status` → `Order status`.
fn humanize(field: &str) -> String {
    let spaced = field.trim_end_matches("_id").replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A value that can run its enum constraints.
///
/// Implemented by `#[derive(Enumlogic)]`; hosts with hand-written models
/// implement `validate_into` and get the rest.
pub trait Validate {
    fn validate_into(&self, errors: &mut ValidationErrors);

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.validate_into(&mut errors);
        errors
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
