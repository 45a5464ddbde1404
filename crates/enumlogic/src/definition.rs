//! Enum definitions: the canonical value set plus its codec maps.
//!
//! An [`EnumDefinition`] is built once per declared field and never mutated.
//! Everything an accessor or validator needs is computed up front:
//!
//! - Canonical values in declaration order, each with its display text,
//!   normalized key, predicate name and code
//! - Reverse map code → value (last-write-wins on collision)
//! - Options map display text → value, for selection widgets
//!
//! # Collisions
//!
//! Codes are `crc32(value) / denominator`, so two distinct values can share a
//! code. Under [`CollisionPolicy::Overwrite`] the later value owns the code and
//! the earlier one can no longer be decoded; under [`CollisionPolicy::Reject`]
//! the declaration fails. [`EnumDefinition::collisions`] lists them either way.

use enumlogic_codec::{constant_name, normalize, Codec, Denominator};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::accessor::EnumAttr;
use crate::validation::Inclusion;
use crate::{CollisionPolicy, DefineError, EnumOptions, EnumValues};

/// One canonical value and everything derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumValue {
    value: String,
    text: String,
    key: String,
    predicate: String,
    code: i64,
}

impl EnumValue {
    /// The declared symbolic value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Human-readable label.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized key (`"Hewlett-Packard"` → `"hewlett_packard"`).
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Predicate name: the key, suffixed with `_<field>` when namespaced.
    #[inline]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Integer this value encodes to.
    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }
}

/// Two declared values sharing a code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Collision {
    pub code: i64,
    /// Declared first; no longer decodable.
    pub earlier: String,
    /// Declared later; owns the code.
    pub later: String,
}

/// Immutable definition of one enum field.
#[derive(Clone, Debug)]
pub struct EnumDefinition {
    field: String,
    constant: String,
    values: Vec<EnumValue>,
    by_value: FxHashMap<String, usize>,
    by_code: FxHashMap<i64, usize>,
    by_predicate: FxHashMap<String, usize>,
    options: IndexMap<String, String>,
    codec: Codec,
    namespace: bool,
    allow_nil: bool,
    allow_blank: bool,
    message: Option<String>,
    collisions: CollisionPolicy,
}

impl EnumDefinition {
    /// Canonicalize a declared value set into a definition.
    ///
    /// Calling this twice for the same field yields two independent
    /// definitions; binding them to an owner is the registry's job.
    #[tracing::instrument(level = "debug", skip_all, fields(field = %field))]
    pub fn define(
        field: &str,
        values: impl Into<EnumValues>,
        options: EnumOptions,
    ) -> Result<Self, DefineError> {
        let denominator =
            Denominator::new(options.denominator).ok_or_else(|| DefineError::ZeroDenominator {
                field: field.to_owned(),
            })?;
        let codec = Codec::new(denominator);

        let entries = values.into().into_entries();
        let mut list: Vec<EnumValue> = Vec::with_capacity(entries.len());
        let mut by_value = FxHashMap::default();
        let mut by_code = FxHashMap::default();
        let mut by_predicate = FxHashMap::default();

        for (value, text) in entries {
            if by_value.contains_key(&value) {
                return Err(DefineError::DuplicateValue {
                    field: field.to_owned(),
                    value,
                });
            }

            let key = normalize(&value);
            let predicate = if options.namespace {
                format!("{key}_{field}")
            } else {
                key.clone()
            };
            let code = codec.encode(&value);
            let index = list.len();
            if let Some(prev) = by_code.insert(code, index) {
                let earlier = &list[prev].value;
                match options.collisions {
                    CollisionPolicy::Reject => {
                        return Err(DefineError::Collision {
                            field: field.to_owned(),
                            first: earlier.clone(),
                            second: value,
                            code,
                            denominator: denominator.get(),
                        });
                    }
                    CollisionPolicy::Overwrite => {
                        tracing::warn!(
                            code,
                            earlier = %earlier,
                            later = %value,
                            "enum values collide; the earlier value is no longer decodable"
                        );
                    }
                }
            }

            by_value.insert(value.clone(), index);
            // Values sharing a key share the first value's predicate.
            by_predicate.entry(predicate.clone()).or_insert(index);
            list.push(EnumValue {
                value,
                text,
                key,
                predicate,
                code,
            });
        }

        let mut options_map = IndexMap::with_capacity(list.len());
        for entry in &list {
            options_map.insert(entry.text.clone(), entry.value.clone());
        }

        let constant = options.constant.unwrap_or_else(|| constant_name(field));
        tracing::debug!(
            values = list.len(),
            denominator = denominator.get(),
            constant = %constant,
            "enum defined"
        );

        Ok(Self {
            field: field.to_owned(),
            constant,
            values: list,
            by_value,
            by_code,
            by_predicate,
            options: options_map,
            codec,
            namespace: options.namespace,
            allow_nil: options.allow_nil,
            allow_blank: options.allow_blank,
            message: options.message,
            collisions: options.collisions,
        })
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Name of the constant exposing the canonical values (`KINDS`).
    #[inline]
    pub fn constant_name(&self) -> &str {
        &self.constant
    }

    /// Canonical values in declaration order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.values.iter().map(EnumValue::value)
    }

    /// Canonical values with their derived data, in declaration order.
    #[inline]
    pub fn entries(&self) -> &[EnumValue] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn codec(&self) -> Codec {
        self.codec
    }

    #[inline]
    pub fn denominator(&self) -> Denominator {
        self.codec.denominator()
    }

    /// Encode any value, declared or not.
    #[inline]
    pub fn encode(&self, value: &str) -> i64 {
        self.codec.encode(value)
    }

    /// Decode a stored integer. `None` for codes no canonical value owns.
    #[inline]
    pub fn decode(&self, code: i64) -> Option<&str> {
        self.decode_entry(code).map(EnumValue::value)
    }

    pub fn decode_entry(&self, code: i64) -> Option<&EnumValue> {
        self.by_code.get(&code).map(|&i| &self.values[i])
    }

    /// Look up a canonical value.
    pub fn entry(&self, value: &str) -> Option<&EnumValue> {
        self.by_value.get(value).map(|&i| &self.values[i])
    }

    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Display text for a canonical value.
    pub fn display_text(&self, value: &str) -> Option<&str> {
        self.entry(value).map(EnumValue::text)
    }

    /// Look up a canonical value by its predicate name.
    ///
    /// When several values normalize to the same key, this is the first of
    /// them; the predicate holds for all of them.
    pub fn entry_for_predicate(&self, predicate: &str) -> Option<&EnumValue> {
        self.by_predicate.get(predicate).map(|&i| &self.values[i])
    }

    /// The first value declared for each distinct predicate, in declaration order.
    pub fn predicate_entries(&self) -> impl Iterator<Item = &EnumValue> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(index, entry)| self.by_predicate.get(entry.predicate()) == Some(index))
            .map(|(_, entry)| entry)
    }

    /// Distinct predicate names in declaration order.
    pub fn predicate_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.predicate_entries().map(EnumValue::predicate)
    }

    /// Display text → canonical value, in declaration order.
    ///
    /// If two values share a display text, the later value wins and keeps the
    /// earlier entry's position.
    #[inline]
    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    /// Every pair of declared values that share a code.
    ///
    /// Each collision pairs a value with the most recent earlier value of the
    /// same code, so a three-way collision reports two pairs.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut last_seen: FxHashMap<i64, usize> = FxHashMap::default();
        let mut found = Vec::new();
        for (index, entry) in self.values.iter().enumerate() {
            if let Some(prev) = last_seen.insert(entry.code, index) {
                found.push(Collision {
                    code: entry.code,
                    earlier: self.values[prev].value.clone(),
                    later: entry.value.clone(),
                });
            }
        }
        found
    }

    #[inline]
    pub fn namespace(&self) -> bool {
        self.namespace
    }

    #[inline]
    pub fn allow_nil(&self) -> bool {
        self.allow_nil
    }

    #[inline]
    pub fn allow_blank(&self) -> bool {
        self.allow_blank
    }

    /// Custom validation message, if one was declared.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collisions
    }

    /// Accessor bundle bound to this definition.
    #[inline]
    pub fn attr(&self) -> EnumAttr<'_> {
        EnumAttr::new(self)
    }

    /// Inclusion constraint bound to this definition.
    #[inline]
    pub fn inclusion(&self) -> Inclusion<'_> {
        Inclusion::new(self)
    }
}
