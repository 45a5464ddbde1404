//! Type-level enum surface implemented by `#[derive(Enumlogic)]`.

use crate::definition::EnumDefinition;

/// A type with enum fields.
pub trait EnumModel {
    /// Enum fields in declaration order.
    const ENUM_FIELDS: &'static [&'static str];

    /// Definition backing `field`, built on first use.
    fn enum_definition(field: &str) -> Option<&'static EnumDefinition>;

    /// Whether `field` is declared as an enum on this type.
    fn is_enum(field: &str) -> bool {
        Self::ENUM_FIELDS.contains(&field)
    }

    /// Encode a value with the default denominator, independent of any field.
    ///
    /// Fields declared with their own `denominator` store different codes; use
    /// the generated `<field>_value` for those.
    fn enum_int_for(value: &str) -> i64 {
        enumlogic_codec::int_for(value)
    }
}
