//! Procedural macros for enumlogic.
//!
//! # Enumlogic Derive
//!
//! Each `Option<i64>` field marked `#[enumlogic(...)]` becomes a symbolic
//! enum stored as its integer code:
//!
//! ```text
//! #[derive(Enumlogic, Default)]
//! pub struct Computer {
//!     #[enumlogic(labels("apple" = "Apple", "dell" = "Dell", "hp" = "HP"), namespace)]
//!     kind: Option<i64>,
//! }
//! ```
//!
//! generates on `Computer`:
//!
//! - `KINDS`: the canonical values, in declaration order
//! - `kind_definition()`, `kind_options()`, `kind_value(v)`
//! - `kind()`, `set_kind(v)`, `kind_key()`, `kind_text()`, `kind_int()`
//! - `is_apple_kind()`, `is_dell_kind()`, `is_hp_kind()`
//! - `impl EnumModel` and `impl Validate`
//!
//! Declarations that can never work (duplicate values, zero denominator,
//! clashing generated names, rejected collisions) fail to compile.

mod attr;
mod derive;
mod utils;

use proc_macro::TokenStream;

/// Derive enum accessors, validation and options for integer-backed fields.
///
/// # Field attribute
///
/// `#[enumlogic(...)]` on an `Option<i64>` field. Exactly one of:
/// - `values("a", "b", ...)` - each value is its own display text
/// - `labels("a" = "Text A", ...)` - value → display text
///
/// Optional:
/// - `denominator = N` - hash divisor (default 100000)
/// - `constant = "NAME"` - constant name (default: pluralized, uppercased field)
/// - `namespace` - suffix predicates with the field name
/// - `message = "..."` - validation message
/// - `allow_nil`, `allow_blank` - accept an unset/undecodable field
/// - `reject_collisions` - fail to compile if two values share a code
#[proc_macro_derive(Enumlogic, attributes(enumlogic))]
pub fn derive_enumlogic(input: TokenStream) -> TokenStream {
    derive::derive_enumlogic(input)
}
