//! Integer codec and naming rules for enumlogic.
//!
//! This crate is the leaf of the workspace. It holds the pure functions that
//! every other layer agrees on:
//!
//! - [`hash32`] / [`Codec`]: symbolic value → compact integer
//! - [`normalize`]: symbolic value → predicate/key token
//! - [`constant_name`]: field name → default constant name (`kind` → `KINDS`)
//!
//! Nothing here allocates shared state or depends on declaration order, so the
//! proc-macro crate can run the same rules at expansion time that the runtime
//! definition engine runs at declaration time.
//!
//! # Encoding
//!
//! ```text
//! encode(value) = crc32(value.as_bytes()) / denominator
//! ```
//!
//! With the default denominator (100 000) codes fall in `0..=42949`.

mod codec;
mod naming;

pub use codec::{hash32, int_for, Codec, Denominator, DEFAULT_DENOMINATOR};
pub use naming::{constant_name, normalize, pluralize};
