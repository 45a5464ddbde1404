//! Symbolic enum fields persisted as compact integers.
//!
//! A field is declared with an ordered value set; the value stored is
//! `crc32(value) / denominator`. From one [`EnumDefinition`] this crate derives:
//!
//! - The codec: [`EnumDefinition::encode`] / [`EnumDefinition::decode`]
//! - Accessors: [`EnumAttr`] (raw getter/setter, key, text, int, predicates)
//! - The inclusion constraint: [`Inclusion`], reported through [`ValidationErrors`]
//! - The options map for selection widgets: [`EnumDefinition::options`]
//!
//! # Declaring
//!
//! With the derive (default `derive` feature):
//!
//! ```text
//! #[derive(Enumlogic, Default)]
//! struct Computer {
//!     #[enumlogic(labels("apple" = "Apple", "dell" = "Dell", "hp" = "HP"))]
//!     kind: Option<i64>,
//! }
//!
//! let mut c = Computer::default();
//! c.set_kind("dell");
//! assert!(c.is_dell());
//! assert_eq!(c.kind_text(), Some("Dell"));
//! ```
//!
//! Without it, through a registry keyed by `(owner, field)`:
//!
//! ```
//! use enumlogic::{EnumOptions, EnumRegistry, MemoryStore};
//!
//! let mut registry = EnumRegistry::new();
//! let kind = registry
//!     .declare("Computer", "kind", ["apple", "dell", "hp"], EnumOptions::new())
//!     .unwrap();
//!
//! let mut row = MemoryStore::new();
//! kind.attr().store(&mut row, Some("hp"));
//! assert_eq!(kind.attr().key(kind.attr().load(&row)), Some("hp"));
//! assert!(registry.validate_store("Computer", &row).is_empty());
//! ```
//!
//! # Logging
//!
//! Definitions log at `debug` when built and `warn` when two values collide.
//! Call [`init_tracing`] (or install your own subscriber) and set `RUST_LOG`.

mod accessor;
mod definition;
mod error;
mod model;
mod options;
mod registry;
mod store;
mod validation;
mod values;

pub use accessor::EnumAttr;
pub use definition::{Collision, EnumDefinition, EnumValue};
pub use error::{DefineError, RegistryError};
pub use model::EnumModel;
pub use options::{CollisionPolicy, EnumOptions};
pub use registry::{EnumRegistry, SharedRegistry};
pub use store::{AttributeStore, MemoryStore};
pub use validation::{Inclusion, Validate, ValidationErrors, DEFAULT_MESSAGE};
pub use values::EnumValues;

pub use enumlogic_codec::{constant_name, hash32, int_for, normalize, Codec, Denominator};
pub use indexmap::IndexMap;

#[cfg(feature = "derive")]
pub use enumlogic_macros::Enumlogic;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=enumlogic=debug` or `RUST_LOG=enumlogic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
