//! Declaration and registration errors.
//!
//! Runtime reads never fail: a decode miss is `None` and a validation failure
//! is a message in [`ValidationErrors`](crate::ValidationErrors). Only building
//! a definition or binding it into a registry can go wrong.

/// A declaration that cannot become an [`EnumDefinition`](crate::EnumDefinition).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefineError {
    /// The denominator option was zero.
    #[error("enum `{field}`: denominator must be positive")]
    ZeroDenominator { field: String },

    /// The same value appears twice in a sequence declaration.
    #[error("enum `{field}`: value `{value}` is declared more than once")]
    DuplicateValue { field: String, value: String },

    /// Two values hash to the same code under [`CollisionPolicy::Reject`](crate::CollisionPolicy::Reject).
    #[error(
        "enum `{field}`: values `{first}` and `{second}` both encode to {code} \
         (denominator {denominator})"
    )]
    Collision {
        field: String,
        first: String,
        second: String,
        code: i64,
        denominator: u32,
    },
}

/// Failure to bind a definition into an [`EnumRegistry`](crate::EnumRegistry).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The `(owner, field)` pair already has a definition.
    #[error("`{owner}.{field}` is already declared as an enum")]
    DuplicateField { owner: String, field: String },

    /// The constant name is already bound on the owner by another field.
    #[error("constant `{owner}::{constant}` is already bound to enum `{existing}`")]
    DuplicateConstant {
        owner: String,
        constant: String,
        existing: String,
    },

    #[error(transparent)]
    Define(#[from] DefineError),
}
