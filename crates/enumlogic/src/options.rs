//! Declaration options.

use enumlogic_codec::DEFAULT_DENOMINATOR;

/// What to do when two declared values encode to the same integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollisionPolicy {
    /// The later-declared value takes the code; the earlier one becomes
    /// undecodable. A warning is logged.
    #[default]
    Overwrite,

    /// Refuse the declaration.
    Reject,
}

/// Options recognized by [`EnumDefinition::define`](crate::EnumDefinition::define).
///
/// Built with chained setters:
///
/// ```
/// use enumlogic::{CollisionPolicy, EnumOptions};
///
/// let options = EnumOptions::new()
///     .denominator(1_000)
///     .namespace(true)
///     .allow_nil(true)
///     .collisions(CollisionPolicy::Reject);
/// assert_eq!(options.denominator, 1_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnumOptions {
    /// Divisor applied to the hash. Must be positive.
    pub denominator: u32,

    /// Constant name override. Defaults to the pluralized, uppercased field.
    pub constant: Option<String>,

    /// Append the field name to predicate names (`apple_kind`).
    pub namespace: bool,

    /// Validation message override.
    pub message: Option<String>,

    pub allow_nil: bool,
    pub allow_blank: bool,

    pub collisions: CollisionPolicy,
}

impl Default for EnumOptions {
    fn default() -> Self {
        Self {
            denominator: DEFAULT_DENOMINATOR,
            constant: None,
            namespace: false,
            message: None,
            allow_nil: false,
            allow_blank: false,
            collisions: CollisionPolicy::default(),
        }
    }
}

impl EnumOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn denominator(mut self, denominator: u32) -> Self {
        self.denominator = denominator;
        self
    }

    #[must_use]
    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constant = Some(name.into());
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: bool) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    #[must_use]
    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    #[must_use]
    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }
}
