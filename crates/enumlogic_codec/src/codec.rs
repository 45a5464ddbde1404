//! Hash-based value codec.

use std::fmt;
use std::num::NonZeroU32;

/// Default divisor applied to the 32-bit hash.
pub const DEFAULT_DENOMINATOR: u32 = 100_000;

/// CRC-32 (IEEE, the zlib polynomial) of the value's UTF-8 bytes.
#[inline]
pub fn hash32(value: &str) -> u32 {
    crc32fast::hash(value.as_bytes())
}

/// Encode `value` with the default denominator.
///
/// Instance-independent entry point for diagnostics and for cross-referencing
/// integers already sitting in storage.
#[inline]
pub fn int_for(value: &str) -> i64 {
    Codec::default().encode(value)
}

/// Positive divisor controlling the code range and collision likelihood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Denominator(NonZeroU32);

impl Denominator {
    /// The default denominator (100 000).
    pub const DEFAULT: Self = match NonZeroU32::new(DEFAULT_DENOMINATOR) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Returns `None` for zero.
    #[inline]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Denominator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stateless forward codec: value → integer.
///
/// The reverse direction needs the declared value set and lives on the
/// definition; this type only knows how to hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codec {
    denominator: Denominator,
}

impl Codec {
    #[inline]
    pub const fn new(denominator: Denominator) -> Self {
        Self { denominator }
    }

    #[inline]
    pub const fn denominator(self) -> Denominator {
        self.denominator
    }

    /// Encode any value, declared or not.
    ///
    /// Depends only on the string form and the denominator.
    #[inline]
    pub fn encode(self, value: &str) -> i64 {
        i64::from(hash32(value) / self.denominator.get())
    }

    /// Largest code this codec can produce.
    #[inline]
    pub fn max_code(self) -> i64 {
        i64::from(u32::MAX / self.denominator.get())
    }

    /// Number of distinct codes (`max_code() + 1`).
    #[inline]
    pub fn code_space(self) -> u64 {
        u64::from(u32::MAX / self.denominator.get()) + 1
    }
}
