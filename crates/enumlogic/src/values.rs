//! Declared value sets.

use indexmap::IndexMap;

/// The value set handed to [`EnumDefinition::define`](crate::EnumDefinition::define).
///
/// Either a plain ordered sequence (each value is its own display text) or an
/// ordered mapping from value to display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumValues {
    List(Vec<String>),
    Labelled(Vec<(String, String)>),
}

impl EnumValues {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumValues::List(values.into_iter().map(Into::into).collect())
    }

    pub fn labelled<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnumValues::Labelled(
            pairs
                .into_iter()
                .map(|(value, text)| (value.into(), text.into()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            EnumValues::List(values) => values.len(),
            EnumValues::Labelled(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(value, display text)` pairs in declaration order.
    pub(crate) fn into_entries(self) -> Vec<(String, String)> {
        match self {
            EnumValues::List(values) => values
                .into_iter()
                .map(|value| {
                    let text = value.clone();
                    (value, text)
                })
                .collect(),
            EnumValues::Labelled(pairs) => pairs,
        }
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for EnumValues {
    fn from(values: [S; N]) -> Self {
        EnumValues::list(values)
    }
}

impl From<Vec<String>> for EnumValues {
    fn from(values: Vec<String>) -> Self {
        EnumValues::List(values)
    }
}

impl<S: std::hash::BuildHasher> From<IndexMap<String, String, S>> for EnumValues {
    fn from(map: IndexMap<String, String, S>) -> Self {
        EnumValues::Labelled(map.into_iter().collect())
    }
}
