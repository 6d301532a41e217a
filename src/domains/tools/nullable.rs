//! Three-state optional values for tool parameters.
//!
//! JSON arguments can omit a field, set it to `null`, or carry a value.
//! `Option<T>` collapses the first two cases; [`Nullable<T>`] keeps them
//! apart so argument handling can treat "never sent" and "explicitly null"
//! as distinct states where it matters.
//!
//! A field typed `Nullable<T>` must carry `#[serde(default)]` (absent input
//! never reaches `Deserialize`, it becomes [`Nullable::Missing`] through
//! `Default`) and `#[schemars(with = "Option<T>")]` so the generated schema
//! stays the standard nullable union (e.g. `"type": ["string", "null"]`)
//! without listing the field as required.

use serde::{Deserialize, Deserializer};

/// An optional value that distinguishes an absent field from an explicit
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The field was not present in the arguments.
    Missing,
    /// The field was present and explicitly `null`.
    Null,
    /// The field carried a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the field was absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` if the field was an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the carried value, if any. `Missing` and `Null` both yield
    /// `None`.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the field is present: `null` or a value.
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}
