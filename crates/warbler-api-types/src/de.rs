//! Decoding helpers shared by the response shapes.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing key: as `T::default()`.
///
/// Pair with `serde(default)` so the missing-key case is covered too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
