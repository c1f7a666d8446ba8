//! Zero-value decoding for fields the server may send as `null`.

use serde::{Deserialize, Deserializer};

/// Decodes a field, mapping an explicit `null` to the type's default.
///
/// Pair with `#[serde(default)]` so that a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
