//! Decoding of response bodies handed over by the transport.

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Decodes a JSON response body into a record.
///
/// [`crate::Build`] and [`crate::BuildList`] come out fully converted.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not valid JSON or does not match
/// the shape of `T`.
pub fn decode<T>(body: impl AsRef<[u8]>) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = body.as_ref();
    let target = std::any::type_name::<T>();
    tracing::trace!(target_type = target, len = body.len(), "decoding response body");

    serde_json::from_slice(body).map_err(|source| {
        tracing::debug!(target_type = target, error = %source, "failed to decode response body");
        Error::Decode { target, source }
    })
}
