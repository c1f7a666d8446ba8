//! Optional textual timestamps as carried by the REST API.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result, nullable::null_as_default};

/// Format of every timestamp the server emits, e.g. `20230101T000500+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%z";

/// A timestamp token exactly as received from the server.
///
/// The server never omits a date field; an unset date is sent as the empty
/// string. That empty token is what "absent" means here. A `null` or a
/// missing key decodes to the same absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct JsonTime(String);

impl JsonTime {
    /// An absent timestamp.
    pub const fn absent() -> Self {
        Self(String::new())
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the token into a point in time.
    ///
    /// Returns `Ok(None)` for an absent timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the token is present but not in
    /// [`TIMESTAMP_FORMAT`].
    pub fn to_datetime(&self) -> Result<Option<DateTime<FixedOffset>>> {
        if self.is_absent() {
            return Ok(None);
        }
        DateTime::parse_from_str(&self.0, TIMESTAMP_FORMAT)
            .map(Some)
            .map_err(|source| Error::InvalidTimestamp {
                value: self.0.clone(),
                source,
            })
    }
}

impl<'de> Deserialize<'de> for JsonTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        null_as_default(deserializer).map(Self)
    }
}

impl fmt::Display for JsonTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JsonTime {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for JsonTime {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl<Tz> From<DateTime<Tz>> for JsonTime
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn from(time: DateTime<Tz>) -> Self {
        Self(time.format(TIMESTAMP_FORMAT).to_string())
    }
}
