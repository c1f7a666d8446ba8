//! VCS changes included in a build.

use serde::{Deserialize, Serialize};

use crate::{JsonTime, nullable::null_as_default};

/// A reference to one VCS change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Change {
    /// Change ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// VCS revision.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// VCS user name of the committer.
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Commit time.
    pub date: JsonTime,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Link for humans.
    #[serde(deserialize_with = "null_as_default")]
    pub web_url: String,
}

/// Wire wrapper: `{"change": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ChangeList {
    /// Changes in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub change: Vec<Change>,
}
