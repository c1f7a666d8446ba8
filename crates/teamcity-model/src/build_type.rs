//! The build configuration a build belongs to.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// A build configuration, as embedded in a build record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct BuildType {
    /// Opaque identifier, e.g. `Project_Build`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Name of the owning project.
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,
    /// ID of the owning project.
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: String,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Link for humans.
    #[serde(deserialize_with = "null_as_default")]
    pub web_url: String,
}
