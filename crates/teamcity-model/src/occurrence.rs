//! Build problems and test results reported for a build.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// A problem the server attached to a build (compilation error, exit code,
/// failed tests summary and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ProblemOccurrence {
    /// Locator-style ID, e.g. `problem:(id:1),build:(id:42)`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Problem kind, e.g. `TC_EXIT_CODE`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub problem_type: String,
    /// Identity used to match the same problem across builds.
    #[serde(deserialize_with = "null_as_default")]
    pub identity: String,
    /// Free-text details.
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

/// One test run within a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct TestOccurrence {
    /// Locator-style ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Fully qualified test name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `SUCCESS`, `FAILURE` or `UNKNOWN`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
    /// Failure output, if any.
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Failure is muted.
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    /// Test was ignored.
    #[serde(deserialize_with = "null_as_default")]
    pub ignored: bool,
    /// Someone is investigating the failure.
    #[serde(deserialize_with = "null_as_default")]
    pub currently_investigated: bool,
}

/// Wire wrapper: `{"problemOccurrence": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ProblemOccurrenceList {
    /// Problems in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub problem_occurrence: Vec<ProblemOccurrence>,
}

/// Wire wrapper: `{"testOccurrence": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct TestOccurrenceList {
    /// Test results in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub test_occurrence: Vec<TestOccurrence>,
}
