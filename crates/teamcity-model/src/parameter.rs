//! Configuration parameters of build types and builds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// A single configuration parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Parameter {
    /// Parameter name, e.g. `env.JAVA_HOME`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Parameter value.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Set when the value comes from a parent configuration (a template or
    /// an enclosing project) rather than being defined directly.
    #[serde(deserialize_with = "null_as_default")]
    pub inherited: bool,
}

/// A parameter listing: `{"count": n, "property": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ParameterList {
    /// Number of parameters as reported by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub count: usize,
    /// Parameters in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub property: Vec<Parameter>,
}

impl ParameterList {
    /// Name to value mapping. A repeated name keeps its last value.
    pub fn to_map(&self) -> HashMap<String, String> {
        last_value_wins(
            self.property
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str())),
        )
    }

    /// Parameters defined directly on this configuration.
    pub fn own(&self) -> impl Iterator<Item = &Parameter> {
        self.property.iter().filter(|p| !p.inherited)
    }
}

/// Builds a name to value map in iteration order; later names overwrite.
pub(crate) fn last_value_wins<'a, I>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut map = HashMap::new();
    for (name, value) in pairs {
        if let Some(previous) = map.insert(name.to_owned(), value.to_owned()) {
            tracing::debug!(
                name,
                %previous,
                value,
                "duplicate property name, keeping last value"
            );
        }
    }
    map
}
