//! Build records.
//!
//! [`WireBuild`] is a build exactly as the server sends it: tags, properties,
//! changes and occurrences all sit inside single-key wrapper objects.
//! [`Build`] is what callers work with; it is produced from a [`WireBuild`]
//! in one step and always carries its converted fields. Decoding a [`Build`]
//! goes through [`WireBuild`], and encoding one goes back to that shape.

use std::{collections::HashMap, fmt, hash::BuildHasher};

use serde::{Deserialize, Serialize};

use crate::{
    BuildType, Change, ChangeList, JsonTime, LifecycleState, ProblemOccurrence,
    ProblemOccurrenceList, TestOccurrence, TestOccurrenceList, nullable::null_as_default,
    parameter::last_value_wins,
};

/// A tag as sent by the server: `{"name": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Tag {
    /// Tag text. Not validated; may be empty.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Wire wrapper: `{"tag": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TagList {
    /// Tags in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub tag: Vec<Tag>,
}

impl TagList {
    /// Tag names in the order the server listed them.
    pub fn names(&self) -> Vec<String> {
        self.tag.iter().map(|t| t.name.clone()).collect()
    }
}

impl FromIterator<String> for TagList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tag: iter.into_iter().map(|name| Tag { name }).collect(),
        }
    }
}

/// A build property as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Property {
    /// Property name, e.g. `env.JAVA_HOME`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Property value.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Wire wrapper: `{"property": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct PropertyList {
    /// Properties in server order; names may repeat.
    #[serde(deserialize_with = "null_as_default")]
    pub property: Vec<Property>,
}

impl PropertyList {
    /// Name to value mapping, inserted in list order.
    ///
    /// If a name appears more than once the last value wins.
    pub fn to_map(&self) -> HashMap<String, String> {
        last_value_wins(
            self.property
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str())),
        )
    }
}

impl<S: BuildHasher> From<HashMap<String, String, S>> for PropertyList {
    /// Entries are sorted by name so the encoded list is stable.
    fn from(map: HashMap<String, String, S>) -> Self {
        let mut property: Vec<Property> = map
            .into_iter()
            .map(|(name, value)| Property { name, value })
            .collect();
        property.sort_by(|a, b| a.name.cmp(&b.name));
        Self { property }
    }
}

/// What started a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Triggered {
    /// Trigger kind, e.g. `user`, `vcs`, `schedule`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub trigger_type: String,
    /// When the trigger fired.
    pub date: JsonTime,
    /// Who triggered the build; empty for automatic triggers.
    #[serde(deserialize_with = "null_as_default")]
    pub user: TriggeringUser,
}

/// The user behind a manual trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TriggeringUser {
    /// Login name.
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

/// The agent a build ran on. All fields are zero for builds that have not
/// been assigned one yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Agent name as shown in the UI.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Agent type (pool/image) ID.
    #[serde(deserialize_with = "null_as_default")]
    pub type_id: i64,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

/// Link to a build's artifact listing (see [`crate::ArtifactCollection`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ArtifactsLink {
    /// REST API link to the artifact listing.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
}

/// A build as decoded from the server, before conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct WireBuild {
    /// Build ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// ID of the build configuration.
    #[serde(deserialize_with = "null_as_default")]
    pub build_type_id: String,
    /// The build configuration.
    #[serde(deserialize_with = "null_as_default")]
    pub build_type: BuildType,
    /// Trigger details.
    #[serde(deserialize_with = "null_as_default")]
    pub triggered: Triggered,
    /// VCS changes, wrapped.
    #[serde(deserialize_with = "null_as_default")]
    pub changes: ChangeList,
    /// When the build entered the queue.
    pub queued_date: JsonTime,
    /// When the build started running.
    pub start_date: JsonTime,
    /// When the build finished.
    pub finish_date: JsonTime,
    /// Build number as displayed by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    /// Result status.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Free-text status message.
    #[serde(deserialize_with = "null_as_default")]
    pub status_text: String,
    /// Lifecycle state as reported by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// VCS branch name.
    #[serde(deserialize_with = "null_as_default")]
    pub branch_name: String,
    /// Personal (pre-tested commit) build.
    #[serde(deserialize_with = "null_as_default")]
    pub personal: bool,
    /// Currently running.
    #[serde(deserialize_with = "null_as_default")]
    pub running: bool,
    /// Pinned against cleanup.
    #[serde(deserialize_with = "null_as_default")]
    pub pinned: bool,
    /// Built from the default branch.
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch: bool,
    /// REST API link.
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    /// Link for humans.
    #[serde(deserialize_with = "null_as_default")]
    pub web_url: String,
    /// Executing agent.
    #[serde(deserialize_with = "null_as_default")]
    pub agent: Agent,
    /// Build problems, wrapped.
    #[serde(deserialize_with = "null_as_default")]
    pub problem_occurrences: ProblemOccurrenceList,
    /// Test results, wrapped.
    #[serde(deserialize_with = "null_as_default")]
    pub test_occurrences: TestOccurrenceList,
    /// Tags, wrapped.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: TagList,
    /// Link to the artifact listing.
    #[serde(deserialize_with = "null_as_default")]
    pub artifacts: ArtifactsLink,
    /// Properties, wrapped.
    #[serde(deserialize_with = "null_as_default")]
    pub properties: PropertyList,
}

/// One execution of a build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireBuild", into = "WireBuild")]
pub struct Build {
    /// Build ID.
    pub id: i64,
    /// ID of the build configuration.
    pub build_type_id: String,
    /// The build configuration this build is an instance of.
    pub build_type: BuildType,
    /// Trigger kind, time and user.
    pub triggered: Triggered,
    /// VCS changes included in the build.
    pub changes: Vec<Change>,
    /// When the build entered the queue.
    pub queued_date: JsonTime,
    /// When the build started running.
    pub start_date: JsonTime,
    /// When the build finished.
    pub finish_date: JsonTime,
    /// Build number as displayed by the server. Not necessarily numeric.
    pub number: String,
    /// `SUCCESS`, `FAILURE` or `UNKNOWN`.
    pub status: String,
    /// Free-text status message, e.g. `Tests passed: 211`.
    pub status_text: String,
    /// Lifecycle state as reported by the server (`queued`, `running`,
    /// `finished`). See [`Build::computed_state`] for the derived one.
    pub state: String,
    /// VCS branch name.
    pub branch_name: String,
    /// Personal (pre-tested commit) build.
    pub personal: bool,
    /// Currently running.
    pub running: bool,
    /// Pinned against cleanup.
    pub pinned: bool,
    /// Built from the default branch.
    pub default_branch: bool,
    /// REST API link.
    pub href: String,
    /// Link for humans.
    pub web_url: String,
    /// Executing agent; zero-valued until one is assigned.
    pub agent: Agent,
    /// Problems reported for the build.
    pub problem_occurrences: Vec<ProblemOccurrence>,
    /// Test results reported for the build.
    pub test_occurrences: Vec<TestOccurrence>,
    /// Tag names, in server order.
    pub tags: Vec<String>,
    /// Build properties by name.
    pub properties: HashMap<String, String>,
    /// Link to the artifact listing.
    pub artifacts: ArtifactsLink,
}

impl Build {
    /// Lifecycle stage derived from the queued, start and finish dates.
    pub fn computed_state(&self) -> LifecycleState {
        LifecycleState::classify(&self.queued_date, &self.start_date, &self.finish_date)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

impl From<WireBuild> for Build {
    fn from(wire: WireBuild) -> Self {
        let tags = wire.tags.names();
        let properties = wire.properties.to_map();
        tracing::trace!(
            build_id = wire.id,
            tags = tags.len(),
            properties = properties.len(),
            "converted build record"
        );

        Self {
            id: wire.id,
            build_type_id: wire.build_type_id,
            build_type: wire.build_type,
            triggered: wire.triggered,
            changes: wire.changes.change,
            queued_date: wire.queued_date,
            start_date: wire.start_date,
            finish_date: wire.finish_date,
            number: wire.number,
            status: wire.status,
            status_text: wire.status_text,
            state: wire.state,
            branch_name: wire.branch_name,
            personal: wire.personal,
            running: wire.running,
            pinned: wire.pinned,
            default_branch: wire.default_branch,
            href: wire.href,
            web_url: wire.web_url,
            agent: wire.agent,
            problem_occurrences: wire.problem_occurrences.problem_occurrence,
            test_occurrences: wire.test_occurrences.test_occurrence,
            tags,
            properties,
            artifacts: wire.artifacts,
        }
    }
}

impl From<Build> for WireBuild {
    fn from(build: Build) -> Self {
        Self {
            id: build.id,
            build_type_id: build.build_type_id,
            build_type: build.build_type,
            triggered: build.triggered,
            changes: ChangeList {
                change: build.changes,
            },
            queued_date: build.queued_date,
            start_date: build.start_date,
            finish_date: build.finish_date,
            number: build.number,
            status: build.status,
            status_text: build.status_text,
            state: build.state,
            branch_name: build.branch_name,
            personal: build.personal,
            running: build.running,
            pinned: build.pinned,
            default_branch: build.default_branch,
            href: build.href,
            web_url: build.web_url,
            agent: build.agent,
            problem_occurrences: ProblemOccurrenceList {
                problem_occurrence: build.problem_occurrences,
            },
            test_occurrences: TestOccurrenceList {
                test_occurrence: build.test_occurrences,
            },
            tags: build.tags.into_iter().collect(),
            artifacts: build.artifacts,
            properties: build.properties.into(),
        }
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Build {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Build".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <WireBuild as schemars::JsonSchema>::json_schema(generator)
    }
}

/// Diagnostic summary. Not meant to be parsed.
impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Build {}, {} state={}",
            self.id,
            self.computed_state(),
            self.state
        )
    }
}

/// A build listing: `{"count": n, "build": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BuildList {
    /// Number of builds in this page.
    #[serde(deserialize_with = "null_as_default")]
    pub count: usize,
    /// Builds, each already converted.
    #[serde(rename = "build", deserialize_with = "null_as_default")]
    pub builds: Vec<Build>,
}
