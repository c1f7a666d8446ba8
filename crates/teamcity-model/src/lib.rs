//! Record types for the TeamCity REST API.
//!
//! This crate models the build, build type, artifact and parameter records a
//! TeamCity server returns, and turns their wire representation into
//! directly usable values:
//!
//! - tag lists (`{"tag": [{"name": ...}]}`) become a `Vec<String>`
//! - property lists (`{"property": [{"name": ..., "value": ...}]}`) become a
//!   `HashMap<String, String>`
//! - the queued, start and finish dates give a [`LifecycleState`]
//!
//! Fetching responses is left to the caller. Hand the body to [`decode`] (or
//! deserialize with `serde` directly) and the result is ready to use:
//!
//! ```
//! use teamcity_model::{Build, LifecycleState, decode};
//!
//! let body = r#"{
//!     "id": 42,
//!     "state": "running",
//!     "queuedDate": "20230101T000000+0000",
//!     "startDate": "20230101T000500+0000",
//!     "finishDate": "",
//!     "tags": {"tag": [{"name": "nightly"}]},
//!     "properties": {"property": [{"name": "env.TARGET", "value": "linux"}]}
//! }"#;
//!
//! let build: Build = decode(body)?;
//! assert_eq!(build.computed_state(), LifecycleState::Started);
//! assert!(build.has_tag("nightly"));
//! assert_eq!(build.property("env.TARGET"), Some("linux"));
//! # Ok::<(), teamcity_model::Error>(())
//! ```
//!
//! # Features
//!
//! - `schema` (default): derives `schemars::JsonSchema` for every record.

mod artifact;
mod build;
mod build_type;
mod change;
mod decode;
mod error;
mod nullable;
mod occurrence;
mod parameter;
mod state;
mod time;

#[cfg(test)]
mod integration_tests;

pub use artifact::{Artifact, ArtifactCollection, ArtifactContent};
pub use build::{
    Agent, ArtifactsLink, Build, BuildList, Property, PropertyList, Tag, TagList, Triggered,
    TriggeringUser, WireBuild,
};
pub use build_type::BuildType;
pub use change::{Change, ChangeList};
pub use decode::decode;
pub use error::{Error, Result};
pub use occurrence::{ProblemOccurrence, ProblemOccurrenceList, TestOccurrence, TestOccurrenceList};
pub use parameter::{Parameter, ParameterList};
pub use state::LifecycleState;
pub use time::{JsonTime, TIMESTAMP_FORMAT};
