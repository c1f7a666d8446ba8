//! Lifecycle stage of a build, derived from its timestamps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::JsonTime;

/// Where a build is in its lifecycle.
///
/// This is a classification of the three date fields, not a state machine:
/// nothing here transitions between variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// No queued date.
    #[default]
    Unknown,
    /// Queued but not started.
    Queued,
    /// Started but not finished.
    Started,
    /// Queued, started and finished.
    Finished,
}

impl LifecycleState {
    /// Classifies a build from the presence of its three timestamps.
    ///
    /// The checks run in order and the first absent date decides. A missing
    /// queued date therefore yields [`LifecycleState::Unknown`] even when the
    /// start and finish dates are set.
    pub fn classify(queued: &JsonTime, started: &JsonTime, finished: &JsonTime) -> Self {
        if queued.is_absent() {
            return Self::Unknown;
        }
        if started.is_absent() {
            return Self::Queued;
        }
        if finished.is_absent() {
            return Self::Started;
        }
        Self::Finished
    }

    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Queued => "Queued",
            Self::Started => "Started",
            Self::Finished => "Finished",
        };
        f.write_str(name)
    }
}
