//! Space data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::output::duration::human_duration;

/// Response wrapper for the user-scoped space list
#[derive(Deserialize, Debug)]
pub struct SpaceList {
    #[serde(default)]
    pub spaces: Vec<SpaceEntry>,
}

/// One space as returned by the management API, together with the cluster
/// backing it and its sleep mode state
#[derive(Deserialize, Debug, Clone)]
pub struct SpaceEntry {
    pub space: Space,

    #[serde(default)]
    pub cluster: String,

    #[serde(rename = "sleepModeConfig", default)]
    pub sleep_mode_config: SleepModeConfig,
}

/// Core space object
#[derive(Deserialize, Debug, Clone)]
pub struct Space {
    pub name: String,

    /// Set once by the control plane at creation, never mutated
    #[serde(rename = "creationTimestamp")]
    pub creation_timestamp: DateTime<Utc>,

    #[serde(default)]
    pub status: SpaceStatus,
}

/// Space status, owned and mutated exclusively by the control plane
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SpaceStatus {
    #[serde(default)]
    pub phase: String,
}

/// Sleep mode configuration attached to a space
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SleepModeConfig {
    #[serde(default)]
    pub status: SleepModeStatus,
}

/// Sleep mode status; `sleeping_since` is Unix seconds, 0 while awake
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SleepModeStatus {
    #[serde(rename = "sleepingSince", default)]
    pub sleeping_since: i64,
}

impl SpaceEntry {
    /// Elapsed sleeping time as a display string, or the literal "false"
    /// when the space is not sleeping.
    ///
    /// Pure over (self, now); callers sample `now` once per invocation so
    /// every row shares the same reference instant.
    pub fn sleeping_cell(&self, now: DateTime<Utc>) -> String {
        match self.sleep_mode_config.status.sleeping_since {
            0 => "false".to_string(),
            since => human_duration(chrono::Duration::seconds(
                now.timestamp().saturating_sub(since),
            )),
        }
    }

    /// Elapsed time since the space was created, as a display string
    pub fn age_cell(&self, now: DateTime<Utc>) -> String {
        human_duration(now.signed_duration_since(self.space.creation_timestamp))
    }

    /// The status phase in its literal string form
    pub fn phase(&self) -> &str {
        &self.space.status.phase
    }
}
