use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::common::api_time;

/// A slot in the current event rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot {
    #[serde(with = "api_time")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "api_time")]
    pub end_time: DateTime<Utc>,
    pub slot_id: Option<u32>,
    pub event: RotationEvent,
}

impl EventSlot {
    /// Time left until the slot rotates out. Negative once it has ended.
    pub fn ends_in(&self) -> TimeDelta {
        self.ends_in_at(Utc::now())
    }

    pub fn ends_in_at(&self, now: DateTime<Utc>) -> TimeDelta {
        self.end_time - now
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEvent {
    pub id: u32,
    pub mode: Option<String>,
    pub map: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
}
