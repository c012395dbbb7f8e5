use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{empty_object_as_none, Icon};

/// One row of a player, club or brawler ranking.
///
/// For brawler rankings `trophies` counts that brawler's trophies only.
/// Player-only fields are `None` on club rankings and the other way round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub trophies: u32,
    pub name_color: Option<String>,
    pub icon: Option<Icon>,
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub club: Option<LeaderboardClub>,
    pub member_count: Option<u32>,
    pub badge_id: Option<u32>,
}

impl LeaderboardEntry {
    pub fn club_name(&self) -> Option<&str> {
        self.club.as_ref().map(|c| c.name.as_str())
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank {}: {} ({})", self.rank, self.name, self.tag)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardClub {
    pub name: String,
}
