use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::api_time;

/// Upstream never returns more than this many battles.
pub const MAX_BATTLE_LOG_ENTRIES: usize = 25;

/// One past battle. Battle logs come most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogEntry {
    #[serde(with = "api_time")]
    pub battle_time: DateTime<Utc>,
    #[serde(default)]
    pub event: BattleEvent,
    pub battle: Battle,
}

impl BattleLogEntry {
    /// The mode from the event, falling back to the one on the battle.
    pub fn mode(&self) -> Option<&str> {
        self.event
            .mode
            .as_deref()
            .or(self.battle.mode.as_deref())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match (self.battle.result, self.battle.rank) {
            (Some(BattleResult::Victory), _) => Some(Outcome::Victory),
            (Some(BattleResult::Defeat), _) => Some(Outcome::Defeat),
            (Some(BattleResult::Draw), _) => Some(Outcome::Draw),
            (None, Some(rank)) => Some(Outcome::Rank(rank)),
            (None, None) => None,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.battle.duration.map(|secs| Duration::from_secs(secs.into()))
    }

    /// Everyone in the battle, team by team for team modes.
    pub fn participants(&self) -> Vec<&BattlePlayer> {
        match (&self.battle.teams, &self.battle.players) {
            (Some(teams), _) => teams.iter().flatten().collect(),
            (None, Some(players)) => players.iter().collect(),
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEvent {
    pub id: Option<u32>,
    pub mode: Option<String>,
    pub map: Option<String>,
}

impl BattleEvent {
    /// Community maps come without a name.
    pub fn map_name(&self) -> &str {
        self.map.as_deref().unwrap_or("Community Map")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub result: Option<BattleResult>,
    /// Showdown placement; set instead of `result`.
    pub rank: Option<u32>,
    /// Seconds.
    pub duration: Option<u32>,
    pub trophy_change: Option<i32>,
    pub star_player: Option<BattlePlayer>,
    pub teams: Option<Vec<Vec<BattlePlayer>>>,
    pub players: Option<Vec<BattlePlayer>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleResult {
    Victory,
    Defeat,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Victory,
    Defeat,
    Draw,
    Rank(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePlayer {
    pub tag: String,
    pub name: String,
    pub brawler: Option<BattleBrawler>,
    /// Filled instead of `brawler` in modes where a player uses several.
    #[serde(default)]
    pub brawlers: Vec<BattleBrawler>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleBrawler {
    pub id: u32,
    pub name: String,
    pub power: i32,
    pub trophies: i32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_team_battle() {
        let json = r###"
            {
              "battleTime": "20240301T081530.000Z",
              "event": { "id": 15000007, "mode": "gemGrab", "map": "Hard Rock Mine" },
              "battle": {
                "mode": "gemGrab",
                "type": "ranked",
                "result": "victory",
                "duration": 141,
                "trophyChange": 8,
                "starPlayer": {
                  "tag": "#A", "name": "a",
                  "brawler": { "id": 16000000, "name": "SHELLY", "power": 11, "trophies": 700 }
                },
                "teams": [
                  [
                    { "tag": "#A", "name": "a", "brawler": { "id": 16000000, "name": "SHELLY", "power": 11, "trophies": 700 } },
                    { "tag": "#B", "name": "b", "brawler": { "id": 16000001, "name": "COLT", "power": 10, "trophies": 650 } }
                  ],
                  [
                    { "tag": "#C", "name": "c", "brawler": { "id": 16000002, "name": "BULL", "power": 9, "trophies": 600 } }
                  ]
                ]
              }
            }
        "###;

        let entry: BattleLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mode(), Some("gemGrab"));
        assert_eq!(entry.event.map_name(), "Hard Rock Mine");
        assert_eq!(entry.outcome(), Some(Outcome::Victory));
        assert_eq!(entry.duration(), Some(Duration::from_secs(141)));
        assert_eq!(entry.battle.trophy_change, Some(8));
        assert_eq!(entry.battle.star_player.as_ref().unwrap().tag, "#A");

        let tags: Vec<_> = entry.participants().iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["#A", "#B", "#C"]);
    }

    #[test]
    fn test_showdown_battle() {
        let json = r###"
            {
              "battleTime": "20240301T070000.000Z",
              "event": { "id": 0, "mode": "soloShowdown", "map": null },
              "battle": {
                "mode": "soloShowdown",
                "type": "ranked",
                "rank": 3,
                "trophyChange": 4,
                "players": [
                  { "tag": "#A", "name": "a", "brawler": { "id": 16000000, "name": "SHELLY", "power": 11, "trophies": 700 } },
                  { "tag": "#B", "name": "b", "brawler": { "id": 16000001, "name": "COLT", "power": 10, "trophies": 650 } }
                ]
              }
            }
        "###;

        let entry: BattleLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.event.map_name(), "Community Map");
        assert_eq!(entry.outcome(), Some(Outcome::Rank(3)));
        assert_eq!(entry.duration(), None);
        assert_eq!(entry.battle.star_player, None);
        assert_eq!(entry.participants().len(), 2);
    }

    #[test]
    fn test_bad_battle_time() {
        let json = r#"{"battleTime": "yesterday", "battle": {}}"#;
        assert!(serde_json::from_str::<BattleLogEntry>(json).is_err());
    }
}
