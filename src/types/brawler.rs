use serde::{Deserialize, Serialize};

use super::common::Accessory;

/// Static data about a brawler in the game, not one a player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrawlerInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub star_powers: Vec<Accessory>,
    #[serde(default)]
    pub gadgets: Vec<Accessory>,
}
