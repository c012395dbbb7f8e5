use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::club::Club;
use super::common::{empty_object_as_none, Accessory, Icon};
use crate::blocking::BlockingApiClient;
use crate::client::StatsApi;
use crate::error::Result;

/// A player's profile as returned by the player lookup.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub tag: String,
    pub name: Option<String>,
    pub name_color: Option<String>,
    pub icon: Option<Icon>,
    pub trophies: u32,
    pub highest_trophies: Option<u32>,
    pub exp_level: Option<u32>,
    pub exp_points: Option<u32>,
    pub is_qualified_from_championship_challenge: Option<bool>,
    #[serde(rename = "3vs3Victories")]
    pub team_victories: Option<u32>,
    pub solo_victories: Option<u32>,
    pub duo_victories: Option<u32>,
    pub best_robo_rumble_time: Option<u32>,
    pub best_time_as_big_brawler: Option<u32>,
    /// `None` when the player is not in a club.
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub club: Option<LazyClub>,
    #[serde(default)]
    pub brawlers: Vec<PlayerBrawler>,
}

impl Profile {
    /// Finds an owned brawler by name, ignoring case.
    pub fn brawler(&self, name: &str) -> Option<&PlayerBrawler> {
        self.brawlers
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.tag),
            None => f.write_str(&self.tag),
        }
    }
}

/// A brawler owned by a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBrawler {
    pub id: u32,
    pub name: String,
    pub power: u32,
    pub rank: u32,
    pub trophies: u32,
    pub highest_trophies: u32,
    #[serde(default)]
    pub star_powers: Vec<Accessory>,
    #[serde(default)]
    pub gadgets: Vec<Accessory>,
    #[serde(default)]
    pub gears: Vec<Gear>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gear {
    pub id: u32,
    pub name: String,
    pub level: u32,
}

#[derive(Deserialize)]
struct ClubRef {
    tag: String,
    name: Option<String>,
}

/// The club a profile points at, fetched on first access.
///
/// The resolved [`Club`] is kept on this instance, so later accesses don't
/// hit the API. While one caller is fetching, others wait for it instead of
/// sending their own request. A failed fetch is not kept and the next
/// access tries again.
#[derive(Deserialize)]
#[serde(from = "ClubRef")]
pub struct LazyClub {
    tag: String,
    name: Option<String>,
    resolved: OnceLock<Club>,
    resolving: Mutex<()>,
}

impl LazyClub {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The club name embedded in the profile, if upstream sent one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The club, if an earlier access already fetched it.
    pub fn get(&self) -> Option<&Club> {
        self.resolved.get()
    }

    /// Fetches the club on first access and keeps it for later ones.
    ///
    /// Concurrent first accesses wait on each other, so only one request is
    /// sent. A failed lookup is not kept: the error goes to the caller and
    /// the next access tries again.
    pub async fn resolve<A>(&self, api: &A) -> Result<&Club>
    where
        A: StatsApi + ?Sized,
    {
        if let Some(club) = self.resolved.get() {
            return Ok(club);
        }

        let _resolving = self.resolving.lock().await;
        if let Some(club) = self.resolved.get() {
            return Ok(club);
        }

        debug!(tag = %self.tag, "resolving club");
        let club = api.get_club(&self.tag).await?;
        Ok(self.resolved.get_or_init(|| club))
    }

    /// Blocking counterpart of [`resolve`](Self::resolve).
    ///
    /// Panics if called from within an async runtime, like the blocking
    /// client itself.
    pub fn resolve_blocking(&self, client: &BlockingApiClient) -> Result<&Club> {
        if let Some(club) = self.resolved.get() {
            return Ok(club);
        }

        let _resolving = self.resolving.blocking_lock();
        if let Some(club) = self.resolved.get() {
            return Ok(club);
        }

        debug!(tag = %self.tag, "resolving club");
        let club = client.get_club(&self.tag)?;
        Ok(self.resolved.get_or_init(|| club))
    }
}

impl From<ClubRef> for LazyClub {
    fn from(club: ClubRef) -> Self {
        Self {
            tag: club.tag,
            name: club.name,
            resolved: OnceLock::new(),
            resolving: Mutex::new(()),
        }
    }
}

impl Clone for LazyClub {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            name: self.name.clone(),
            resolved: self.resolved.clone(),
            resolving: Mutex::new(()),
        }
    }
}

impl fmt::Debug for LazyClub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyClub")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}
