use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::http::Route;
use crate::types::BrawlerInfo;

pub const MAX_LEADERBOARD_LIMIT: u32 = 200;
pub const GLOBAL: &str = "global";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaderboardMode {
    Players,
    Clubs,
    Brawlers,
}

impl LeaderboardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardMode::Players => "players",
            LeaderboardMode::Clubs => "clubs",
            LeaderboardMode::Brawlers => "brawlers",
        }
    }
}

impl FromStr for LeaderboardMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "players" => Ok(LeaderboardMode::Players),
            "clubs" => Ok(LeaderboardMode::Clubs),
            "brawlers" => Ok(LeaderboardMode::Brawlers),
            _ => Err(Error::invalid(format!(
                "leaderboard mode {s:?} is not one of players/clubs/brawlers"
            ))),
        }
    }
}

impl fmt::Display for LeaderboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the brawler for a brawler ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrawlerRef {
    Id(u32),
    /// Matched against the brawler list ignoring case.
    Name(String),
}

impl From<u32> for BrawlerRef {
    fn from(id: u32) -> Self {
        BrawlerRef::Id(id)
    }
}

impl From<&str> for BrawlerRef {
    fn from(name: &str) -> Self {
        BrawlerRef::Name(name.into())
    }
}

/// Parameters of a leaderboard lookup.
///
/// ```
/// use bstats::{LeaderboardMode, LeaderboardQuery};
///
/// let query = LeaderboardQuery::new(LeaderboardMode::Brawlers)
///     .limit(50)
///     .country("DE")
///     .brawler("Shelly");
/// assert!(query.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardQuery {
    mode: LeaderboardMode,
    limit: u32,
    country: Option<String>,
    brawler: Option<BrawlerRef>,
}

impl LeaderboardQuery {
    pub fn new(mode: LeaderboardMode) -> Self {
        Self {
            mode,
            limit: MAX_LEADERBOARD_LIMIT,
            country: None,
            brawler: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Two-letter country code, or `global`.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn brawler(mut self, brawler: impl Into<BrawlerRef>) -> Self {
        self.brawler = Some(brawler.into());
        self
    }

    pub fn mode(&self) -> LeaderboardMode {
        self.mode
    }

    pub fn max_entries(&self) -> usize {
        self.limit as usize
    }

    pub(crate) fn brawler_ref(&self) -> Option<&BrawlerRef> {
        self.brawler.as_ref()
    }

    /// Checks everything that can be checked without the network.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LEADERBOARD_LIMIT).contains(&self.limit) {
            return Err(Error::invalid(format!(
                "limit {} is outside 1-{MAX_LEADERBOARD_LIMIT}",
                self.limit
            )));
        }
        match (self.mode, &self.brawler) {
            (LeaderboardMode::Brawlers, None) => {
                return Err(Error::invalid(
                    "brawler rankings need a brawler name or id",
                ))
            }
            (LeaderboardMode::Players | LeaderboardMode::Clubs, Some(_)) => {
                return Err(Error::invalid(format!(
                    "a brawler only applies to brawler rankings, not {}",
                    self.mode
                )))
            }
            _ => {}
        }
        self.country_code()?;
        Ok(())
    }

    fn country_code(&self) -> Result<String> {
        let Some(country) = &self.country else {
            return Ok(GLOBAL.into());
        };
        let code = country.trim().to_ascii_lowercase();
        if code == GLOBAL || (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())) {
            Ok(code)
        } else {
            Err(Error::invalid(format!(
                "{country:?} is not a two-letter country code or {GLOBAL:?}"
            )))
        }
    }

    /// `brawler_id` is the already looked-up id for brawler rankings.
    pub(crate) fn route(&self, brawler_id: Option<u32>) -> Result<Route> {
        self.validate()?;
        Ok(Route::Rankings {
            country: self.country_code()?,
            mode: self.mode,
            brawler: brawler_id,
            limit: self.limit,
        })
    }
}

pub(crate) fn find_brawler_id(brawlers: &[BrawlerInfo], brawler: &BrawlerRef) -> Result<u32> {
    let found = match brawler {
        BrawlerRef::Id(id) => brawlers.iter().find(|b| b.id == *id),
        BrawlerRef::Name(name) => {
            let name = name.trim();
            brawlers.iter().find(|b| b.name.eq_ignore_ascii_case(name))
        }
    };

    match (found, brawler) {
        (Some(b), _) => Ok(b.id),
        (None, BrawlerRef::Id(id)) => Err(Error::invalid(format!("{id} is not a known brawler id"))),
        (None, BrawlerRef::Name(name)) => Err(Error::invalid(format!("{name:?} is not a known brawler"))),
    }
}
