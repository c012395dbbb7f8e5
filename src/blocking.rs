use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{self, Route};
use crate::rankings::{find_brawler_id, LeaderboardQuery};
use crate::tag::normalize_tag;
use crate::types::common::Page;
use crate::types::*;

/// Blocking client for the stats API.
///
/// Same lookups as [`ApiClient`](crate::ApiClient), but every call holds the
/// calling thread until the response is in. It must not be created or used
/// inside an async runtime.
#[derive(Clone, Debug)]
pub struct BlockingApiClient {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl BlockingApiClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(token))
    }

    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(http::default_headers(&config)?)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|source| Error::Http {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn fetch<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let url = route.url(&self.base_url)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let body = response.bytes().map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;

        http::check_status(&url, status, &body)?;
        http::decode(&url, &body)
    }

    #[instrument(skip(self))]
    pub fn get_player(&self, tag: &str) -> Result<Profile> {
        self.fetch(Route::Player(normalize_tag(tag)?))
    }

    #[instrument(skip(self))]
    pub fn get_club(&self, tag: &str) -> Result<Club> {
        self.fetch(Route::Club(normalize_tag(tag)?))
    }

    #[instrument(skip(self))]
    pub fn get_club_members(&self, tag: &str) -> Result<Vec<ClubMember>> {
        let page: Page<ClubMember> = self.fetch(Route::ClubMembers(normalize_tag(tag)?))?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub fn get_battlelogs(&self, tag: &str) -> Result<Vec<BattleLogEntry>> {
        let page: Page<BattleLogEntry> = self.fetch(Route::BattleLog(normalize_tag(tag)?))?;
        let mut entries = page.items;
        entries.truncate(MAX_BATTLE_LOG_ENTRIES);
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub fn get_leaderboards(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        query.validate()?;
        let brawler_id = match query.brawler_ref() {
            Some(brawler) => Some(find_brawler_id(&self.get_brawlers()?, brawler)?),
            None => None,
        };

        let page: Page<LeaderboardEntry> = self.fetch(query.route(brawler_id)?)?;
        let mut entries = page.items;
        entries.truncate(query.max_entries());
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub fn get_brawlers(&self) -> Result<Vec<BrawlerInfo>> {
        let page: Page<BrawlerInfo> = self.fetch(Route::Brawlers)?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub fn get_event_rotation(&self) -> Result<Vec<EventSlot>> {
        self.fetch(Route::EventRotation)
    }
}
