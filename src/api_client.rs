use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::client::StatsApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{self, Route};
use crate::rankings::{find_brawler_id, LeaderboardQuery};
use crate::tag::normalize_tag;
use crate::types::common::Page;
use crate::types::*;

/// Async client for the stats API.
///
/// Every lookup suspends the calling task on the HTTP round trip, so several
/// lookups can be in flight at once. Dropping a lookup's future abandons its
/// request.
///
/// ```no_run
/// # async fn example() -> bstats::Result<()> {
/// let client = bstats::ApiClient::new("my-token")?;
/// let profile = client.get_player("#80V2R98CQ").await?;
/// if let Some(club) = &profile.club {
///     println!("{} plays in {}", profile, club.resolve(&client).await?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(token))
    }

    /// Reads the token and settings from the environment, see
    /// [`Config::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
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

    async fn fetch<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let url = route.url(&self.base_url)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| Error::Http {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|source| Error::Http {
            url: url.clone(),
            source,
        })?;

        http::check_status(&url, status, &body)?;
        http::decode(&url, &body)
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, tag: &str) -> Result<Profile> {
        self.fetch(Route::Player(normalize_tag(tag)?)).await
    }

    #[instrument(skip(self))]
    pub async fn get_club(&self, tag: &str) -> Result<Club> {
        self.fetch(Route::Club(normalize_tag(tag)?)).await
    }

    #[instrument(skip(self))]
    pub async fn get_club_members(&self, tag: &str) -> Result<Vec<ClubMember>> {
        let page: Page<ClubMember> = self.fetch(Route::ClubMembers(normalize_tag(tag)?)).await?;
        Ok(page.items)
    }

    /// Most recent battle first, at most [`MAX_BATTLE_LOG_ENTRIES`].
    #[instrument(skip(self))]
    pub async fn get_battlelogs(&self, tag: &str) -> Result<Vec<BattleLogEntry>> {
        let page: Page<BattleLogEntry> = self.fetch(Route::BattleLog(normalize_tag(tag)?)).await?;
        let mut entries = page.items;
        entries.truncate(MAX_BATTLE_LOG_ENTRIES);
        Ok(entries)
    }

    /// Rankings in rank order. A brawler ranking costs one extra lookup of
    /// the brawler list, and a brawler missing from it is rejected.
    #[instrument(skip(self))]
    pub async fn get_leaderboards(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        query.validate()?;
        let brawler_id = match query.brawler_ref() {
            Some(brawler) => Some(find_brawler_id(&self.get_brawlers().await?, brawler)?),
            None => None,
        };

        let page: Page<LeaderboardEntry> = self.fetch(query.route(brawler_id)?).await?;
        let mut entries = page.items;
        entries.truncate(query.max_entries());
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub async fn get_brawlers(&self) -> Result<Vec<BrawlerInfo>> {
        let page: Page<BrawlerInfo> = self.fetch(Route::Brawlers).await?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub async fn get_event_rotation(&self) -> Result<Vec<EventSlot>> {
        self.fetch(Route::EventRotation).await
    }
}

#[async_trait]
impl StatsApi for ApiClient {
    async fn get_player(&self, tag: &str) -> Result<Profile> {
        ApiClient::get_player(self, tag).await
    }
    async fn get_club(&self, tag: &str) -> Result<Club> {
        ApiClient::get_club(self, tag).await
    }
    async fn get_club_members(&self, tag: &str) -> Result<Vec<ClubMember>> {
        ApiClient::get_club_members(self, tag).await
    }
    async fn get_battlelogs(&self, tag: &str) -> Result<Vec<BattleLogEntry>> {
        ApiClient::get_battlelogs(self, tag).await
    }
    async fn get_leaderboards(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        ApiClient::get_leaderboards(self, query).await
    }
    async fn get_brawlers(&self) -> Result<Vec<BrawlerInfo>> {
        ApiClient::get_brawlers(self).await
    }
    async fn get_event_rotation(&self) -> Result<Vec<EventSlot>> {
        ApiClient::get_event_rotation(self).await
    }
}
