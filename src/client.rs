use async_trait::async_trait;

use crate::error::Result;
use crate::rankings::LeaderboardQuery;
use crate::types::{
    BattleLogEntry, BrawlerInfo, Club, ClubMember, EventSlot, LeaderboardEntry, Profile,
};

/// The lookups the stats API offers, in the cooperative calling convention.
///
/// [`ApiClient`](crate::ApiClient) is the real implementation. Code that only
/// needs lookups, like [`LazyClub::resolve`](crate::LazyClub::resolve), takes
/// this trait so it can run against a stand-in.
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn get_player(&self, tag: &str) -> Result<Profile>;
    async fn get_club(&self, tag: &str) -> Result<Club>;
    async fn get_club_members(&self, tag: &str) -> Result<Vec<ClubMember>>;
    async fn get_battlelogs(&self, tag: &str) -> Result<Vec<BattleLogEntry>>;
    async fn get_leaderboards(&self, query: &LeaderboardQuery) -> Result<Vec<LeaderboardEntry>>;
    async fn get_brawlers(&self) -> Result<Vec<BrawlerInfo>>;
    async fn get_event_rotation(&self) -> Result<Vec<EventSlot>>;
}
