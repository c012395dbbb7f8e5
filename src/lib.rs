//! Client for the Brawl Stars stats API.
//!
//! - [`ApiClient`]: async lookups, for use on a tokio runtime.
//! - [`BlockingApiClient`]: the same lookups, blocking the calling thread.
//!
//! Both take an API token from <https://developer.brawlstars.com> and map the
//! JSON answers into the records in [`types`]. A profile's club is fetched
//! only when asked for, see [`LazyClub`].

pub use api_client::ApiClient;
pub use blocking::BlockingApiClient;
pub use client::StatsApi;
pub use config::Config;
pub use error::{EnvVarError, Error, Result};
pub use rankings::{BrawlerRef, LeaderboardMode, LeaderboardQuery};
pub use tag::normalize_tag;
pub use types::*;

mod api_client;
pub mod blocking;
mod client;
pub mod config;
mod error;
mod http;
pub mod rankings;
mod tag;
pub mod types;
