mod battlelog;
mod brawler;
mod club;
pub(crate) mod common;
mod leaderboard;
mod profile;
mod rotation;

pub use battlelog::*;
pub use brawler::*;
pub use club::*;
pub use common::{parse_api_time, Accessory, Icon, API_TIME_FORMAT};
pub use leaderboard::*;
pub use profile::*;
pub use rotation::*;
