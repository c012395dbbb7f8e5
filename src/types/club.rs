use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::Icon;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub tag: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ClubType,
    pub badge_id: Option<u32>,
    pub trophies: Option<u32>,
    pub required_trophies: Option<u32>,
    #[serde(default)]
    pub members: Vec<ClubMember>,
}

impl Club {
    pub fn president(&self) -> Option<&ClubMember> {
        self.members
            .iter()
            .find(|member| member.role == ClubRole::President)
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tag)
    }
}

/// Who may join a club.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClubType {
    Open,
    InviteOnly,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClubType::Open => "Open",
            ClubType::InviteOnly => "Invite Only",
            ClubType::Closed => "Closed",
            ClubType::Unknown => "Unknown",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    pub tag: String,
    pub name: String,
    pub name_color: Option<String>,
    #[serde(default)]
    pub role: ClubRole,
    pub trophies: u32,
    pub icon: Option<Icon>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClubRole {
    Member,
    Senior,
    VicePresident,
    President,
    #[default]
    #[serde(other)]
    Unknown,
}
