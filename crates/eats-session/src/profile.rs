use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Avatar {
    #[default]
    Dog,
    Cat,
}

impl Avatar {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Avatar::Dog => "老實說狗狗",
            Avatar::Cat => "老實說貓貓",
        }
    }
}

impl std::fmt::Display for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Avatar::Dog => write!(f, "dog"),
            Avatar::Cat => write!(f, "cat"),
        }
    }
}

impl FromStr for Avatar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Avatar::Dog),
            "cat" => Ok(Avatar::Cat),
            other => Err(format!("unknown avatar '{other}'; expected dog or cat")),
        }
    }
}

/// A restaurant suggested to the user by a friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRecommendation {
    pub restaurant_id: String,
    /// Display name of the friend who made the suggestion.
    pub from_user: String,
    pub recommended_on: NaiveDate,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Avatar,
    pub created_at: DateTime<Utc>,
    pub friend_recommendations: Vec<FriendRecommendation>,
}

impl UserProfile {
    pub fn add_friend_recommendation(&mut self, recommendation: FriendRecommendation) {
        self.friend_recommendations.push(recommendation);
    }
}

/// Partial profile edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<Avatar>,
}
