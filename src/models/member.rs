//! Squad member model matching the frontend Member interface.

use serde::{Deserialize, Serialize};

/// A squad member with an optional live stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Store-assigned identifier; never generated client-side.
    pub id: i64,
    pub name: String,
    /// Twitch profile URL.
    pub twitch: String,
    /// Sole liveness predicate; no other field implies the member is live.
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub stream_title: String,
    #[serde(default)]
    pub game: String,
    /// Avatar as a data URL, empty string when absent.
    #[serde(default)]
    pub image: String,
}

impl Member {
    /// A member is valid when both required fields are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.twitch.trim().is_empty()
    }
}

/// Locally held form state for a member that has not been persisted yet.
#[derive(Debug, Clone, Default)]
pub struct MemberDraft {
    pub name: String,
    pub twitch: String,
    pub is_live: bool,
    pub stream_title: String,
    pub game: String,
    pub image: String,
}

impl MemberDraft {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.twitch.trim().is_empty()
    }
}

/// Request body for creating a new member. Carries no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub twitch: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub stream_title: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub image: String,
}

impl From<&MemberDraft> for CreateMemberRequest {
    fn from(draft: &MemberDraft) -> Self {
        Self {
            name: draft.name.clone(),
            twitch: draft.twitch.clone(),
            is_live: draft.is_live,
            stream_title: draft.stream_title.clone(),
            game: draft.game.clone(),
            image: draft.image.clone(),
        }
    }
}
