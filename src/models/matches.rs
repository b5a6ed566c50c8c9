//! Match model for the tournament schedule tab.

use serde::{Deserialize, Serialize};

/// Whether a match has already been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Past,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Past => "past",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(MatchStatus::Upcoming),
            "past" => Some(MatchStatus::Past),
            _ => None,
        }
    }
}

/// A scheduled or completed squad match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Store-assigned identifier; never generated client-side.
    pub id: i64,
    pub team1: String,
    pub team2: String,
    /// Scores are absent until the match has been played.
    #[serde(default)]
    pub score1: Option<i64>,
    #[serde(default)]
    pub score2: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub stream_url: String,
}

/// Locally held form state for a match that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct MatchDraft {
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub time: String,
    pub status: MatchStatus,
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self {
            team1: String::new(),
            team2: String::new(),
            date: String::new(),
            time: String::new(),
            status: MatchStatus::Upcoming,
        }
    }
}

impl MatchDraft {
    pub fn is_valid(&self) -> bool {
        !self.team1.trim().is_empty() && !self.team2.trim().is_empty()
    }
}

/// Request body for creating a new match. Carries no id and no scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub team1: String,
    pub team2: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub status: MatchStatus,
}

impl From<&MatchDraft> for CreateMatchRequest {
    fn from(draft: &MatchDraft) -> Self {
        Self {
            team1: draft.team1.clone(),
            team2: draft.team2.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(MatchStatus::from_str("past"), Some(MatchStatus::Past));
        assert_eq!(MatchStatus::from_str("upcoming"), Some(MatchStatus::Upcoming));
        assert_eq!(MatchStatus::from_str("cancelled"), None);
        assert_eq!(MatchStatus::Past.as_str(), "past");
    }

    #[test]
    fn test_draft_requires_both_teams() {
        let mut draft = MatchDraft {
            team1: "Wolves".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_valid());
        draft.team2 = "Blaze Hunters".to_string();
        assert!(draft.is_valid());
    }
}
