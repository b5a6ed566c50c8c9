//! Clip model matching the frontend Clip interface.

use serde::{Deserialize, Serialize};

/// An uploaded gaming clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Store-assigned identifier; never generated client-side.
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub uploader: String,
    /// Externally hosted video URL.
    pub url: String,
    /// Thumbnail as a data URL, empty string when absent.
    #[serde(default)]
    pub image: String,
    /// ISO calendar date, stamped by the client at creation.
    #[serde(default)]
    pub date: String,
}

impl Clip {
    /// A clip is valid when both required fields are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Locally held form state for a clip that has not been persisted yet.
#[derive(Debug, Clone, Default)]
pub struct ClipDraft {
    pub title: String,
    pub game: String,
    pub uploader: String,
    pub url: String,
    pub image: String,
}

impl ClipDraft {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Request body for creating a new clip. Carries no id; the store
/// assigns one and echoes back the persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClipRequest {
    pub title: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub uploader: String,
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub date: String,
}

impl CreateClipRequest {
    /// Build the submission payload from a draft, stamping the given date.
    pub fn from_draft(draft: &ClipDraft, date: String) -> Self {
        Self {
            title: draft.title.clone(),
            game: draft.game.clone(),
            uploader: draft.uploader.clone(),
            url: draft.url.clone(),
            image: draft.image.clone(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_title_and_url() {
        let mut draft = ClipDraft {
            title: "Insane Clutch".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_valid());
        draft.url = "https://example.com/clip1".to_string();
        assert!(draft.is_valid());
        draft.title = "   ".to_string();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_clip_optional_fields_default() {
        let clip: Clip = serde_json::from_str(
            r#"{"id": 1, "title": "No-Scope Headshot", "url": "https://example.com/clip2"}"#,
        )
        .unwrap();

        assert_eq!(clip.game, "");
        assert_eq!(clip.image, "");
        assert_eq!(clip.date, "");
    }
}
