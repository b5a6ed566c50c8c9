//! Entity synchronizer.
//!
//! Owns the local mirrors of the clip, member, and match collections
//! and executes mutating operations against the external store. Every
//! mutation is call-then-apply: the mirror is only touched after the
//! store confirmed the operation, so a failed call never needs a
//! rollback. Store failures are logged here and returned to the caller;
//! the mirror stays as it was.

use chrono::Local;

use crate::errors::AppError;
use crate::models::{
    Clip, ClipDraft, CreateClipRequest, CreateMatchRequest, CreateMemberRequest, Match, MatchDraft,
    MatchStatus, Member, MemberDraft,
};
use crate::store::SquadStore;

/// Outcome of the initial load.
///
/// A failed load against an empty store would otherwise be
/// indistinguishable from a successful one; the explicit `Failed`
/// state keeps the two apart. The not-loaded to loaded transition
/// happens regardless of fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loaded,
    Failed,
}

/// Local mirrors of the remote collections plus the operations that
/// keep them consistent with the store.
pub struct Synchronizer<S> {
    store: S,
    clips: Vec<Clip>,
    members: Vec<Member>,
    matches: Vec<Match>,
    load_state: LoadState,
}

impl<S: SquadStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clips: Vec::new(),
            members: Vec::new(),
            matches: Vec::new(),
            load_state: LoadState::NotLoaded,
        }
    }

    /// Fetch all collections concurrently and populate the mirrors.
    ///
    /// Each mirror is populated from whichever fetches succeeded; a
    /// single failure puts the synchronizer into `LoadState::Failed`
    /// but does not discard the collections that did arrive. The
    /// mirrors are never re-fetched after this call.
    pub async fn load(&mut self) {
        let (clips, members, matches) = tokio::join!(
            self.store.list_clips(),
            self.store.list_members(),
            self.store.list_matches(),
        );

        let mut failed = false;

        match clips {
            Ok(clips) => self.clips = clips,
            Err(e) => {
                tracing::warn!("Failed to load clips: {}", e);
                failed = true;
            }
        }
        match members {
            Ok(members) => self.members = members,
            Err(e) => {
                tracing::warn!("Failed to load members: {}", e);
                failed = true;
            }
        }
        match matches {
            Ok(matches) => self.matches = matches,
            Err(e) => {
                tracing::warn!("Failed to load matches: {}", e);
                failed = true;
            }
        }

        self.load_state = if failed {
            LoadState::Failed
        } else {
            LoadState::Loaded
        };
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    // ==================== CLIP OPERATIONS ====================

    /// Submit a clip draft, stamping the current calendar date.
    ///
    /// The store-returned record carries the authoritative id and is
    /// prepended to the mirror (newest-first).
    pub async fn create_clip(&mut self, draft: &ClipDraft) -> Result<(), AppError> {
        if !draft.is_valid() {
            return Err(AppError::Validation(
                "Clip title and URL are required".to_string(),
            ));
        }

        let date = Local::now().date_naive().to_string();
        let request = CreateClipRequest::from_draft(draft, date);

        match self.store.create_clip(&request).await {
            Ok(clip) => {
                self.clips.insert(0, clip);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to create clip: {}", e);
                Err(e)
            }
        }
    }

    /// Submit a full edited clip, including its id. On success the
    /// store-returned record replaces the local one in place.
    pub async fn update_clip(&mut self, clip: Clip) -> Result<(), AppError> {
        if !clip.is_valid() {
            return Err(AppError::Validation(
                "Clip title and URL are required".to_string(),
            ));
        }

        match self.store.update_clip(&clip).await {
            Ok(updated) => {
                if let Some(existing) = self.clips.iter_mut().find(|c| c.id == updated.id) {
                    *existing = updated;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to update clip {}: {}", clip.id, e);
                Err(e)
            }
        }
    }

    /// Delete a clip unconditionally. The store call is issued even
    /// for ids absent from the mirror; the local filter is then a no-op.
    pub async fn delete_clip(&mut self, id: i64) -> Result<(), AppError> {
        match self.store.delete_clip(id).await {
            Ok(()) => {
                self.clips.retain(|c| c.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete clip {}: {}", id, e);
                Err(e)
            }
        }
    }

    // ==================== MEMBER OPERATIONS ====================

    pub async fn create_member(&mut self, draft: &MemberDraft) -> Result<(), AppError> {
        if !draft.is_valid() {
            return Err(AppError::Validation(
                "Member name and Twitch URL are required".to_string(),
            ));
        }

        match self.store.create_member(&CreateMemberRequest::from(draft)).await {
            Ok(member) => {
                self.members.insert(0, member);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to create member: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update_member(&mut self, member: Member) -> Result<(), AppError> {
        if !member.is_valid() {
            return Err(AppError::Validation(
                "Member name and Twitch URL are required".to_string(),
            ));
        }

        match self.store.update_member(&member).await {
            Ok(updated) => {
                if let Some(existing) = self.members.iter_mut().find(|m| m.id == updated.id) {
                    *existing = updated;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to update member {}: {}", member.id, e);
                Err(e)
            }
        }
    }

    pub async fn delete_member(&mut self, id: i64) -> Result<(), AppError> {
        match self.store.delete_member(id).await {
            Ok(()) => {
                self.members.retain(|m| m.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete member {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Flip a member's live status through the store.
    ///
    /// Only `is_live` of the matching local record is overwritten with
    /// the store-returned value; every other local field keeps its
    /// pre-call value even if the store changed it server-side.
    pub async fn toggle_live(&mut self, id: i64) -> Result<(), AppError> {
        match self.store.toggle_live(id).await {
            Ok(updated) => {
                if let Some(existing) = self.members.iter_mut().find(|m| m.id == updated.id) {
                    existing.is_live = updated.is_live;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to toggle live status for member {}: {}", id, e);
                Err(e)
            }
        }
    }

    // ==================== MATCH OPERATIONS ====================

    pub async fn create_match(&mut self, draft: &MatchDraft) -> Result<(), AppError> {
        if !draft.is_valid() {
            return Err(AppError::Validation(
                "Both team names are required".to_string(),
            ));
        }

        match self.store.create_match(&CreateMatchRequest::from(draft)).await {
            Ok(m) => {
                self.matches.insert(0, m);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to create match: {}", e);
                Err(e)
            }
        }
    }

    pub async fn delete_match(&mut self, id: i64) -> Result<(), AppError> {
        match self.store.delete_match(id).await {
            Ok(()) => {
                self.matches.retain(|m| m.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete match {}: {}", id, e);
                Err(e)
            }
        }
    }

    // ==================== DERIVED VIEWS ====================

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Members currently live. Recomputed on every call; `is_live` is
    /// the sole predicate.
    pub fn live_members(&self) -> Vec<&Member> {
        self.members.iter().filter(|m| m.is_live).collect()
    }

    /// Matches filtered by status; `None` returns all of them.
    pub fn matches_with_status(&self, status: Option<MatchStatus>) -> Vec<&Match> {
        match status {
            None => self.matches.iter().collect(),
            Some(s) => self.matches.iter().filter(|m| m.status == s).collect(),
        }
    }
}
