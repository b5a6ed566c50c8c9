//! External store module.
//!
//! The remote store is an opaque collaborator reached over HTTP. The
//! `SquadStore` trait is the seam between the synchronizer and the
//! transport, so tests can substitute a mock without real network
//! requests; `HttpStore` is the production implementation.

mod http;

pub use http::HttpStore;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{
    Clip, CreateClipRequest, CreateMatchRequest, CreateMemberRequest, Match, Member,
};

/// Contract of the remote persistence service.
///
/// Identifier assignment is the store's exclusive responsibility:
/// create calls carry no id and the echoed record is authoritative.
#[async_trait]
pub trait SquadStore: Send + Sync {
    async fn list_clips(&self) -> Result<Vec<Clip>, AppError>;
    async fn list_members(&self) -> Result<Vec<Member>, AppError>;
    async fn list_matches(&self) -> Result<Vec<Match>, AppError>;

    async fn create_clip(&self, request: &CreateClipRequest) -> Result<Clip, AppError>;
    async fn update_clip(&self, clip: &Clip) -> Result<Clip, AppError>;
    async fn delete_clip(&self, id: i64) -> Result<(), AppError>;

    async fn create_member(&self, request: &CreateMemberRequest) -> Result<Member, AppError>;
    async fn update_member(&self, member: &Member) -> Result<Member, AppError>;
    async fn delete_member(&self, id: i64) -> Result<(), AppError>;

    /// Flip the live status of a member, returning the updated record.
    async fn toggle_live(&self, id: i64) -> Result<Member, AppError>;

    async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, AppError>;
    async fn delete_match(&self, id: i64) -> Result<(), AppError>;
}
