//! HTTP implementation of the store contract.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::SquadStore;
use crate::errors::AppError;
use crate::models::{
    Clip, CreateClipRequest, CreateMatchRequest, CreateMemberRequest, Match, Member,
};

/// Store client backed by `reqwest` against a fixed base URL.
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a store response, mapping non-success statuses to `AppError::Store`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AppError::Store {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

/// Check a body-less store response for success.
async fn expect_success(response: reqwest::Response) -> Result<(), AppError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AppError::Store {
            status: status.as_u16(),
            message,
        });
    }
    Ok(())
}

#[async_trait]
impl SquadStore for HttpStore {
    async fn list_clips(&self) -> Result<Vec<Clip>, AppError> {
        let response = self.client.get(self.endpoint("/clips")).send().await?;
        decode(response).await
    }

    async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        let response = self.client.get(self.endpoint("/members")).send().await?;
        decode(response).await
    }

    async fn list_matches(&self) -> Result<Vec<Match>, AppError> {
        let response = self.client.get(self.endpoint("/matches")).send().await?;
        decode(response).await
    }

    async fn create_clip(&self, request: &CreateClipRequest) -> Result<Clip, AppError> {
        let response = self
            .client
            .post(self.endpoint("/clips"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_clip(&self, clip: &Clip) -> Result<Clip, AppError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/clips/{}", clip.id)))
            .json(clip)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_clip(&self, id: i64) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/clips/{}", id)))
            .send()
            .await?;
        expect_success(response).await
    }

    async fn create_member(&self, request: &CreateMemberRequest) -> Result<Member, AppError> {
        let response = self
            .client
            .post(self.endpoint("/members"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_member(&self, member: &Member) -> Result<Member, AppError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/members/{}", member.id)))
            .json(member)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/members/{}", id)))
            .send()
            .await?;
        expect_success(response).await
    }

    async fn toggle_live(&self, id: i64) -> Result<Member, AppError> {
        let response = self
            .client
            .patch(self.endpoint(&format!("/members/{}/toggle-live", id)))
            .send()
            .await?;
        decode(response).await
    }

    async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, AppError> {
        let response = self
            .client
            .post(self.endpoint("/matches"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_match(&self, id: i64) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/matches/{}", id)))
            .send()
            .await?;
        expect_success(response).await
    }
}
