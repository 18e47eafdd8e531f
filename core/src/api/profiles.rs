//! User profiles, looked up by user id.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateProfileRequest, Id, Profile, UpdateProfileRequest};

/// `/api/profiles` endpoints.
#[derive(Debug)]
pub struct Profiles<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Profiles<'_, T> {
    pub async fn get_by_user_id(&self, user_id: Id) -> Result<Profile, ApiError> {
        self.dispatcher
            .get(&format!("/api/profiles/user/{user_id}"))
            .await
    }

    pub async fn create(&self, profile: &CreateProfileRequest) -> Result<Profile, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, "/api/profiles", profile)
            .await
    }

    pub async fn update(&self, id: Id, profile: &UpdateProfileRequest) -> Result<Profile, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/profiles/{id}"), profile)
            .await
    }
}
