//! User accounts: listing, lookup, signup and login.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{
    CreateUserRequest, Id, LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest, User,
};

/// `/api/users` endpoints.
#[derive(Debug)]
pub struct Users<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Users<'_, T> {
    pub async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        self.dispatcher.get("/api/users").await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<User, ApiError> {
        self.dispatcher.get(&format!("/api/users/{id}")).await
    }

    pub async fn create(&self, user: &CreateUserRequest) -> Result<User, ApiError> {
        self.dispatcher.send(HttpMethod::Post, "/api/users", user).await
    }

    pub async fn update(&self, id: Id, user: &UpdateUserRequest) -> Result<User, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/users/{id}"), user)
            .await
    }

    /// Exchange credentials for a token. Storing the token for later calls is
    /// up to the caller's token store.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, "/api/users/login", credentials)
            .await
    }

    pub async fn register(&self, user: &RegisterRequest) -> Result<User, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, "/api/users/register", user)
            .await
    }
}
