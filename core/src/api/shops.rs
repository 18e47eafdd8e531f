//! Shops and their owners.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateShopRequest, Id, Shop, UpdateShopRequest};

/// `/api/shops` endpoints.
#[derive(Debug)]
pub struct Shops<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Shops<'_, T> {
    pub async fn get_all(&self) -> Result<Vec<Shop>, ApiError> {
        self.dispatcher.get("/api/shops").await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Shop, ApiError> {
        self.dispatcher.get(&format!("/api/shops/{id}")).await
    }

    pub async fn get_by_owner_id(&self, owner_id: Id) -> Result<Vec<Shop>, ApiError> {
        self.dispatcher
            .get(&format!("/api/shops/owner/{owner_id}"))
            .await
    }

    pub async fn create(&self, shop: &CreateShopRequest) -> Result<Shop, ApiError> {
        self.dispatcher.send(HttpMethod::Post, "/api/shops", shop).await
    }

    pub async fn update(&self, id: Id, shop: &UpdateShopRequest) -> Result<Shop, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/shops/{id}"), shop)
            .await
    }
}
