//! Shopping carts and the items in them.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{Cart, CartItem, CreateCartItemRequest, CreateCartRequest, Id, UpdateCartRequest};

/// `/api/carts` endpoints.
#[derive(Debug)]
pub struct Carts<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Carts<'_, T> {
    /// All carts of a user, one per shop by convention.
    pub async fn get_by_user_id(&self, user_id: Id) -> Result<Vec<Cart>, ApiError> {
        self.dispatcher
            .get(&format!("/api/carts/user/{user_id}"))
            .await
    }

    pub async fn create(&self, cart: &CreateCartRequest) -> Result<Cart, ApiError> {
        self.dispatcher.send(HttpMethod::Post, "/api/carts", cart).await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Cart, ApiError> {
        self.dispatcher.get(&format!("/api/carts/{id}")).await
    }

    pub async fn update(&self, id: Id, cart: &UpdateCartRequest) -> Result<Cart, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/carts/{id}"), cart)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.dispatcher.delete(&format!("/api/carts/{id}")).await
    }

    pub async fn add_item(&self, cart_id: Id, item: &CreateCartItemRequest) -> Result<CartItem, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, &format!("/api/carts/{cart_id}/items"), item)
            .await
    }

    pub async fn get_items(&self, cart_id: Id) -> Result<Vec<CartItem>, ApiError> {
        self.dispatcher
            .get(&format!("/api/carts/{cart_id}/items"))
            .await
    }
}
