//! Cart line items addressed by their own id.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CartItem, CreateCartItemRequest, Id, UpdateCartItemFullRequest};

/// Cart item endpoints. Listing and adding go through the owning cart's
/// `/items` collection; updating and removing address `/api/cart-items/{id}`.
#[derive(Debug)]
pub struct CartItems<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> CartItems<'_, T> {
    pub async fn get_by_cart_id(&self, cart_id: Id) -> Result<Vec<CartItem>, ApiError> {
        self.dispatcher
            .get(&format!("/api/carts/{cart_id}/items"))
            .await
    }

    pub async fn add(&self, cart_id: Id, item: &CreateCartItemRequest) -> Result<CartItem, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, &format!("/api/carts/{cart_id}/items"), item)
            .await
    }

    /// The backend replaces the whole item, so the full payload is required
    /// even when only the quantity changes.
    pub async fn update(&self, item_id: Id, item: &UpdateCartItemFullRequest) -> Result<CartItem, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/cart-items/{item_id}"), item)
            .await
    }

    pub async fn remove(&self, item_id: Id) -> Result<(), ApiError> {
        self.dispatcher
            .delete(&format!("/api/cart-items/{item_id}"))
            .await
    }
}
