//! Orders and their status transitions.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateOrderRequest, Id, Order, OrderStatus, UpdateOrderRequest};

/// `/api/orders` endpoints.
#[derive(Debug)]
pub struct Orders<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Orders<'_, T> {
    pub async fn get_by_user_id(&self, user_id: Id) -> Result<Vec<Order>, ApiError> {
        self.dispatcher
            .get(&format!("/api/orders/user/{user_id}"))
            .await
    }

    pub async fn get_by_shop_id(&self, shop_id: Id) -> Result<Vec<Order>, ApiError> {
        self.dispatcher
            .get(&format!("/api/orders/shop/{shop_id}"))
            .await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Order, ApiError> {
        self.dispatcher.get(&format!("/api/orders/{id}")).await
    }

    pub async fn create(&self, order: &CreateOrderRequest) -> Result<Order, ApiError> {
        self.dispatcher.send(HttpMethod::Post, "/api/orders", order).await
    }

    pub async fn update(&self, id: Id, order: &UpdateOrderRequest) -> Result<Order, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/orders/{id}"), order)
            .await
    }

    /// The body is the bare JSON string of the status, e.g. `"SHIPPED"`.
    pub async fn update_status(&self, id: Id, status: OrderStatus) -> Result<Order, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/orders/{id}/status"), &status)
            .await
    }
}
