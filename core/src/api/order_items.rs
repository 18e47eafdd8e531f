//! Order line items.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateOrderItemRequest, Id, NewOrderItem, OrderItem};

/// `/api/order-items` endpoints.
#[derive(Debug)]
pub struct OrderItems<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> OrderItems<'_, T> {
    pub async fn get_by_order_id(&self, order_id: Id) -> Result<Vec<OrderItem>, ApiError> {
        self.dispatcher
            .get(&format!("/api/order-items/order/{order_id}"))
            .await
    }

    /// Posts the item fields followed by `orderId`.
    pub async fn create(&self, order_id: Id, item: &CreateOrderItemRequest) -> Result<OrderItem, ApiError> {
        let body = NewOrderItem { item, order_id };
        self.dispatcher
            .send(HttpMethod::Post, "/api/order-items", &body)
            .await
    }
}
