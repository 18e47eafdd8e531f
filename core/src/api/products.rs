//! Product catalogue and stock levels.

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateProductRequest, Id, Product, StockUpdate, UpdateProductRequest};

/// `/api/products` endpoints.
#[derive(Debug)]
pub struct Products<'a, T> {
    pub(crate) dispatcher: &'a Dispatcher<T>,
}

impl<T: Transport> Products<'_, T> {
    pub async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        self.dispatcher.get("/api/products").await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Product, ApiError> {
        self.dispatcher.get(&format!("/api/products/{id}")).await
    }

    pub async fn get_by_shop_id(&self, shop_id: Id) -> Result<Vec<Product>, ApiError> {
        self.dispatcher
            .get(&format!("/api/products/shop/{shop_id}"))
            .await
    }

    pub async fn create(&self, product: &CreateProductRequest) -> Result<Product, ApiError> {
        self.dispatcher
            .send(HttpMethod::Post, "/api/products", product)
            .await
    }

    pub async fn update(&self, id: Id, product: &UpdateProductRequest) -> Result<Product, ApiError> {
        self.dispatcher
            .send(HttpMethod::Put, &format!("/api/products/{id}"), product)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.dispatcher.delete(&format!("/api/products/{id}")).await
    }

    /// Set the absolute stock level; the body is `{"stock": n}`.
    pub async fn update_stock(&self, id: Id, stock: i32) -> Result<Product, ApiError> {
        self.dispatcher
            .send(
                HttpMethod::Put,
                &format!("/api/products/{id}/stock"),
                &StockUpdate { stock },
            )
            .await
    }
}
