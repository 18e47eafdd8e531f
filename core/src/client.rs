//! Entry point of the shop API client.
//!
//! # Design
//! `ShopClient` owns a single `Dispatcher` and hands out cheap borrowed views,
//! one per backend resource. It keeps no state between calls; every method
//! issues exactly one request and concurrent calls never coordinate.

use crate::api::{CartItems, Carts, OrderItems, Orders, Products, Profiles, Shops, Users};
use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::transport::{ReqwestTransport, Transport};

/// Typed client for the users, profiles, shops, products, carts and orders
/// services.
///
/// ```no_run
/// # async fn demo() -> Result<(), shop_client::ApiError> {
/// use shop_client::{ClientConfig, ShopClient};
///
/// let client = ShopClient::new(ClientConfig::from_env());
/// for shop in client.shops().get_all().await? {
///     println!("{}: {}", shop.id, shop.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShopClient<T = ReqwestTransport> {
    dispatcher: Dispatcher<T>,
}

impl ShopClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }
}

impl<T: Transport> ShopClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::with_transport(config, transport),
        }
    }

    /// The underlying dispatcher, for calls outside the fixed endpoint table.
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub fn users(&self) -> Users<'_, T> {
        Users {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn profiles(&self) -> Profiles<'_, T> {
        Profiles {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn shops(&self) -> Shops<'_, T> {
        Shops {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn products(&self) -> Products<'_, T> {
        Products {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn carts(&self) -> Carts<'_, T> {
        Carts {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn cart_items(&self) -> CartItems<'_, T> {
        CartItems {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn orders(&self) -> Orders<'_, T> {
        Orders {
            dispatcher: &self.dispatcher,
        }
    }

    pub fn order_items(&self) -> OrderItems<'_, T> {
        OrderItems {
            dispatcher: &self.dispatcher,
        }
    }
}
