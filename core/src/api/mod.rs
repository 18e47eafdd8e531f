//! Per-resource method groups.
//!
//! Each group borrows the client's dispatcher and maps every method to
//! exactly one endpoint: a fixed path template with numeric ids substituted,
//! a fixed verb and fixed request/response types. No group validates input,
//! combines calls or computes anything locally; carts, stock and order state
//! all live on the server.

mod cart_items;
mod carts;
mod order_items;
mod orders;
mod products;
mod profiles;
mod shops;
mod users;

pub use cart_items::CartItems;
pub use carts::Carts;
pub use order_items::OrderItems;
pub use orders::Orders;
pub use products::Products;
pub use profiles::Profiles;
pub use shops::Shops;
pub use users::Users;
