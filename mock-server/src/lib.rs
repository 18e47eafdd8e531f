//! In-memory stand-in for the shop backend services.
//!
//! Records are stored as JSON objects keyed by a numeric id drawn from one
//! shared sequence. Handlers only do what a client test needs: assign ids and
//! timestamps, fill resource defaults, merge patches and filter by owner.
//!
//! Requests without an `Authorization` header are served anonymously. A
//! request that carries one must present a bearer token issued by
//! `/api/users/login`, otherwise it is rejected with 401.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub type Record = Map<String, Value>;
pub type Table = BTreeMap<i64, Record>;

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    pub users: Table,
    pub profiles: Table,
    pub shops: Table,
    pub products: Table,
    pub carts: Table,
    pub cart_items: Table,
    pub orders: Table,
    pub order_items: Table,
    pub tokens: HashMap<String, i64>,
}

impl Store {
    fn insert(&mut self, table: fn(&mut Store) -> &mut Table, mut record: Record, defaults: &[(&str, Value)]) -> Value {
        self.next_id += 1;
        let id = self.next_id;
        let now = timestamp();
        for (key, value) in defaults {
            if record.get(*key).map_or(true, Value::is_null) {
                record.insert(key.to_string(), value.clone());
            }
        }
        record.insert("id".to_string(), json!(id));
        record.insert("createdAt".to_string(), json!(now));
        record.insert("updatedAt".to_string(), json!(now));
        table(self).insert(id, record.clone());
        Value::Object(record)
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult = Result<Json<Value>, StatusCode>;
type Created = Result<(StatusCode, Json<Value>), StatusCode>;

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
        .route("/api/users/{id}", get(get_user).put(update_user))
        .route("/api/profiles", post(create_profile))
        .route("/api/profiles/user/{id}", get(get_profile_by_user))
        .route("/api/profiles/{id}", put(update_profile))
        .route("/api/shops", get(list_shops).post(create_shop))
        .route("/api/shops/owner/{id}", get(list_shops_by_owner))
        .route("/api/shops/{id}", get(get_shop).put(update_shop))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/shop/{id}", get(list_products_by_shop))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/products/{id}/stock", put(update_stock))
        .route("/api/carts", post(create_cart))
        .route("/api/carts/user/{id}", get(list_carts_by_user))
        .route("/api/carts/{id}", get(get_cart).put(update_cart).delete(delete_cart))
        .route("/api/carts/{id}/items", get(list_cart_items).post(add_cart_item))
        .route("/api/cart-items/{id}", put(update_cart_item).delete(delete_cart_item))
        .route("/api/orders", post(create_order))
        .route("/api/orders/user/{id}", get(list_orders_by_user))
        .route("/api/orders/shop/{id}", get(list_orders_by_shop))
        .route("/api/orders/{id}", get(get_order).put(update_order))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route("/api/order-items", post(create_order_item))
        .route("/api/order-items/order/{id}", get(list_order_items_by_order))
        .layer(middleware::from_fn_with_state(db.clone(), check_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn check_bearer(State(db): State<Db>, request: Request, next: Next) -> Result<Response, StatusCode> {
    let bearer = request.headers().get(header::AUTHORIZATION).map(|value| {
        value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string)
    });
    if let Some(token) = bearer {
        let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
        if !db.read().await.tokens.contains_key(&token) {
            tracing::debug!("rejected unknown bearer token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    }
    Ok(next.run(request).await)
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn all(table: &Table) -> Json<Value> {
    Json(Value::Array(table.values().cloned().map(Value::Object).collect()))
}

fn filter_by(table: &Table, field: &str, id: i64) -> Json<Value> {
    Json(Value::Array(
        table
            .values()
            .filter(|r| r.get(field).and_then(Value::as_i64) == Some(id))
            .cloned()
            .map(Value::Object)
            .collect(),
    ))
}

fn find(table: &Table, id: i64) -> ApiResult {
    table
        .get(&id)
        .cloned()
        .map(|r| Json(Value::Object(r)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Merge the non-null fields of `patch` into record `id`.
fn patch(table: &mut Table, id: i64, patch: Record) -> ApiResult {
    let record = table.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    for (key, value) in patch {
        if key == "id" || value.is_null() {
            continue;
        }
        record.insert(key, value);
    }
    record.insert("updatedAt".to_string(), json!(timestamp()));
    Ok(Json(Value::Object(record.clone())))
}

fn remove(table: &mut Table, id: i64) -> Result<StatusCode, StatusCode> {
    table
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

fn created(value: Value) -> Created {
    Ok((StatusCode::CREATED, Json(value)))
}

// --- users ---

fn public_user(mut user: Record) -> Value {
    user.remove("password");
    Value::Object(user)
}

fn strip_password(Json(value): Json<Value>) -> Json<Value> {
    match value {
        Value::Object(user) => Json(public_user(user)),
        other => Json(other),
    }
}

async fn list_users(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(Value::Array(store.users.values().cloned().map(public_user).collect()))
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    find(&db.read().await.users, id).map(strip_password)
}

async fn insert_user(db: &Db, user: Record) -> Created {
    let mut store = db.write().await;
    let taken = user
        .get("email")
        .is_some_and(|email| store.users.values().any(|u| u.get("email") == Some(email)));
    if taken {
        return Err(StatusCode::CONFLICT);
    }
    let value = store.insert(|s| &mut s.users, user, &[("role", json!("CUSTOMER"))]);
    created(strip_password(Json(value)).0)
}

async fn create_user(State(db): State<Db>, Json(user): Json<Record>) -> Created {
    insert_user(&db, user).await
}

async fn register(State(db): State<Db>, Json(user): Json<Record>) -> Created {
    insert_user(&db, user).await
}

async fn update_user(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.users, id, body).map(strip_password)
}

async fn login(State(db): State<Db>, Json(credentials): Json<LoginRequest>) -> ApiResult {
    let mut store = db.write().await;
    let user = store
        .users
        .values()
        .find(|u| {
            u.get("email").and_then(Value::as_str) == Some(credentials.email.as_str())
                && u.get("password").and_then(Value::as_str) == Some(credentials.password.as_str())
        })
        .cloned()
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let user_id = user.get("id").and_then(Value::as_i64).unwrap_or_default();
    let token = Uuid::new_v4().to_string();
    store.tokens.insert(token.clone(), user_id);
    tracing::debug!(user_id, "issued token");
    Ok(Json(json!({ "user": public_user(user), "token": token })))
}

// --- profiles ---

async fn get_profile_by_user(State(db): State<Db>, Path(user_id): Path<i64>) -> ApiResult {
    let store = db.read().await;
    store
        .profiles
        .values()
        .find(|p| p.get("userId").and_then(Value::as_i64) == Some(user_id))
        .cloned()
        .map(|p| Json(Value::Object(p)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_profile(State(db): State<Db>, Json(profile): Json<Record>) -> Created {
    created(db.write().await.insert(|s| &mut s.profiles, profile, &[]))
}

async fn update_profile(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.profiles, id, body)
}

// --- shops ---

async fn list_shops(State(db): State<Db>) -> Json<Value> {
    all(&db.read().await.shops)
}

async fn list_shops_by_owner(State(db): State<Db>, Path(owner_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.shops, "ownerId", owner_id)
}

async fn get_shop(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    find(&db.read().await.shops, id)
}

async fn create_shop(State(db): State<Db>, Json(shop): Json<Record>) -> Created {
    created(db.write().await.insert(|s| &mut s.shops, shop, &[("isActive", json!(true))]))
}

async fn update_shop(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.shops, id, body)
}

// --- products ---

async fn list_products(State(db): State<Db>) -> Json<Value> {
    all(&db.read().await.products)
}

async fn list_products_by_shop(State(db): State<Db>, Path(shop_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.products, "shopId", shop_id)
}

async fn get_product(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    find(&db.read().await.products, id)
}

async fn create_product(State(db): State<Db>, Json(product): Json<Record>) -> Created {
    let defaults = [("isActive", json!(true)), ("images", json!([]))];
    created(db.write().await.insert(|s| &mut s.products, product, &defaults))
}

async fn update_product(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.products, id, body)
}

async fn delete_product(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    remove(&mut db.write().await.products, id)
}

async fn update_stock(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    let stock = body
        .get("stock")
        .filter(|v| v.is_i64())
        .cloned()
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    let mut update = Record::new();
    update.insert("stock".to_string(), stock);
    patch(&mut db.write().await.products, id, update)
}

// --- carts ---

async fn list_carts_by_user(State(db): State<Db>, Path(user_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.carts, "userId", user_id)
}

async fn create_cart(State(db): State<Db>, Json(cart): Json<Record>) -> Created {
    let defaults = [("totalAmount", json!(0.0)), ("itemCount", json!(0))];
    created(db.write().await.insert(|s| &mut s.carts, cart, &defaults))
}

async fn get_cart(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    find(&db.read().await.carts, id)
}

async fn update_cart(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.carts, id, body)
}

async fn delete_cart(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let status = remove(&mut store.carts, id)?;
    store
        .cart_items
        .retain(|_, item| item.get("cartId").and_then(Value::as_i64) != Some(id));
    Ok(status)
}

async fn list_cart_items(State(db): State<Db>, Path(cart_id): Path<i64>) -> ApiResult {
    let store = db.read().await;
    if !store.carts.contains_key(&cart_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(filter_by(&store.cart_items, "cartId", cart_id))
}

async fn add_cart_item(State(db): State<Db>, Path(cart_id): Path<i64>, Json(mut item): Json<Record>) -> Created {
    let mut store = db.write().await;
    if !store.carts.contains_key(&cart_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let price = item
        .get("productId")
        .and_then(Value::as_i64)
        .and_then(|pid| store.products.get(&pid))
        .and_then(|p| p.get("price").cloned())
        .unwrap_or(json!(0.0));
    item.insert("cartId".to_string(), json!(cart_id));
    item.insert("price".to_string(), price);
    created(store.insert(|s| &mut s.cart_items, item, &[]))
}

async fn update_cart_item(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.cart_items, id, body)
}

async fn delete_cart_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    remove(&mut db.write().await.cart_items, id)
}

// --- orders ---

async fn list_orders_by_user(State(db): State<Db>, Path(user_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.orders, "userId", user_id)
}

async fn list_orders_by_shop(State(db): State<Db>, Path(shop_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.orders, "shopId", shop_id)
}

async fn get_order(State(db): State<Db>, Path(id): Path<i64>) -> ApiResult {
    find(&db.read().await.orders, id)
}

async fn create_order(State(db): State<Db>, Json(order): Json<Record>) -> Created {
    let defaults = [("status", json!("PENDING")), ("paymentStatus", json!("PENDING"))];
    created(db.write().await.insert(|s| &mut s.orders, order, &defaults))
}

async fn update_order(State(db): State<Db>, Path(id): Path<i64>, Json(body): Json<Record>) -> ApiResult {
    patch(&mut db.write().await.orders, id, body)
}

async fn update_order_status(State(db): State<Db>, Path(id): Path<i64>, Json(status): Json<String>) -> ApiResult {
    let mut update = Record::new();
    update.insert("status".to_string(), Value::String(status));
    patch(&mut db.write().await.orders, id, update)
}

// --- order items ---

async fn list_order_items_by_order(State(db): State<Db>, Path(order_id): Path<i64>) -> Json<Value> {
    filter_by(&db.read().await.order_items, "orderId", order_id)
}

async fn create_order_item(State(db): State<Db>, Json(item): Json<Record>) -> Created {
    let mut store = db.write().await;
    let order_id = item
        .get("orderId")
        .and_then(Value::as_i64)
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    if !store.orders.contains_key(&order_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    created(store.insert(|s| &mut s.order_items, item, &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn insert_assigns_sequential_ids_across_tables() {
        let mut store = Store::default();
        let a = store.insert(|s| &mut s.shops, record(json!({"name": "A"})), &[]);
        let b = store.insert(|s| &mut s.products, record(json!({"name": "B"})), &[]);
        assert_eq!(a["id"], 1);
        assert_eq!(b["id"], 2);
        assert!(a["createdAt"].is_string());
    }

    #[test]
    fn insert_fills_missing_defaults_only() {
        let mut store = Store::default();
        let defaults = [("status", json!("PENDING")), ("paymentStatus", json!("PENDING"))];
        let order = store.insert(|s| &mut s.orders, record(json!({"paymentStatus": "PAID"})), &defaults);
        assert_eq!(order["status"], "PENDING");
        assert_eq!(order["paymentStatus"], "PAID");
    }

    #[test]
    fn patch_skips_nulls_and_id() {
        let mut table = Table::new();
        table.insert(1, record(json!({"id": 1, "name": "Old", "city": "Pune"})));
        let Json(updated) = patch(&mut table, 1, record(json!({"id": 99, "name": "New", "city": null}))).unwrap();
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["name"], "New");
        assert_eq!(updated["city"], "Pune");
    }

    #[test]
    fn patch_missing_record_is_not_found() {
        let mut table = Table::new();
        assert_eq!(patch(&mut table, 5, Record::new()).unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn public_user_hides_password() {
        let user = public_user(record(json!({"id": 1, "password": "pw"})));
        assert!(user.get("password").is_none());
    }

    #[test]
    fn filter_by_matches_numeric_field() {
        let mut table = Table::new();
        table.insert(1, record(json!({"id": 1, "shopId": 3})));
        table.insert(2, record(json!({"id": 2, "shopId": 4})));
        let Json(found) = filter_by(&table, "shopId", 4);
        assert_eq!(found, json!([{"id": 2, "shopId": 4}]));
    }
}
