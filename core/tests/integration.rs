//! Full shopping lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP with the default reqwest transport: register, log in, store the token,
//! check it reaches the server, open a shop, stock it, fill a cart, place an order and clean up.

use std::sync::Arc;

use shop_client::*;

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

#[tokio::test]
async fn shopping_lifecycle() {
    let base_url = start_server().await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ShopClient::new(ClientConfig::new(&base_url).with_token_store(tokens.clone()));

    // Step 1: register a seller and log in.
    let seller = client
        .users()
        .register(&RegisterRequest {
            name: "Meera".to_string(),
            email: "meera@example.in".to_string(),
            password: "hunter2".to_string(),
            role: Some(RegisterRole::Seller),
        })
        .await
        .unwrap();
    assert_eq!(seller.role, Role::Seller);
    assert!(seller.password.is_none());

    let login = client
        .users()
        .login(&LoginRequest {
            email: "meera@example.in".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.id, seller.id);
    tokens.set(login.token);

    // Step 2: wrong password is a RequestFailed with status 401.
    let err = client
        .users()
        .login(&LoginRequest {
            email: "meera@example.in".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().starts_with("POST /api/users/login -> 401"));

    // Step 3: the token travels on the wire. A forged token is rejected by
    // the server, and with no token the header is gone again.
    let issued = tokens.token().unwrap();
    tokens.set("forged");
    let err = client.shops().get_all().await.unwrap_err();
    assert_eq!(err.to_string(), "GET /api/shops -> 401: ");
    tokens.clear();
    assert!(client.shops().get_all().await.unwrap().is_empty());
    tokens.set(issued);
    assert!(client.shops().get_all().await.unwrap().is_empty());

    // Step 4: profile.
    let profile = client
        .profiles()
        .create(&CreateProfileRequest {
            user_id: seller.id,
            first_name: "Meera".to_string(),
            last_name: "Iyer".to_string(),
            phone: None,
            address: None,
            city: Some("Chennai".to_string()),
            state: None,
            zip_code: None,
            country: Some("IN".to_string()),
            avatar: None,
        })
        .await
        .unwrap();
    let updated = client
        .profiles()
        .update(
            profile.id,
            &UpdateProfileRequest {
                phone: Some("+91 98400 00000".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.city.as_deref(), Some("Chennai"));
    assert_eq!(
        client.profiles().get_by_user_id(seller.id).await.unwrap(),
        updated
    );

    // Step 5: shop and products.
    let shop = client
        .shops()
        .create(&CreateShopRequest {
            name: "Meera's Silks".to_string(),
            description: "Kanchipuram silk".to_string(),
            owner_id: seller.id,
            address: "1 T Nagar".to_string(),
            city: "Chennai".to_string(),
            state: "TN".to_string(),
            zip_code: "600017".to_string(),
            country: "IN".to_string(),
            phone: None,
            email: None,
            website: None,
            logo: None,
        })
        .await
        .unwrap();
    assert!(shop.is_active);
    assert_eq!(client.shops().get_by_owner_id(seller.id).await.unwrap(), vec![shop.clone()]);

    let saree = client
        .products()
        .create(&CreateProductRequest {
            name: "Saree".to_string(),
            description: "Pure silk".to_string(),
            price: 12_500.0,
            stock: 3,
            category: "Apparel".to_string(),
            brand: None,
            sku: None,
            images: vec!["front.jpg".to_string(), "drape.jpg".to_string()],
            shop_id: shop.id,
        })
        .await
        .unwrap();
    assert_eq!(saree.images, vec!["front.jpg", "drape.jpg"]);

    let restocked = client.products().update_stock(saree.id, 10).await.unwrap();
    assert_eq!(restocked.stock, 10);
    assert_eq!(format_currency_inr(Some(restocked.price)), "₹12,500.00");

    // Step 6: cart.
    let cart = client
        .carts()
        .create(&CreateCartRequest {
            user_id: seller.id,
            shop_id: shop.id,
        })
        .await
        .unwrap();
    let item = client
        .cart_items()
        .add(cart.id, &CreateCartItemRequest { product_id: saree.id, quantity: 1 })
        .await
        .unwrap();
    assert_eq!(item.price, 12_500.0);

    let item = client
        .cart_items()
        .update(
            item.id,
            &UpdateCartItemFullRequest {
                cart_id: cart.id,
                product_id: saree.id,
                quantity: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(item.quantity, 2);
    assert_eq!(client.carts().get_items(cart.id).await.unwrap(), vec![item.clone()]);

    client.cart_items().remove(item.id).await.unwrap();
    assert!(client.cart_items().get_by_cart_id(cart.id).await.unwrap().is_empty());

    // Step 7: order.
    let order = client
        .orders()
        .create(&CreateOrderRequest {
            user_id: seller.id,
            shop_id: shop.id,
            total_amount: 25_000.0,
            shipping_address: "1 T Nagar, Chennai".to_string(),
            payment_method: "UPI".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);

    let line = client
        .order_items()
        .create(
            order.id,
            &CreateOrderItemRequest {
                product_id: saree.id,
                quantity: 2,
                price: 12_500.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(line.order_id, order.id);
    assert_eq!(client.order_items().get_by_order_id(order.id).await.unwrap(), vec![line]);

    let paid = client
        .orders()
        .update(
            order.id,
            &UpdateOrderRequest {
                status: None,
                payment_status: Some(PaymentStatus::Paid),
            },
        )
        .await
        .unwrap();
    assert_eq!(paid.status, OrderStatus::Pending);
    assert_eq!(paid.payment_status, PaymentStatus::Paid);

    let shipped = client.orders().update_status(order.id, OrderStatus::Shipped).await.unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(client.orders().get_by_shop_id(shop.id).await.unwrap().len(), 1);
    assert_eq!(client.orders().get_by_user_id(seller.id).await.unwrap(), vec![shipped]);

    // Step 8: deletes resolve with no value, then lookups fail with 404.
    client.carts().delete(cart.id).await.unwrap();
    client.products().delete(saree.id).await.unwrap();

    let err = client.products().get_by_id(saree.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        format!("GET /api/products/{} -> 404: ", saree.id)
    );
    assert!(client.carts().get_by_user_id(seller.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ShopClient::new(ClientConfig::new(&format!("http://{addr}")));
    let err = client.shops().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
