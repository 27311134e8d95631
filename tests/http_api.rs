use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use demo_shop_api::{catalog::Catalog, models::Product, routes::create_router, state::AppState};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Catalog::new(vec![
        Product {
            id: 1,
            name: "Widget".into(),
            price: Decimal::from(10),
            description: None,
        },
        Product {
            id: 2,
            name: "Gadget".into(),
            price: Decimal::from(25),
            description: Some("Does gadget things".into()),
        },
        Product {
            id: 3,
            name: "Gizmo".into(),
            price: Decimal::new(999, 2),
            description: None,
        },
    ])
    .expect("catalog");
    create_router(AppState::in_memory(catalog))
}

async fn raw(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = raw(app, method, uri, body.map(|b| b.to_string())).await;
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn home_and_product_endpoints() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Welcome to our E-commerce Website" }));

    let (status, body) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().map(Vec::len), Some(3));

    let (status, body) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Widget", "price": 10 }));

    let (_, body) = send(&app, Method::GET, "/products/2", None).await;
    assert_eq!(body["description"], "Does gadget things");

    let (status, body) = send(&app, Method::GET, "/products/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Product not found" }));

    let (status, body) = send(&app, Method::GET, "/products/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn widget_cart_and_checkout_scenario() {
    let app = app();
    let add = json!({ "user_id": 5, "item": { "product_id": 1, "quantity": 2 } });

    let (status, body) = send(&app, Method::POST, "/cart", Some(add)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Product added successfully",
            "cart": [{ "product_id": 1, "quantity": 2 }]
        })
    );

    let (_, body) = send(&app, Method::GET, "/cart/5", None).await;
    assert_eq!(
        body,
        json!({ "user_id": 5, "cart": [{ "product_id": 1, "quantity": 2 }] })
    );

    let expected = json!({
        "user_id": 5,
        "items": [{ "product_id": 1, "name": "Widget", "price": 10, "quantity": 2, "subtotal": 20 }],
        "total": 20
    });
    let (status, first) = send(&app, Method::POST, "/checkout/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, expected);

    let (_, second) = send(&app, Method::POST, "/checkout/5", None).await;
    assert_eq!(second, expected);
}

#[tokio::test]
async fn repeated_add_reports_quantity_update() {
    let app = app();
    for quantity in [2, 3] {
        let add = json!({ "user_id": 1, "item": { "product_id": 2, "quantity": quantity } });
        send(&app, Method::POST, "/cart", Some(add)).await;
    }

    let add = json!({ "user_id": 1, "item": { "product_id": 2, "quantity": 0 } });
    let (_, body) = send(&app, Method::POST, "/cart", Some(add)).await;
    assert_eq!(
        body,
        json!({
            "message": "Product quantity updated",
            "cart": [{ "product_id": 2, "quantity": 5 }]
        })
    );
}

#[tokio::test]
async fn unknown_product_and_empty_cart_use_soft_responses() {
    let app = app();
    let add = json!({ "user_id": 7, "item": { "product_id": 99, "quantity": 1 } });

    let (status, body) = send(&app, Method::POST, "/cart", Some(add)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Invalid product ID. Product not found!" }));

    let (_, body) = send(&app, Method::GET, "/cart/7", None).await;
    assert_eq!(body, json!({ "message": "Cart is empty", "cart": [] }));

    let (status, body) = send(&app, Method::POST, "/checkout/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Cart is empty", "order_summary": [] }));
}

#[tokio::test]
async fn register_then_login() {
    let app = app();
    let user = json!({
        "id": 1,
        "username": "ada",
        "email": "ada@example.com",
        "password": "s3cret"
    });

    let (status, body) = send(&app, Method::POST, "/register", Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "You're successfully registered!",
            "user": { "id": 1, "username": "ada", "email": "ada@example.com" }
        })
    );

    let (status, body) = send(&app, Method::POST, "/login", Some(user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Login Successful!" }));

    let wrong = json!({ "username": "ada", "password": "nope" });
    let (status, body) = send(&app, Method::POST, "/login", Some(wrong)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Invalid username or password!!!" }));
}

#[tokio::test]
async fn malformed_bodies_are_unprocessable() {
    let app = app();

    let (status, bytes) = raw(&app, Method::POST, "/cart", Some("{not json".into())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert!(body["detail"].is_string());

    let missing_item = json!({ "user_id": 1 });
    let (status, _) = send(&app, Method::POST, "/cart", Some(missing_item)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_quantity = json!({ "user_id": 1, "item": { "product_id": 1, "quantity": "two" } });
    let (status, _) = send(&app, Method::POST, "/cart", Some(bad_quantity)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn quantity_overflow_is_a_bad_request() {
    let app = app();
    let add = json!({ "user_id": 3, "item": { "product_id": 1, "quantity": i64::MAX } });
    send(&app, Method::POST, "/cart", Some(add.clone())).await;

    let (status, body) = send(&app, Method::POST, "/cart", Some(add)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (_, cart) = send(&app, Method::GET, "/cart/3", None).await;
    assert_eq!(cart["cart"][0]["quantity"], json!(i64::MAX));
}

#[tokio::test]
async fn fractional_prices_render_as_decimals() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/products/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 3, "name": "Gizmo", "price": 9.99 }));

    let add = json!({ "user_id": 11, "item": { "product_id": 3, "quantity": 3 } });
    send(&app, Method::POST, "/cart", Some(add)).await;
    let add = json!({ "user_id": 11, "item": { "product_id": 1, "quantity": 1 } });
    send(&app, Method::POST, "/cart", Some(add)).await;

    let (status, body) = send(&app, Method::POST, "/checkout/11", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "user_id": 11,
            "items": [
                { "product_id": 3, "name": "Gizmo", "price": 9.99, "quantity": 3, "subtotal": 29.97 },
                { "product_id": 1, "name": "Widget", "price": 10, "quantity": 1, "subtotal": 10 }
            ],
            "total": 39.97
        })
    );
}

#[tokio::test]
async fn numeric_strings_are_accepted_for_integer_fields() {
    let app = app();

    let add = json!({ "user_id": "5", "item": { "product_id": "1", "quantity": "2" } });
    let (status, body) = send(&app, Method::POST, "/cart", Some(add)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Product added successfully",
            "cart": [{ "product_id": 1, "quantity": 2 }]
        })
    );

    let fractional = json!({ "user_id": 5, "item": { "product_id": 1, "quantity": "2.5" } });
    let (status, _) = send(&app, Method::POST, "/cart", Some(fractional)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let fractional = json!({ "user_id": 5, "item": { "product_id": 1, "quantity": 2.5 } });
    let (status, _) = send(&app, Method::POST, "/cart", Some(fractional)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_docs_and_fallback() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, _) = raw(&app, Method::GET, "/docs", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}
