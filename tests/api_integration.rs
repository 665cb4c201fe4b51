//! Integration tests for the café ordering HTTP API
//!
//! These tests drive the full router, covering:
//! - Menu listing, filtering and reloading
//! - Cart aggregation through the REST endpoints
//! - Checkout success and failure
//! - Authentication boundary and sign-out

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cafe_ordering::cart::{CartNotice, CartObserver};
use cafe_ordering::cart::observer::NotifyError;
use cafe_ordering::catalog::{CatalogLoader, InMemoryMenuStore, MenuItem, MenuStore, StoreError};
use cafe_ordering::order::InMemoryOrderSubmitter;
use cafe_ordering::router::create_app_router;
use cafe_ordering::session::USER_HEADER;
use cafe_ordering::state::AppState;
use cafe_ordering::build_state;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, OnceLock, Weak};
use tower::util::ServiceExt; // for `oneshot`

const USER: &str = "asha";

/// Helper function to create a test app instance along with its order sink
fn create_test_app() -> (axum::Router, Arc<InMemoryOrderSubmitter>) {
    let store = InMemoryMenuStore::with_default_menu().unwrap();
    let orders = Arc::new(InMemoryOrderSubmitter::new());
    let state = build_state(Arc::new(store), orders.clone());
    (create_app_router(state), orders)
}

/// Helper function to send a request and decode the JSON response
async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

async fn add_item(app: &axum::Router, id: &str, variant: &str, quantity: u32) -> (StatusCode, Value) {
    send_request(
        app,
        "POST",
        "/cart/items",
        Some(USER),
        Some(json!({ "menuItemId": id, "variant": variant, "quantity": quantity })),
    )
    .await
}

fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = create_test_app();
    let (status, body) = send_request(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_menu_lists_everything_by_category() {
    let (app, _) = create_test_app();

    let (status, body) = send_request(&app, "GET", "/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&body),
        vec!["bg-classic", "bg-cheese", "fr-salted", "fr-peri", "pz-margherita", "pz-veggie"]
    );

    let (_, all) = send_request(&app, "GET", "/menu?category=ALL", None, None).await;
    assert_eq!(all, body);

    let first = &body[0];
    assert_eq!(first["category"], "BURGER");
    assert_eq!(first["variants"][1]["size"], "Double");
    assert_eq!(first["variants"][1]["price"], "149.00");
}

#[tokio::test]
async fn test_menu_filters() {
    let (app, _) = create_test_app();

    let (_, fries) = send_request(&app, "GET", "/menu?category=FRIES", None, None).await;
    assert_eq!(ids(&fries), vec!["fr-salted", "fr-peri"]);

    let (_, pizzas) = send_request(&app, "GET", "/menu?search=PIZZA", None, None).await;
    assert_eq!(ids(&pizzas), vec!["pz-margherita", "pz-veggie"]);

    let (_, veg) = send_request(&app, "GET", "/menu?category=PIZZA&search=veg", None, None).await;
    assert_eq!(ids(&veg), vec!["pz-veggie"]);

    let (status, none) =
        send_request(&app, "GET", "/menu?category=BURGER&search=pizza", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_rejects_unknown_category() {
    let (app, _) = create_test_app();
    let (status, _) = send_request(&app, "GET", "/menu?category=DESSERT", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_menu_reload() {
    let (app, _) = create_test_app();
    let (status, body) = send_request(&app, "POST", "/menu/reload", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

struct DownStore;

#[async_trait]
impl MenuStore for DownStore {
    async fn list_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn test_menu_store_failure_is_surfaced() {
    let state = build_state(Arc::new(DownStore), Arc::new(InMemoryOrderSubmitter::new()));
    let app = create_app_router(state);

    let (status, body) = send_request(&app, "GET", "/menu", None, None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("Failed to load menu"));

    let (status, _) = add_item(&app, "pz-veggie", "Regular", 1).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_cart_requires_sign_in() {
    let (app, _) = create_test_app();

    let (status, body) = send_request(&app, "GET", "/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Sign in required");

    let (status, _) = send_request(&app, "GET", "/cart", Some("   "), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_request(&app, "POST", "/checkout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_to_cart_merges_and_totals() {
    let (app, _) = create_test_app();

    let (status, _) = add_item(&app, "pz-margherita", "Regular", 1).await;
    assert_eq!(status, StatusCode::OK);
    add_item(&app, "bg-classic", "Double", 1).await;
    let (status, body) = add_item(&app, "pz-margherita", "Regular", 1).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["menuItemId"], "pz-margherita");
    assert_eq!(items[0]["name"], "Margherita Pizza");
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["price"], "199.00");
    assert_eq!(body["total"], "547.00");
    assert_eq!(body["itemCount"], 3);

    let (_, cart) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert_eq!(cart, body);
}

#[tokio::test]
async fn test_supplied_price_is_kept_on_merge() {
    let (app, _) = create_test_app();

    for price in [json!("180.00"), json!(250)] {
        send_request(
            &app,
            "POST",
            "/cart/items",
            Some(USER),
            Some(json!({ "menuItemId": "pz-veggie", "variant": "Regular", "price": price })),
        )
        .await;
    }

    let (_, cart) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert_eq!(cart["items"][0]["quantity"], 2);
    assert_eq!(cart["items"][0]["price"], "180.00");
    assert_eq!(cart["total"], "360.00");
}

#[tokio::test]
async fn test_invalid_additions_leave_cart_unchanged() {
    let (app, _) = create_test_app();
    add_item(&app, "fr-salted", "Small", 2).await;

    let (status, body) = add_item(&app, "fr-salted", "Medium", 1).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Variant 'Medium' is not offered for item fr-salted");

    let (status, body) = add_item(&app, "dessert-brownie", "Regular", 1).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unknown menu item: dessert-brownie");

    let (status, _) = add_item(&app, "fr-salted", "Small", 0).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, cart) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["itemCount"], 2);
    assert_eq!(cart["total"], "138.00");
}

#[tokio::test]
async fn test_set_quantity_and_remove() {
    let (app, _) = create_test_app();
    add_item(&app, "fr-peri", "Large", 1).await;
    add_item(&app, "bg-cheese", "Single", 1).await;

    let (status, body) = send_request(
        &app,
        "PUT",
        "/cart/items",
        Some(USER),
        Some(json!({ "menuItemId": "fr-peri", "variant": "Large", "quantity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemCount"], 5);
    assert_eq!(body["total"], "645.00");

    let (_, body) = send_request(
        &app,
        "PUT",
        "/cart/items",
        Some(USER),
        Some(json!({ "menuItemId": "fr-peri", "variant": "Large", "quantity": 0 })),
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    let (status, body) = send_request(
        &app,
        "DELETE",
        "/cart/items",
        Some(USER),
        Some(json!({ "menuItemId": "bg-cheese", "variant": "Single" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemCount"], 0);

    let (status, _) = send_request(
        &app,
        "DELETE",
        "/cart/items",
        Some(USER),
        Some(json!({ "menuItemId": "bg-cheese", "variant": "Single" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_clears_cart() {
    let (app, orders) = create_test_app();
    add_item(&app, "pz-margherita", "Regular", 2).await;
    add_item(&app, "bg-classic", "Double", 1).await;

    let (status, body) = send_request(&app, "POST", "/checkout", Some(USER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grandTotal"], "547.00");

    let order_number = body["orderNumber"].as_str().unwrap();
    assert!(order_number.starts_with("ORD-"));
    assert_eq!(orders.find(order_number).unwrap().draft.customer, USER);

    let (_, cart) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["itemCount"], 0);
}

#[tokio::test]
async fn test_failed_checkout_keeps_cart() {
    let (app, orders) = create_test_app();
    add_item(&app, "fr-salted", "Large", 1).await;
    orders.set_accepting(false);

    let (status, body) = send_request(&app, "POST", "/checkout", Some(USER), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().starts_with("Order submission failed"));

    let (_, cart) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert_eq!(cart["itemCount"], 1);

    orders.set_accepting(true);
    let (status, _) = send_request(&app, "POST", "/checkout", Some(USER), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_checkout_is_rejected() {
    let (app, orders) = create_test_app();

    let (status, body) = send_request(&app, "POST", "/checkout", Some(USER), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Cart is empty");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_carts_are_per_user_and_dropped_on_sign_out() {
    let (app, _) = create_test_app();
    add_item(&app, "pz-veggie", "Large", 1).await;
    send_request(
        &app,
        "POST",
        "/cart/items",
        Some("ravi"),
        Some(json!({ "menuItemId": "fr-peri", "variant": "Small" })),
    )
    .await;

    let (_, ravi) = send_request(&app, "GET", "/cart", Some("ravi"), None).await;
    assert_eq!(ravi["itemCount"], 1);
    assert_eq!(ravi["items"][0]["menuItemId"], "fr-peri");

    let (status, _) = send_request(&app, "POST", "/auth/sign_out", Some(USER), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, mine) = send_request(&app, "GET", "/cart", Some(USER), None).await;
    assert_eq!(mine["itemCount"], 0);

    let (_, ravi) = send_request(&app, "GET", "/cart", Some("ravi"), None).await;
    assert_eq!(ravi["itemCount"], 1);
}

/// Observer that looks the cart up again while handling each notice
#[derive(Default)]
struct CartReadingObserver {
    state: OnceLock<Weak<AppState>>,
    seen_counts: Mutex<Vec<u64>>,
}

impl CartObserver for CartReadingObserver {
    fn notify(&self, _notice: &CartNotice) -> Result<(), NotifyError> {
        let state = self
            .state
            .get()
            .and_then(Weak::upgrade)
            .ok_or_else(|| NotifyError("state gone".into()))?;
        let count = state.cart_of(USER).item_count();
        self.seen_counts.lock().unwrap().push(count);
        Ok(())
    }
}

#[tokio::test]
async fn test_observer_can_read_carts() {
    let observer = Arc::new(CartReadingObserver::default());
    let state = Arc::new(AppState::new(
        CatalogLoader::new(Arc::new(InMemoryMenuStore::with_default_menu().unwrap())),
        observer.clone(),
        Arc::new(InMemoryOrderSubmitter::new()),
    ));
    observer.state.set(Arc::downgrade(&state)).unwrap();
    let app = create_app_router(state);

    let (status, body) = add_item(&app, "fr-salted", "Large", 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemCount"], 1);
    assert_eq!(*observer.seen_counts.lock().unwrap(), vec![1]);
}
