//! Full CRUD lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every dispatcher
//! through the real `UreqTransport` into a `Store`, checking the reduced
//! state after each step.

use std::time::Duration;

use inventory_core::dispatch::{create_product, delete_product, fetch_products, update_product};
use inventory_core::{ClientConfig, NewProductData, ProductApi, Store, NETWORK_ERROR};

/// Serve the mock API on its own thread and return its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn input(description: &str, stock: u32, price: f64, categories: &[&str]) -> NewProductData {
    NewProductData {
        description: description.to_string(),
        stock,
        price,
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn crud_lifecycle() {
    let api = ProductApi::from_config(&ClientConfig::new(spawn_server()));
    let store = Store::new();
    let mut rx = store.subscribe();

    // Step 1: fetch, empty.
    fetch_products(&api, &store).await;
    let state = store.state();
    assert!(state.items.is_empty(), "expected empty list");
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(rx.has_changed().unwrap());
    let _ = rx.borrow_and_update();

    // Step 2: create two products.
    create_product(&api, &store, &input("Hammer", 5, 19.99, &["tools"])).await;
    create_product(&api, &store, &input("Nails", 500, 4.5, &["hardware", "bulk"])).await;
    let state = store.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].description, "Hammer");
    assert_eq!(state.items[1].categories, vec!["hardware".to_string(), "bulk".to_string()]);
    assert!(!state.save_loading);
    let hammer = state.items[0].id.clone();
    let nails = state.items[1].id.clone();

    // Step 3: update the first, order kept.
    update_product(&api, &store, &hammer, &input("Claw hammer", 4, 24.0, &["tools"])).await;
    let state = store.state();
    assert_eq!(state.items[0].id, hammer);
    assert_eq!(state.items[0].description, "Claw hammer");
    assert_eq!(state.items[1].id, nails);

    // Step 4: refetch agrees with local reconciliation.
    let local = state.items.clone();
    fetch_products(&api, &store).await;
    assert_eq!(store.state().items, local);

    // Step 5: delete one.
    delete_product(&api, &store, &nails).await;
    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, hammer);

    // Step 6: deleting again fails, items stay.
    delete_product(&api, &store, &nails).await;
    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("resource not found"));
    assert!(!state.save_loading);

    // Step 7: a successful save clears the error.
    update_product(&api, &store, &hammer, &input("Hammer", 1, 1.0, &[])).await;
    assert!(store.state().error.is_none());
}

#[tokio::test]
async fn unreachable_server_clears_items_on_fetch() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut config = ClientConfig::new(format!("http://127.0.0.1:{port}"));
    config.timeout = Duration::from_millis(500);
    let api = ProductApi::from_config(&config);
    let store = Store::new();

    fetch_products(&api, &store).await;

    let state = store.state();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));
}

#[tokio::test(flavor = "multi_thread")]
async fn silent_server_times_out_into_state() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let mut config = ClientConfig::new(format!("http://{}", listener.local_addr().unwrap()));
    config.timeout = Duration::from_millis(300);
    let api = ProductApi::from_config(&config);
    let store = Store::new();

    fetch_products(&api, &store).await;

    let state = store.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("timeout of 300ms exceeded"));
    drop(listener);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_with_reserved_characters_touches_nothing() {
    let api = ProductApi::from_config(&ClientConfig::new(spawn_server()));
    let store = Store::new();

    create_product(&api, &store, &input("Hammer", 5, 19.99, &["tools"])).await;
    let id = store.state().items[0].id.clone();

    delete_product(&api, &store, &format!("{id}?oops")).await;
    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("resource not found"));

    fetch_products(&api, &store).await;
    assert_eq!(store.state().items.len(), 1, "server still holds the product");
}
