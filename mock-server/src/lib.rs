use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub description: String,
    pub stock: u32,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Deserialize)]
pub struct NewProductData {
    pub description: String,
    pub stock: u32,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Products in insertion order; list responses keep that order.
pub type Db = Arc<RwLock<Vec<Product>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `products`.
pub fn app_with(products: Vec<Product>) -> Router {
    let db: Db = Arc::new(RwLock::new(products));
    Router::new()
        .route("/Products", get(list_products).post(create_product))
        .route("/Products/{id}", get(get_product).put(update_product).delete(delete_product))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    Json(db.read().await.clone())
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<NewProductData>,
) -> (StatusCode, Json<Product>) {
    let product = Product {
        id: Uuid::new_v4().to_string(),
        description: input.description,
        stock: input.stock,
        price: input.price,
        categories: input.categories,
    };
    db.write().await.push(product.clone());
    info!(id = %product.id, "product created");
    (StatusCode::CREATED, Json(product))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    let products = db.read().await;
    products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<NewProductData>,
) -> Result<Json<Product>, StatusCode> {
    let mut products = db.write().await;
    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    product.description = input.description;
    product.stock = input.stock;
    product.price = input.price;
    product.categories = input.categories;
    info!(id = %id, "product updated");
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut products = db.write().await;
    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    products.remove(index);
    info!(id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
