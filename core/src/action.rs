//! Actions and their creators.
//!
//! Every operation has a request, success and failure action. On the wire
//! (and in logs) an action is a record tagged by `type`, carrying an optional
//! `payload` and, for deletes, a `meta` naming the targeted product.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Identifies the product a delete is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductAction {
    FetchProductsRequest,
    FetchProductsSuccess { payload: Vec<Product> },
    FetchProductsFailure { payload: String },

    CreateProductRequest,
    CreateProductSuccess { payload: Product },
    CreateProductFailure { payload: String },

    UpdateProductRequest,
    UpdateProductSuccess { payload: Product },
    UpdateProductFailure { payload: String },

    DeleteProductRequest { meta: ProductRef },
    DeleteProductSuccess { payload: ProductRef },
    DeleteProductFailure { payload: String, meta: ProductRef },
}

impl ProductAction {
    /// The `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ProductAction::FetchProductsRequest => "FETCH_PRODUCTS_REQUEST",
            ProductAction::FetchProductsSuccess { .. } => "FETCH_PRODUCTS_SUCCESS",
            ProductAction::FetchProductsFailure { .. } => "FETCH_PRODUCTS_FAILURE",
            ProductAction::CreateProductRequest => "CREATE_PRODUCT_REQUEST",
            ProductAction::CreateProductSuccess { .. } => "CREATE_PRODUCT_SUCCESS",
            ProductAction::CreateProductFailure { .. } => "CREATE_PRODUCT_FAILURE",
            ProductAction::UpdateProductRequest => "UPDATE_PRODUCT_REQUEST",
            ProductAction::UpdateProductSuccess { .. } => "UPDATE_PRODUCT_SUCCESS",
            ProductAction::UpdateProductFailure { .. } => "UPDATE_PRODUCT_FAILURE",
            ProductAction::DeleteProductRequest { .. } => "DELETE_PRODUCT_REQUEST",
            ProductAction::DeleteProductSuccess { .. } => "DELETE_PRODUCT_SUCCESS",
            ProductAction::DeleteProductFailure { .. } => "DELETE_PRODUCT_FAILURE",
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(
            self,
            ProductAction::FetchProductsRequest
                | ProductAction::CreateProductRequest
                | ProductAction::UpdateProductRequest
                | ProductAction::DeleteProductRequest { .. }
        )
    }

    /// Success or failure: the last action an operation emits.
    pub fn is_terminal(&self) -> bool {
        !self.is_request()
    }
}

/// Everything the store can be asked to reduce.
///
/// `Init` is reduced once when the store is built. No slice reacts to it, so
/// it also exercises the pass-through path of every reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Init,
    Product(ProductAction),
}

impl AppAction {
    pub fn kind(&self) -> &'static str {
        match self {
            AppAction::Init => "@@INIT",
            AppAction::Product(action) => action.kind(),
        }
    }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        AppAction::Product(action)
    }
}

pub fn fetch_products_request() -> ProductAction {
    ProductAction::FetchProductsRequest
}

pub fn fetch_products_success(products: Vec<Product>) -> ProductAction {
    ProductAction::FetchProductsSuccess { payload: products }
}

pub fn fetch_products_failure(error: impl Into<String>) -> ProductAction {
    ProductAction::FetchProductsFailure { payload: error.into() }
}

pub fn create_product_request() -> ProductAction {
    ProductAction::CreateProductRequest
}

pub fn create_product_success(product: Product) -> ProductAction {
    ProductAction::CreateProductSuccess { payload: product }
}

pub fn create_product_failure(error: impl Into<String>) -> ProductAction {
    ProductAction::CreateProductFailure { payload: error.into() }
}

pub fn update_product_request() -> ProductAction {
    ProductAction::UpdateProductRequest
}

pub fn update_product_success(product: Product) -> ProductAction {
    ProductAction::UpdateProductSuccess { payload: product }
}

pub fn update_product_failure(error: impl Into<String>) -> ProductAction {
    ProductAction::UpdateProductFailure { payload: error.into() }
}

pub fn delete_product_request(id: impl Into<String>) -> ProductAction {
    ProductAction::DeleteProductRequest {
        meta: ProductRef { id: id.into() },
    }
}

pub fn delete_product_success(id: impl Into<String>) -> ProductAction {
    ProductAction::DeleteProductSuccess {
        payload: ProductRef { id: id.into() },
    }
}

pub fn delete_product_failure(id: impl Into<String>, error: impl Into<String>) -> ProductAction {
    ProductAction::DeleteProductFailure {
        payload: error.into(),
        meta: ProductRef { id: id.into() },
    }
}
