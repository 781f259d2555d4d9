//! Async operation dispatchers.
//!
//! Each one dispatches its request action before any I/O, awaits a single
//! call on the `ProductApi`, then dispatches exactly one success or failure.
//! Errors never escape: they are reduced to a message and dispatched.

use tracing::warn;

use crate::action;
use crate::error::error_message;
use crate::store::Dispatch;
use crate::transport::{ProductApi, Transport};
use crate::types::NewProductData;

pub async fn fetch_products<T, D>(api: &ProductApi<T>, dispatch: &D)
where
    T: Transport,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(action::fetch_products_request());
    match api.fetch_products().await {
        Ok(products) => dispatch.dispatch(action::fetch_products_success(products)),
        Err(e) => {
            warn!(error = %e, "fetching products failed");
            dispatch.dispatch(action::fetch_products_failure(error_message(&e)));
        }
    }
}

pub async fn create_product<T, D>(api: &ProductApi<T>, dispatch: &D, new_product: &NewProductData)
where
    T: Transport,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(action::create_product_request());
    match api.create_product(new_product).await {
        Ok(product) => dispatch.dispatch(action::create_product_success(product)),
        Err(e) => {
            warn!(error = %e, "creating product failed");
            dispatch.dispatch(action::create_product_failure(error_message(&e)));
        }
    }
}

pub async fn update_product<T, D>(api: &ProductApi<T>, dispatch: &D, product_id: &str, product_data: &NewProductData)
where
    T: Transport,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(action::update_product_request());
    match api.update_product(product_id, product_data).await {
        Ok(product) => dispatch.dispatch(action::update_product_success(product)),
        Err(e) => {
            warn!(id = product_id, error = %e, "updating product failed");
            dispatch.dispatch(action::update_product_failure(error_message(&e)));
        }
    }
}

pub async fn delete_product<T, D>(api: &ProductApi<T>, dispatch: &D, product_id: &str)
where
    T: Transport,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(action::delete_product_request(product_id));
    match api.delete_product(product_id).await {
        Ok(()) => dispatch.dispatch(action::delete_product_success(product_id)),
        Err(e) => {
            warn!(id = product_id, error = %e, "deleting product failed");
            dispatch.dispatch(action::delete_product_failure(product_id, error_message(&e)));
        }
    }
}
