//! The product-list state machine.
//!
//! # Design
//! The reducer never mutates the state it is given. It returns a fresh
//! `Arc<ProductState>` for every action it handles and hands back a clone
//! of the very same `Arc` for actions it does not, so callers can detect a
//! no-op with `Arc::ptr_eq`.

use std::sync::Arc;

use serde::Serialize;

use crate::action::{AppAction, ProductAction};
use crate::types::Product;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductState {
    /// Unique by id, in server order.
    pub items: Vec<Product>,
    /// A fetch is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// A create, update or delete is in flight.
    pub save_loading: bool,
}

impl ProductState {
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }
}

pub fn initial_state() -> Arc<ProductState> {
    Arc::new(ProductState::default())
}

pub fn product_reducer(state: &Arc<ProductState>, action: &AppAction) -> Arc<ProductState> {
    match action {
        AppAction::Product(action) => Arc::new(reduce(state, action)),
        AppAction::Init => Arc::clone(state),
    }
}

fn reduce(state: &ProductState, action: &ProductAction) -> ProductState {
    match action {
        ProductAction::FetchProductsRequest => ProductState {
            loading: true,
            error: None,
            ..state.clone()
        },
        ProductAction::FetchProductsSuccess { payload } => ProductState {
            loading: false,
            items: payload.clone(),
            error: None,
            ..state.clone()
        },
        ProductAction::FetchProductsFailure { payload } => ProductState {
            loading: false,
            error: Some(payload.clone()),
            items: Vec::new(),
            ..state.clone()
        },

        ProductAction::CreateProductRequest
        | ProductAction::UpdateProductRequest
        | ProductAction::DeleteProductRequest { .. } => ProductState {
            save_loading: true,
            error: None,
            ..state.clone()
        },

        ProductAction::CreateProductSuccess { payload } => {
            let mut items = state.items.clone();
            items.push(payload.clone());
            ProductState {
                save_loading: false,
                items,
                error: None,
                ..state.clone()
            }
        }
        ProductAction::UpdateProductSuccess { payload } => ProductState {
            save_loading: false,
            items: state
                .items
                .iter()
                .map(|item| if item.id == payload.id { payload.clone() } else { item.clone() })
                .collect(),
            error: None,
            ..state.clone()
        },
        ProductAction::DeleteProductSuccess { payload } => ProductState {
            save_loading: false,
            items: state
                .items
                .iter()
                .filter(|item| item.id != payload.id)
                .cloned()
                .collect(),
            error: None,
            ..state.clone()
        },

        ProductAction::CreateProductFailure { payload }
        | ProductAction::UpdateProductFailure { payload }
        | ProductAction::DeleteProductFailure { payload, .. } => ProductState {
            save_loading: false,
            error: Some(payload.clone()),
            ..state.clone()
        },
    }
}
