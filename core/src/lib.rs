//! Client core for the inventory service.
//!
//! # Overview
//! Keeps a normalized list of products in step with a REST API. A user
//! intent runs one of the dispatchers in `dispatch`, which reports progress
//! to the `Store` as actions; the store folds them into `ProductState` with
//! `product_reducer` and notifies subscribers.
//!
//! # Design
//! - `ProductClient` is stateless and does no I/O: it builds `HttpRequest`
//!   values and parses `HttpResponse` values (host-does-IO pattern).
//! - `Transport` is the network seam; `UreqTransport` is the real one.
//! - The reducer is pure and the store is its only caller.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod action;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod http;
pub mod reducer;
pub mod store;
pub mod transport;
pub mod types;
pub mod view;

pub use action::{AppAction, ProductAction, ProductRef};
pub use client::ProductClient;
pub use config::ClientConfig;
pub use error::{error_message, ApiError, ConfigError, TransportError, ValidationError};
pub use form::ProductForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use reducer::{product_reducer, ProductState};
pub use store::{ActionRecorder, Dispatch, Store};
pub use transport::{ProductApi, Transport, UreqTransport, NETWORK_ERROR};
pub use types::{NewProductData, Product};
