//! Stateless HTTP request builder and response parser for the products API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the HTTP round-trip in between, keeping this half
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewProductData, Product};

/// Collection endpoint, relative to the configured base URL.
pub const PRODUCTS_ENDPOINT: &str = "Products";

/// Synchronous, stateless client for the products API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection(&self) -> String {
        format!("{}/{PRODUCTS_ENDPOINT}", self.base_url)
    }

    /// The id always lands in a single path segment, whatever it contains.
    fn member(&self, id: &str) -> String {
        format!("{}/{PRODUCTS_ENDPOINT}/{}", self.base_url, urlencoding::encode(id))
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &NewProductData) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_product(&self, id: &str, input: &NewProductData) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_product(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// The body of a delete response carries nothing the client needs.
    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &NewProductData) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
