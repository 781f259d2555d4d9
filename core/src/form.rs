//! Client-side validation of the create/edit form.
//!
//! Runs before any dispatcher is invoked; a `ValidationError` means nothing
//! was sent.

use crate::error::ValidationError;
use crate::types::{NewProductData, Product};

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub description: String,
    pub stock: String,
    pub price: String,
    /// Comma separated.
    pub categories: String,
}

impl ProductForm {
    /// Pre-fill the edit form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            description: product.description.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
            categories: product.categories.join(", "),
        }
    }

    pub fn validate(&self) -> Result<NewProductData, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(NewProductData {
            description: description.to_string(),
            stock: parse_stock(&self.stock)?,
            price: parse_price(&self.price)?,
            categories: parse_categories(&self.categories),
        })
    }
}

fn parse_stock(raw: &str) -> Result<u32, ValidationError> {
    let not_a_number = || ValidationError::NotANumber {
        field: "stock",
        value: raw.to_string(),
    };
    let value: i64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if value < 0 {
        return Err(ValidationError::Negative { field: "stock" });
    }
    u32::try_from(value).map_err(|_| not_a_number())
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: "price",
            value: raw.to_string(),
        })?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }
    Ok(value)
}

/// Split on commas, trim, drop empties.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
