//! Plain-text rendering of the product list.

use std::fmt::Write;

use crate::reducer::ProductState;
use crate::types::Product;

const HEADERS: [&str; 5] = ["ID", "Description", "Stock", "Categories", "Price"];

pub fn format_price(price: f64) -> String {
    format!("{price:.2} EUR")
}

fn row(product: &Product) -> [String; 5] {
    [
        product.id.clone(),
        product.description.clone(),
        product.stock.to_string(),
        product.categories.join(", "),
        format_price(product.price),
    ]
}

/// Render what the list view shows for `state`.
pub fn render_product_table(state: &ProductState) -> String {
    if state.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if state.items.is_empty() {
        out.push_str("No products available\n");
        return out;
    }

    let rows: Vec<[String; 5]> = state.items.iter().map(row).collect();
    let mut widths = HEADERS.map(str::len);
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let _ = writeln!(out, "{}", line(&HEADERS[..]));
    for r in &rows {
        let cells: Vec<&str> = r.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells[..]));
    }
    out
}
