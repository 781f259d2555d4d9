use clap::{Args, Parser, Subcommand};

use inventory_core::ProductForm;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Manage products through the inventory API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every product
    List,
    /// Create a product
    Add(AddArgs),
    /// Edit an existing product; omitted fields keep their value
    Edit(EditArgs),
    /// Delete a product
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub description: String,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: String,
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    /// Comma separated, e.g. "tools, hand"
    #[arg(long, default_value = "")]
    pub categories: String,
}

impl AddArgs {
    pub fn form(&self) -> ProductForm {
        ProductForm {
            description: self.description.clone(),
            stock: self.stock.clone(),
            price: self.price.clone(),
            categories: self.categories.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long)]
    pub categories: Option<String>,
}

impl EditArgs {
    /// Overlay the given flags on a form pre-filled from the current product.
    pub fn apply(&self, mut form: ProductForm) -> ProductForm {
        if let Some(description) = &self.description {
            form.description = description.clone();
        }
        if let Some(stock) = &self.stock {
            form.stock = stock.clone();
        }
        if let Some(price) = &self.price {
            form.price = price.clone();
        }
        if let Some(categories) = &self.categories {
            form.categories = categories.clone();
        }
        form
    }
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
