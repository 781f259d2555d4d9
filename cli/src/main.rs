use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;

use inventory_core::dispatch::{create_product, delete_product, fetch_products, update_product};
use inventory_core::view::render_product_table;
use inventory_core::{ClientConfig, ProductApi, ProductForm, Store};

mod args;

use args::{Cli, Command};

/// Terminal front end for the inventory API.
///
/// Every command loads the list first, runs at most one mutation through the
/// store, then prints the resulting list. The exit code is non-zero when the
/// final state carries an error.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and validate input before any request goes out
    let cli = Cli::parse();
    let new_product = match &cli.command {
        Command::Add(args) => Some(args.form().validate().context("invalid product")?),
        _ => None,
    };

    // 4. Load configuration
    let config = ClientConfig::from_env().context("cannot initialize the HTTP client")?;
    let api = ProductApi::from_config(&config);
    let store = Store::new();

    let mut rx = store.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            debug!(
                items = state.items.len(),
                loading = state.loading,
                save_loading = state.save_loading,
                error = ?state.error,
                "state changed"
            );
        }
    });

    // 5. Run the command
    fetch_products(&api, &store).await;
    let state = store.state();
    if state.error.is_some() && !matches!(cli.command, Command::List) {
        // Mutations run only against a freshly loaded list.
        print!("{}", render_product_table(&state));
        return Ok(ExitCode::FAILURE);
    }
    match &cli.command {
        Command::List => {}
        Command::Add(_) => {
            if let Some(data) = &new_product {
                create_product(&api, &store, data).await;
            }
        }
        Command::Edit(args) => {
            let state = store.state();
            let Some(product) = state.find(&args.id) else {
                print!("{}", render_product_table(&state));
                bail!("product {} not found", args.id);
            };
            let data = args
                .apply(ProductForm::from_product(product))
                .validate()
                .context("invalid product")?;
            update_product(&api, &store, &args.id, &data).await;
        }
        Command::Delete(args) => {
            if args.yes || confirm(&format!("Delete product {}?", args.id))? {
                delete_product(&api, &store, &args.id).await;
            }
        }
    }

    let state = store.state();
    print!("{}", render_product_table(&state));
    Ok(if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
