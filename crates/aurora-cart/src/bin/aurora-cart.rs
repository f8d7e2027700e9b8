//! # Aurora Cart CLI
//!
//! Drives a storefront cart from the terminal, for theme development and
//! smoke-testing a shop's cart endpoints.
//!
//! ## Usage
//! ```bash
//! # Show the current cart
//! cargo run -p aurora-cart -- show --base-url http://localhost:9292
//!
//! # Add two of a variant, then change line 1 to three
//! cargo run -p aurora-cart -- add 39897499729985 2
//! cargo run -p aurora-cart -- change 1 3
//!
//! # Try a money format without a shop
//! cargo run -p aurora-cart -- format 123456 "{{amount_with_comma_separator}} €"
//!
//! # Fetch a product's quick-view fragment
//! cargo run -p aurora-cart -- quick-view linen-shirt
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use aurora_cart::{CartEventSink, CartSync, MutationFailure, StorefrontConfig};
use aurora_core::{format_money, CartState, MoneyFormat};
use tracing_subscriber::EnvFilter;

/// Prints cart notifications the way a theme would surface them.
struct ConsoleSink {
    format: MoneyFormat,
}

impl CartEventSink for ConsoleSink {
    fn cart_updated(&self, cart: &CartState) {
        println!(
            "Cart updated: {} item(s), total {}",
            cart.item_count,
            cart.total_price.format_with(&self.format)
        );
    }

    fn show_cart(&self) {
        println!("→ Cart drawer opened");
    }

    fn mutation_failed(&self, failure: &MutationFailure) {
        match failure.user_message() {
            Some(alert) => eprintln!("⚠ {}", alert),
            None => eprintln!("✗ {} failed: {}", failure.operation, failure.message),
        }
    }
}

fn print_help() {
    println!("Aurora Cart CLI");
    println!();
    println!("Usage: aurora-cart [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  show                        Fetch and print the cart");
    println!("  add <VARIANT_ID> [QTY]      Add a variant (default quantity 1)");
    println!("  change <LINE> <QTY>         Set a line's quantity (0 removes it)");
    println!("  quick-view <HANDLE>         Print a product's quick-view HTML");
    println!("  format <AMOUNT> [TEMPLATE]  Format cents with a money template");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>      Config file (default: platform config dir)");
    println!("  -u, --base-url <URL>     Storefront base URL override");
    println!("  -h, --help               Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings, plus debug for aurora crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,aurora_cart=debug,aurora_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;
    let mut base_url: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--base-url" | "-u" => {
                if i + 1 < args.len() {
                    base_url = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let Some((command, rest)) = positional.split_first() else {
        print_help();
        return Ok(());
    };

    // Formatting needs no storefront at all
    if command == "format" {
        let amount = rest.first().ok_or("format needs an amount")?;
        let template = rest
            .get(1)
            .map(String::as_str)
            .unwrap_or(MoneyFormat::DEFAULT_TEMPLATE);
        let amount = match amount.parse::<i64>() {
            Ok(cents) => format_money(cents, template)?,
            Err(_) => format_money(amount.as_str(), template)?,
        };
        println!("{}", amount);
        return Ok(());
    }

    let mut config = StorefrontConfig::load(config_path)?;
    if let Some(url) = base_url {
        config.store.base_url = url;
    }

    let sink = ConsoleSink {
        format: config.money_format().clone(),
    };
    let cart = CartSync::from_config(&config)?.with_sink(Arc::new(sink));

    match command.as_str() {
        "show" => {
            let Some(state) = cart.fetch_cart().await else {
                return Err("could not fetch cart".into());
            };
            for (idx, item) in state.items.iter().enumerate() {
                println!(
                    "  {:>2}. {} × {} ({})  {}",
                    idx + 1,
                    item.quantity,
                    item.title.as_deref().unwrap_or("(untitled)"),
                    item.variant_id,
                    cart.format_price(item.line_price)
                );
            }
        }
        "add" => {
            let variant_id: u64 = rest.first().ok_or("add needs a variant id")?.parse()?;
            let quantity: u32 = match rest.get(1) {
                Some(q) => q.parse()?,
                None => 1,
            };
            if !cart.add_item(variant_id, quantity).await {
                return Err("add to cart failed".into());
            }
        }
        "change" => {
            let line: usize = rest.first().ok_or("change needs a line number")?.parse()?;
            let quantity: u32 = rest.get(1).ok_or("change needs a quantity")?.parse()?;
            if !cart.update_item_quantity(line, quantity).await {
                return Err("cart update failed".into());
            }
        }
        "quick-view" => {
            let handle = rest.first().ok_or("quick-view needs a product handle")?;
            let Some(html) = cart.quick_view(handle).await else {
                return Err("could not load quick view".into());
            };
            println!("{}", html);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            return Err(format!("unknown command '{}'", other).into());
        }
    }

    Ok(())
}
