//! # Storefront Home Page
//!
//! Loads settings and a catalog snapshot, then prints the home page model
//! for one customer as JSON.
//!
//! ## Usage
//! ```bash
//! # Anonymous visitor, default settings
//! cargo run -p supershop-catalog --bin storefront -- --catalog fixtures/catalog.json
//!
//! # A customer with agreements
//! cargo run -p supershop-catalog --bin storefront -- \
//!     --settings fixtures/storefront.toml --customer acme
//!
//! # More logging
//! RUST_LOG=debug cargo run -p supershop-catalog --bin storefront -- --customer acme
//! ```

use std::env;
use std::path::PathBuf;

use supershop_catalog::telemetry::init_tracing;
use supershop_catalog::{
    CategoryService, InMemoryCatalog, ProductService, Storefront, StorefrontSettings,
};
use supershop_core::AgreementPricing;
use tracing::info;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    settings_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    customer_id: Option<String>,
    help: bool,
}

/// Parses arguments (without the program name).
///
/// A flag that expects a value fails when the value is missing, including
/// when the next argument is another flag.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--settings" | "-s" => {
                options.settings_path = Some(PathBuf::from(value_for(args, i, flag)?));
                i += 1;
            }
            "--catalog" | "-c" => {
                options.catalog_path = Some(PathBuf::from(value_for(args, i, flag)?));
                i += 1;
            }
            "--customer" | "-u" => {
                options.customer_id = Some(value_for(args, i, flag)?.to_string());
                i += 1;
            }
            "--help" | "-h" => {
                options.help = true;
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    match args.get(i + 1) {
        Some(value) if !value.starts_with('-') => Ok(value.as_str()),
        _ => Err(format!("{} requires a value", flag)),
    }
}

fn print_help() {
    println!("SuperShop Storefront");
    println!();
    println!("Usage: storefront [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -s, --settings <PATH>  Settings file (TOML)");
    println!("  -c, --catalog <PATH>   Catalog snapshot (overrides settings)");
    println!("  -u, --customer <ID>    Price for this customer (default: anonymous)");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Options {
        settings_path,
        catalog_path,
        customer_id,
        help,
    } = parse_args(&args)?;

    if help {
        print_help();
        return Ok(());
    }

    init_tracing();

    let mut settings = StorefrontSettings::load(settings_path.as_deref())?;
    if let Some(path) = catalog_path {
        settings.catalog_path = path;
    }

    let catalog = InMemoryCatalog::load(&settings.catalog_path)?;
    info!(
        products = catalog.product_count(),
        customers = catalog.customer_count(),
        "Catalog loaded"
    );

    let storefront = Storefront::new(
        CategoryService::new(&catalog),
        ProductService::new(&catalog, AgreementPricing::new()),
        &catalog,
        settings.home,
    );

    let home = storefront.home_index(customer_id.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&home)?);

    Ok(())
}
