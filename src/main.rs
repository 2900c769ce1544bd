use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storelens::search::{
    extract_product_phrase, query_from_message, related_products, search, SearchOptions,
    SearchQuery, DEFAULT_MIN_SCORE, DEFAULT_TOP_N,
};
use storelens::{load_catalog, Product, StorelensError};

#[derive(Parser)]
#[command(name = "storelens")]
#[command(about = "Relevance search over a storefront product catalog", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (an array of product records)
    #[arg(short, long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with a raw query string
    Search {
        /// Query text as typed into a search bar
        query: String,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: u32,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a conversational message through the extractor, then search
    Ask {
        /// Chat message, e.g. "do you have a BP machine by AlphaMed"
        message: String,
        /// Brand keyword recognized outside the message (repeatable)
        #[arg(long)]
        brand: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: u32,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what the phrase extractor makes of a message
    Extract {
        /// Chat message to analyze
        message: String,
    },
    /// List products related to a reference product (by SKU or name)
    Related {
        /// SKU or name of the reference product
        product: String,
        #[arg(long, default_value_t = 8)]
        top: usize,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            top,
            min_score,
            json,
        } => {
            let products = load_catalog(&cli.catalog)?;
            let options = SearchOptions { top_n: top, min_score };
            let results = search(&products, &SearchQuery::from_text(&query), &options);
            print_results(&results, json)?;
        }
        Commands::Ask {
            message,
            brand,
            top,
            min_score,
            json,
        } => {
            let query = query_from_message(&message, &brand);
            if query.is_empty() {
                println!("No product request recognized in the message.");
                return Ok(());
            }
            let products = load_catalog(&cli.catalog)?;
            let options = SearchOptions { top_n: top, min_score };
            let results = search(&products, &query, &options);
            print_results(&results, json)?;
        }
        Commands::Extract { message } => {
            let extracted = extract_product_phrase(&message);
            println!("{}", serde_json::to_string_pretty(&extracted)?);
        }
        Commands::Related { product, top, json } => {
            let products = load_catalog(&cli.catalog)?;
            let reference = find_product(&products, &product)?;
            let results = related_products(&products, &reference, top);
            print_results(&results, json)?;
        }
    }

    Ok(())
}

fn find_product(products: &[Product], needle: &str) -> Result<Product, StorelensError> {
    products
        .iter()
        .find(|p| p.sku.eq_ignore_ascii_case(needle) || p.name.eq_ignore_ascii_case(needle))
        .cloned()
        .ok_or_else(|| StorelensError::NotFound(format!("no product matches '{}'", needle)))
}

fn print_results(results: &[Product], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching products.");
        return Ok(());
    }

    for (rank, product) in results.iter().enumerate() {
        let mut line = format!("{:>2}. {}", rank + 1, product.name);
        if !product.sku.is_empty() {
            line.push_str(&format!(" [{}]", product.sku));
        }
        if !product.manufacturer.is_empty() {
            line.push_str(&format!(" by {}", product.manufacturer));
        }
        println!("{}", line);
    }

    Ok(())
}
