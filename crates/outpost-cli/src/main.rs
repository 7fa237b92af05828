//! Outpost CLI - Gateway queries and audit log inspection
//!
//! Thin client over the Outpost HTTP API.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use api::{CallAttempt, OutpostClient};
use config::Config;

#[derive(Parser)]
#[command(name = "outpost")]
#[command(about = "Outpost CLI - audited provider calls and logs", long_about = None)]
#[command(version)]
struct Cli {
    /// Log HTTP traffic to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration
    Config,

    /// Store the server URL
    SetUrl {
        /// e.g. https://outpost.shuttle.app
        url: String,
    },

    /// Check that the server is up
    Health,

    /// Current weather through the gateway
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
    },

    /// Exchange rates through the gateway
    Rates {
        /// Base currency (default USD)
        #[arg(short, long)]
        base: Option<String>,
        /// Only show these currencies (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },

    /// Audit log of outbound calls
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },

    /// Product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum LogsAction {
    /// Most recent attempts
    List {
        #[arg(short, long)]
        limit: Option<i64>,
    },
    /// One attempt with its response body
    Show { id: i64 },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// All products
    List,
    /// One product
    Show { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Config => cmd_config(),
        Commands::SetUrl { url } => cmd_set_url(&url),
        Commands::Health => cmd_health().await,
        Commands::Weather {
            latitude,
            longitude,
        } => cmd_weather(latitude, longitude).await,
        Commands::Rates { base, only } => cmd_rates(base.as_deref(), &only).await,
        Commands::Logs { action } => match action {
            LogsAction::List { limit } => cmd_logs_list(limit).await,
            LogsAction::Show { id } => cmd_logs_show(id).await,
        },
        Commands::Products { action } => match action {
            ProductsAction::List => cmd_products_list().await,
            ProductsAction::Show { id } => cmd_products_show(id).await,
        },
    }
}

// ============================================
// Command Implementations
// ============================================

fn client() -> Result<OutpostClient> {
    let config = Config::load()?;
    Ok(OutpostClient::new(&config.effective_base_url()))
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    match std::env::var(config::URL_ENV) {
        Ok(url) => println!("  {} override: {}", config::URL_ENV, url.cyan()),
        Err(_) => println!("  {} override: {}", config::URL_ENV, "Not set".dimmed()),
    }

    Ok(())
}

fn cmd_set_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("URL must start with http:// or https://");
    }

    let mut config = Config::load()?;
    config.set_base_url(url);
    config.save()?;

    println!("{} Server URL saved to {:?}", "✓".green(), Config::config_path()?);
    Ok(())
}

async fn cmd_health() -> Result<()> {
    let client = client()?;
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Outpost API");
        }
    }
}

async fn cmd_weather(latitude: Option<f64>, longitude: Option<f64>) -> Result<()> {
    let weather = client()?.weather(latitude, longitude).await?;

    println!(
        "{} ({}, {})",
        "Weather".bold(),
        weather.latitude,
        weather.longitude
    );
    match weather.current {
        Some(current) => {
            println!("  Time:        {}", current.time);
            println!("  Temperature: {} °C", current.temperature.to_string().cyan());
            println!("  Wind speed:  {} km/h", current.wind_speed);
            println!("  Code:        {}", current.weather_code);
        }
        None => println!("  {}", "No current conditions reported".dimmed()),
    }

    Ok(())
}

async fn cmd_rates(base: Option<&str>, only: &[String]) -> Result<()> {
    let rates = client()?.exchange_rates(base).await?;

    println!("{} {} ({})", "Rates for".bold(), rates.base.cyan(), rates.date);
    let shown = rates
        .rates
        .iter()
        .filter(|(code, _)| only.is_empty() || only.iter().any(|o| o.eq_ignore_ascii_case(code)));
    for (code, rate) in shown {
        println!("  {code}  {rate}");
    }

    Ok(())
}

async fn cmd_logs_list(limit: Option<i64>) -> Result<()> {
    let attempts = client()?.list_logs(limit).await?;

    if attempts.is_empty() {
        println!("No calls recorded yet.");
        return Ok(());
    }

    println!("{}", "Recent calls:".bold());
    for attempt in &attempts {
        println!("  {}", summary_line(attempt));
    }

    Ok(())
}

async fn cmd_logs_show(id: i64) -> Result<()> {
    let attempt = client()?.get_log(id).await?;

    println!("{}", summary_line(&attempt));
    println!("  At:       {}", attempt.requested_at);
    println!("  URL:      {}", attempt.request_url);
    if let Some(error) = &attempt.error_message {
        println!("  Error:    {}", error.red());
    }
    if let Some(body) = &attempt.response_body {
        println!("  Response: {}", truncate_string(body, 500).dimmed());
    }

    Ok(())
}

async fn cmd_products_list() -> Result<()> {
    let products = client()?.list_products().await?;

    if products.is_empty() {
        println!("No products.");
        return Ok(());
    }

    println!("{}", "Products:".bold());
    for p in &products {
        let state = if p.is_active { "active".green() } else { "inactive".dimmed() };
        println!(
            "  #{} {} [{}] {:.2} stock={} {}",
            p.id,
            p.name.cyan(),
            p.sku,
            p.price,
            p.stock_quantity,
            state
        );
    }

    Ok(())
}

async fn cmd_products_show(id: i64) -> Result<()> {
    let p = client()?.get_product(id).await?;

    println!("{} {}", format!("#{}", p.id).bold(), p.name.cyan());
    println!("  SKU:      {}", p.sku);
    println!("  Category: {}", p.category);
    if let Some(brand) = &p.brand {
        println!("  Brand:    {brand}");
    }
    println!("  Price:    {:.2}", p.price);
    println!("  Stock:    {}", p.stock_quantity);
    println!("  Active:   {}", p.is_active);
    println!("  Version:  {}", p.version);
    if let Some(description) = &p.description {
        println!("  {}", truncate_string(description, 120).dimmed());
    }

    Ok(())
}

fn summary_line(attempt: &CallAttempt) -> String {
    let outcome = if attempt.success {
        "OK".green()
    } else {
        "FAIL".red()
    };
    let status = attempt
        .status_code
        .map_or_else(|| "---".to_string(), |s| s.to_string());

    format!(
        "#{} {} {} {} {} {}ms",
        attempt.id,
        outcome,
        status,
        attempt.request_method,
        attempt.provider,
        attempt.elapsed_ms
    )
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}
