use clap::Parser;
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};
use zodiac_core::{PlantService, ZodiacConfig};

use zodiac_server::{executable_dir, resolve_catalog_path, server};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "zodiac.toml")]
    config: String,

    /// Load the plant catalog, print a summary and exit
    #[arg(long)]
    check_catalog: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience — production uses real env vars)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config
    let config = match ZodiacConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", args.config, e);
            std::process::exit(1);
        }
    };

    // Init logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level));
    fmt().with_env_filter(filter).init();

    // Load catalog — no partial startup
    let exe_dir = match executable_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to locate the server binary: {}", e);
            std::process::exit(1);
        }
    };
    let catalog_path = resolve_catalog_path(&config.catalog, &exe_dir);
    let service = match PlantService::init(&catalog_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load plant catalog: {}", e);
            std::process::exit(1);
        }
    };

    if args.check_catalog {
        println!("✅ Catalog {} loaded", catalog_path.display());
        for (sign, record) in service.catalog().iter() {
            println!(
                "   {:<12} {:<8} {} plants",
                sign.as_str(),
                record.element,
                record.recommended_plants.len()
            );
        }
        let missing = service.catalog().missing_signs();
        if !missing.is_empty() {
            println!("⚠️  No entry for: {:?}", missing);
        }
        return Ok(());
    }

    let (tx, _rx) = broadcast::channel(1);
    let shutdown_tx = tx.clone();

    tokio::spawn(async move {
        server::shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    server::start_http_server(service, config, tx.subscribe()).await?;

    Ok(())
}
