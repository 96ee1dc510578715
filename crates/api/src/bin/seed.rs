//! `fabsite-seed`: load services and projects from a JSON manifest.

use std::path::PathBuf;

use clap::Parser;
use fabsite_api::seed::run_seed;
use fabsite_api::telemetry::init_tracing;
use fabsite_db::DatabaseSettings;

#[derive(Parser, Debug)]
#[command(name = "fabsite-seed", about = "Seed site content from a JSON manifest")]
struct Args {
    /// Manifest file; image paths inside are relative to it.
    manifest: PathBuf,

    /// Delete existing services and projects before inserting.
    #[arg(long)]
    replace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("fabsite_api=info,fabsite_db=info");

    let args = Args::parse();

    let settings = DatabaseSettings::from_env()?;
    tracing::info!(database = %settings.describe(), "Connecting");
    let pool = fabsite_db::create_pool(&settings).await?;
    fabsite_db::run_migrations(&pool).await?;

    let summary = run_seed(&pool, &args.manifest, args.replace).await?;
    println!(
        "Seeded {} services and {} projects ({} rows replaced)",
        summary.services, summary.projects, summary.removed
    );

    pool.close().await;
    Ok(())
}
