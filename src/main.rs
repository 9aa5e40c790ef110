use anyhow::Result;
use listing_slugs::{
    application::{
        commands::listings::{AssignSlugsCommand, ListingCommandService},
        ports::util::SlugGenerator,
    },
    config::AppConfig,
    domain::listing::{ListingRepository, ListingSlugService},
    infrastructure::{repositories::JsonFileListingRepository, util::DefaultSlugGenerator},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let repo: Arc<dyn ListingRepository> =
        Arc::new(JsonFileListingRepository::new(config.listings_path()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let slug_service = Arc::new(ListingSlugService::new(slugger));
    let service = ListingCommandService::new(repo, slug_service);

    let report = service
        .assign_slugs(AssignSlugsCommand {
            dry_run: config.dry_run(),
        })
        .await?;

    if report.persisted {
        println!(
            "Updated {} properties with unique slugs",
            report.summary.processed
        );
    } else {
        println!(
            "Computed {} unique slugs (dry run, nothing written)",
            report.summary.processed
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
