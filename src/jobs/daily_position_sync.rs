//! Nightly daily-position sweep
//!
//! Recalculates the cash position for every location once per day. A
//! failing location is logged and skipped; the sweep carries on.

use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait};
use tokio::time::{interval, Duration};

use crate::entities::prelude::*;
use crate::services::daily_position::update_daily_agent_data;
use crate::services::providers::ProviderService;

pub async fn start_daily_position_job(db: DatabaseConnection, providers: ProviderService) {
    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(86400)); // Every 24 hours

        // Run immediately on startup
        tracing::info!("Running initial daily position sweep");
        if let Err(e) = sweep_daily_positions(&db, &providers).await {
            tracing::error!("Failed daily position sweep on startup: {}", e);
        }

        loop {
            interval.tick().await;
            tracing::info!("Starting scheduled daily position sweep");

            if let Err(e) = sweep_daily_positions(&db, &providers).await {
                tracing::error!("Failed daily position sweep: {}", e);
            }
        }
    });
}

async fn sweep_daily_positions(
    db: &DatabaseConnection,
    providers: &ProviderService,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let today = Utc::now().date_naive();
    let locations = Locations::find().all(db).await?;

    tracing::info!(
        "Calculating daily positions for {} locations on {}",
        locations.len(),
        today
    );

    let mut processed = 0;
    let mut failed = 0;

    for location in &locations {
        match update_daily_agent_data(db, providers, location.id, today).await {
            Ok(_) => processed += 1,
            Err(e) => {
                failed += 1;
                tracing::error!(
                    "Daily position calculation failed for location {} ({}): {}",
                    location.id,
                    location.name,
                    e
                );
            }
        }
    }

    tracing::info!(
        "Daily position sweep complete: {} processed, {} failed",
        processed,
        failed
    );
    Ok(())
}
