use anyhow::Context;
use folio_kernel::settings::Settings;
use folio_kernel::{InitCtx, ModuleRegistry};

use folio_app::modules;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Folio settings")?;
    folio_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "folio-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_modules(&ctx).await?;

    // No database is wired; migrations are collected and logged so the
    // persistence target stays visible in the bootstrap output.
    for (module, migration) in registry.collect_migrations() {
        tracing::info!(%module, migration = migration.id, "collected module migration");
    }

    registry.start_modules(&ctx).await?;

    let result = folio_http::start_server(&registry, &settings).await;

    registry.stop_modules().await?;
    result
}
