use dioxus_logger::tracing;

use crate::{
    config::Config, error::AppError, model::catalog::PermissionCatalog,
    state::PermissionSubsystem,
};

/// Connects to the database and runs pending migrations.
///
/// Accepts any sea-orm connection string the enabled drivers support (`sqlite://`
/// or `postgres://`).
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Brings up the fake permission subsystem.
///
/// The catalog falls back to empty on any load error. A database that cannot be
/// reached or migrated leaves the subsystem unavailable; the bot keeps running and
/// gated commands answer with `SubsystemUnavailable`.
///
/// # Returns
/// - `Some(PermissionSubsystem)` - Catalog loaded (possibly empty) and store ready
/// - `None` - Store could not be initialized, error already logged
pub async fn init_permissions(config: &Config) -> Option<PermissionSubsystem> {
    let catalog = PermissionCatalog::load_or_empty(&config.permission_catalog_path);

    match connect_to_database(config).await {
        Ok(db) => {
            tracing::info!("Fake permission subsystem ready");
            Some(PermissionSubsystem::new(db, catalog))
        }
        Err(e) => {
            tracing::error!(
                "Failed to initialize fake permission store, subsystem unavailable: {}",
                e
            );
            None
        }
    }
}
