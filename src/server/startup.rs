use sea_orm::DatabaseConnection;

use crate::server::{clash::ClashClient, config::Config, error::Error};

/// Build the Clash of Clans API client from the configured URL, token and lookup timeout
pub fn build_clash_client(config: &Config) -> Result<ClashClient, Error> {
    let clash_client = ClashClient::builder()
        .base_url(&config.clash_api_url)
        .api_token(config.clash_api_token.clone())
        .user_agent(&config.user_agent)
        .timeout(config.clash_lookup_timeout)
        .build()?;

    Ok(clash_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
