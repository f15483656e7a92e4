use dotenvy::dotenv;
use envconfig::Envconfig;
use pharmacy_service::{build_server, create_pool_from_config, run_migrations, Config, StartupError};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::init_from_env()?;
    let pool = create_pool_from_config(&config)?;
    run_migrations(&pool)?;

    log::info!(
        "Starting pharmacy service at http://{}:{}",
        config.host,
        config.port
    );

    build_server(pool, &config.host, config.port, &config.cors_allowed_origins)?.await?;
    Ok(())
}
