use std::net::TcpListener;
use std::time::Duration;
use sqlx::sqlite::SqlitePoolOptions;

use meridian_backend::run;
use meridian_backend::config::settings::get_config;
use meridian_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "meridian-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let connection_pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(&config.database.connection_string())
        .expect("Failed to create SQLite connection pool");

    // The schema ships with the binary; bring the database up to date
    // before accepting traffic.
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, connection_pool)?.await
}
