use crate::config::ItineraConfig;
use crate::database::ItineraryRepository;
use crate::database::sqlite::SqliteRepository;
use axum::Router;
use dotenv;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod config;
mod database;
mod domain;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ItineraryRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = ItineraConfig::from_env();

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        println!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        match Sqlite::create_database(&config.database_url).await {
            Ok(_) => println!("Successfully created database at {}.", &config.database_url),
            Err(e) => panic!(
                "Unable to create database at {}. Error details: {}",
                &config.database_url, e
            ),
        };
    }

    // connect to our db
    let pool = match SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to create pool on {}: {}", config.database_url, e);
        }
    };

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
    };

    println!("Starting server...");

    // start router setup

    // the dashboard frontend calls these paths at the root, so the feature
    // routers merge instead of nesting under a prefix
    let app = Router::new()
        .merge(features::itinerary::itinerary_router())
        .merge(features::map::map_router())
        .merge(features::market::market_router())
        .merge(features::recommendation::recommendation_router())
        .merge(features::summary::summary_router())
        .merge(features::records::records_router())
        .fallback_service(ServeDir::new(config.frontend_path))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    println!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
