use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_catalog::db::{establish_connection_pool, run_migrations};
use pushkind_catalog::models::config::ServerConfig;
use pushkind_catalog::repository::DieselRepository;
use pushkind_catalog::routes;
use pushkind_catalog::services::seed::seed_products;

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    log::error!("{context}: {err}");
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config =
        ServerConfig::load().map_err(|e| startup_error("Failed to load configuration", e))?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(|e| startup_error("Failed to establish database connection pool", e))?;

    let applied =
        run_migrations(&pool).map_err(|e| startup_error("Failed to migrate database", e))?;
    log::info!("Applied {applied} pending migrations");

    let repo = DieselRepository::new(pool);

    if server_config.seed_demo_products {
        seed_products(&repo).map_err(|e| startup_error("Failed to seed demo products", e))?;
    }

    let bind_address = (server_config.host.clone(), server_config.port);
    log::info!(
        "Serving products on http://{}:{}/products",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
