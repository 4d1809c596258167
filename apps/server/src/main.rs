#![warn(clippy::all, clippy::pedantic)]

use std::{env, net::SocketAddr};

use actix_web::{App, HttpServer};
use tracing::info;

mod error;
mod routes;

use error::AppError;
use logger::init_tracing;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    // Runtime environment first, then the value baked from .env
    let addr = env::var("SERVER_ADDR")
        .ok()
        .or_else(|| option_env!("SERVER_ADDR").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = addr.parse()?;

    run_server(addr).await
}

async fn run_server(addr: SocketAddr) -> Result<(), AppError> {
    info!("Check validation service listening on {addr}");

    HttpServer::new(|| App::new().configure(routes::routes))
        .bind(addr)?
        .run()
        .await?;

    Ok(())
}
