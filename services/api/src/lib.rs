mod cli;
mod form;
mod infra;
mod interactive;
mod routes;
mod server;
mod session;
mod views;

use internship_match::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
