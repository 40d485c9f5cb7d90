mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use wws_rent_check::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
