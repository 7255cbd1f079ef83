mod calculate;
mod cli;
mod infra;
mod routes;
mod server;

use admission_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
