mod analyze;
mod cli;
mod infra;
mod report;
mod routes;
mod server;

use textgrade::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
