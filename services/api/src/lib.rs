mod cli;
mod infra;
mod routes;
mod server;

use partner_landing::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
