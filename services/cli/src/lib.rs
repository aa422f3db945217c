mod cli;
mod infra;
mod render;

use skillboard::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
