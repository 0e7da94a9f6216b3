//! Command execution against the SQLite store.

use std::sync::Arc;

use tracing::info;

use super::command::Cli;
use crate::adapter::inbound::controller::{BasketController, Response};
use crate::adapter::outbound::sqlite::database::connection::open_database;
use crate::adapter::outbound::sqlite::store::SqliteStoreProvider;
use crate::application::service::BasketService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Exit status for a refused action.
pub const EXIT_FORBIDDEN: i32 = 3;

/// Exit status for any other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Run the command selected by `cli` and return the API response.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the action fails.
pub fn execute(cli: &Cli, config: &Config) -> Result<Response> {
    let pool = open_database(&config.database)?;
    let provider = Arc::new(SqliteStoreProvider::new(pool));
    let service = BasketService::new(config.settings(), provider, cli.identity());

    let action = cli.action();
    info!(action = action.name(), database = %config.database, "Running basket command");

    BasketController::new(service).handle(action)
}
