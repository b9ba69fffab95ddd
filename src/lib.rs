pub mod accessors;
pub mod app;
pub mod color;
mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;
pub mod surface;
pub mod theme;

use clap::Parser;

pub use error::{AppError, AppResult};
pub use store::ThemeStore;

/// Entrypoint used by the CLI binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::debug!("starting tintkit");

    let command = app::Cli::parse().into_command();
    let mut app = app::App::with_default_paths();
    let stdout = std::io::stdout();
    app.execute(command, &mut stdout.lock())?;

    tracing::debug!(theme = %app.store().config().theme, "command complete");
    Ok(())
}
