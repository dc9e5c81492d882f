use countdown_core::error::Result;
use countdown_core::Config;

use crate::tui;

/// Open the interactive countdown on a single-threaded runtime.
pub fn run() -> Result<()> {
    let config = Config::load_or_default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(tui::run(config))
}
