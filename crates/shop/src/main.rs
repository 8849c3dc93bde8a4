//! Shop entry point.

use std::io;
use std::process::ExitCode;

use shop::{Config, Session, ShopError};

fn run(config: &Config) -> Result<(), ShopError> {
    let store = config.load_catalog()?;
    tracing::info!(
        products = store.len(),
        items = store.total_quantity(),
        "catalog loaded"
    );

    let mut session = Session::new(store, io::stdin().lock(), io::stdout().lock());
    session.run()
}

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    shop::init_tracing(&config);

    // 2. Run the menu until the user quits
    match run(&config) {
        Ok(()) => {
            tracing::info!("shop closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "shop terminated");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
