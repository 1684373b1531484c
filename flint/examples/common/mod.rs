use std::{env, io};

use tracing_subscriber::EnvFilter;

/// Send engine traces to stderr, only when `RUST_LOG` asks for them.
pub fn init_tracing() {
    if env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
