use std::path::PathBuf;

use directories::ProjectDirs;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_ENV: String = format!("{}_DATA", *PROJECT_NAME);
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(&*DATA_ENV) {
        return PathBuf::from(dir);
    }
    match ProjectDirs::from("com", "tunedeck", env!("CARGO_PKG_NAME")) {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => PathBuf::from(".").join(".data"),
    }
}

/// File logging under the platform data dir. Stdout belongs to the TUI, so
/// nothing is logged there. Filter comes from `TUNEDECK_LOG_LEVEL`.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(&*LOG_FILE))?;

    let filter = tracing_subscriber::filter::EnvFilter::try_from_env(&*LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
