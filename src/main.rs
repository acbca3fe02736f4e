use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

use taskpad::repository::storage::FileStorage;
use taskpad::repository::{TaskStore, default_data_dir};
use taskpad::ui;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let data_dir = default_data_dir();
    let storage = FileStorage::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    tracing::info!(data_dir = %data_dir.display(), "starting taskpad");

    let store = Arc::new(TaskStore::new(Box::new(storage)));

    let window = WindowBuilder::new()
        .with_title("Taskpad")
        .with_inner_size(LogicalSize::new(520.0, 760.0))
        .with_min_inner_size(LogicalSize::new(400.0, 500.0));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!("<style>{}</style>", ui::STYLESHEET)),
        )
        .with_context(store)
        .launch(ui::App);

    Ok(())
}
