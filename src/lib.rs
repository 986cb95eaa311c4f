pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::PreviewArgs;

pub use adapters::{HeadlessDocument, JsonFileStore, MemoryStore, SimulatedSubmitter};
pub use app::{Catalog, Site};
pub use config::UiConfig;
pub use utils::error::{Result, UiError};
