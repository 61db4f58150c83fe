pub mod adapters;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::storage::LocalStorage;
pub use config::SiteConfig;
pub use crate::core::resolver::{Catalog, NotFound, ResolvedProject};
pub use crate::core::{engine::SiteEngine, pipeline::SitePipeline};
pub use utils::error::{Result, SiteError};
