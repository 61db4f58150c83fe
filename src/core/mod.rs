pub mod engine;
pub mod pipeline;
pub mod resolver;

pub use crate::domain::model::{PageJob, RenderedSite};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
